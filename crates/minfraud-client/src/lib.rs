//! Async client for the MaxMind minFraud v2.0 web service.
//!
//! One [`MinFraudClient`] holds the account ID and license key and sends them
//! as HTTP Basic credentials on every call. Each of `score`, `insight` and
//! `factor` is a single POST; failures (transport, non-2xx, malformed JSON)
//! come back as [`MinFraudError`] and are never retried.
//!
//! # Quick Example
//!
//! ```no_run
//! use minfraud_client::{Device, MinFraudClient, Request};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = MinFraudClient::new("123456", "abc123");
//!
//! let score = client
//!     .score(&Request::new(Device::new("81.2.69.142")))
//!     .await
//!     .unwrap();
//!
//! println!("risk score: {:?}", score.risk_score_f64());
//! for w in score.warnings() {
//!     println!("{} at {:?}", w.code, w.input_pointer);
//! }
//! # }
//! ```

mod config;
mod http_client;

pub use config::{ClientConfig, ConfigError};
pub use http_client::MinFraudClient;

// Re-export the schema so callers only need this crate
pub use minfraud::*;
