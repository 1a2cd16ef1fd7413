//! Typed schema for the MaxMind minFraud v2.0 web service.
//!
//! The service exposes three endpoints that all accept the same [`Request`]
//! body and answer with progressively wider responses:
//!
//! - **Score** ([`ScoreResponse`]): risk score and account counters, plus warnings and IP risk
//! - **Insights** ([`InsightsResponse`]): Score plus card, device, email and address data
//! - **Factors** ([`FactorsResponse`]): Insights plus disposition and subscores
//!
//! This crate is transport-free. See the `minfraud-client` crate for the HTTP client.
//!
//! # Example
//!
//! ```
//! use minfraud::{Billing, Device, Request};
//!
//! let request = Request::new(Device::new("81.2.69.142")).with_billing(Billing {
//!     country: Some("GB".to_string()),
//!     ..Default::default()
//! });
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(
//!     body,
//!     r#"{"device":{"ip_address":"81.2.69.142"},"billing":{"country":"GB"}}"#
//! );
//! ```

pub mod constants;
pub mod error;
pub mod request;
pub mod response;

pub use constants::*;
pub use error::MinFraudError;
pub use request::*;
pub use response::*;
