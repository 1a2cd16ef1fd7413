use minfraud::{
    Endpoint, FactorsResponse, InsightsResponse, MinFraudError, Request, ScoreResponse, Warning,
    DEFAULT_BASE_URL,
};
use serde::de::DeserializeOwned;

use crate::config::{validate_base_url, ClientConfig};

/// HTTP client for the minFraud Score, Insights and Factors services.
///
/// Wraps `reqwest::Client`. Every call is one authenticated POST with no
/// retry; timeouts and connection limits are whatever the wrapped client is
/// configured with. Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct MinFraudClient {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    license_key: String,
}

impl std::fmt::Debug for MinFraudClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinFraudClient")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("license_key", &"[REDACTED]")
            .finish()
    }
}

impl MinFraudClient {
    /// Create a client for the production service. No network activity happens here.
    ///
    /// Panics if the TLS backend cannot be initialised.
    pub fn new(account_id: impl Into<String>, license_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("minfraud-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self::with_http_client(account_id, license_key, http)
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_http_client(
        account_id: impl Into<String>,
        license_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: account_id.into(),
            license_key: license_key.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, MinFraudError> {
        Self::new(config.account_id.clone(), config.license_key.clone())
            .with_base_url(config.base_url.clone())
    }

    /// Point the client at another service root, such as a sandbox or a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, MinFraudError> {
        let base_url = base_url.into();
        validate_base_url(&base_url).map_err(|e| MinFraudError::Config(e.to_string()))?;
        self.base_url = base_url;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a minFraud Score for the given transaction.
    pub async fn score(&self, request: &Request) -> Result<ScoreResponse, MinFraudError> {
        let response: ScoreResponse = self.post(Endpoint::Score, request).await?;
        log_warnings(Endpoint::Score, response.warnings());
        Ok(response)
    }

    /// Request minFraud Insights for the given transaction.
    pub async fn insight(&self, request: &Request) -> Result<InsightsResponse, MinFraudError> {
        let response: InsightsResponse = self.post(Endpoint::Insights, request).await?;
        log_warnings(Endpoint::Insights, response.score.warnings());
        Ok(response)
    }

    /// Request minFraud Factors for the given transaction.
    pub async fn factor(&self, request: &Request) -> Result<FactorsResponse, MinFraudError> {
        let response: FactorsResponse = self.post(Endpoint::Factors, request).await?;
        log_warnings(Endpoint::Factors, response.as_score().warnings());
        Ok(response)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: &Request,
    ) -> Result<T, MinFraudError> {
        let url = endpoint.url(&self.base_url);
        let body = serde_json::to_vec(request)?;

        tracing::debug!(%endpoint, %url, "sending minFraud request");

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.account_id, Some(&self.license_key))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| MinFraudError::Http(format!("{endpoint} request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| MinFraudError::Http(format!("failed to read {endpoint} response: {e}")))?;

        if !status.is_success() {
            tracing::warn!(%endpoint, status = status.as_u16(), "minFraud request rejected");
            return Err(MinFraudError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!(%endpoint, status = status.as_u16(), "minFraud response received");
        Ok(serde_json::from_str(&text)?)
    }
}

fn log_warnings(endpoint: Endpoint, warnings: &[Warning]) {
    for w in warnings {
        tracing::warn!(
            %endpoint,
            code = %w.code,
            input_pointer = w.input_pointer.as_deref().unwrap_or(""),
            "minFraud warning"
        );
    }
}
