/// Base URL the client talks to unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://minfraud.maxmind.com/minfraud/v2.0";

/// The three minFraud services. Each one answers with a wider response than
/// the previous: Score, then Insights, then Factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Score,
    Insights,
    Factors,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Score => "score",
            Endpoint::Insights => "insights",
            Endpoint::Factors => "factors",
        }
    }

    /// Join `base` and this endpoint's path with a single `/`.
    pub fn url(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            Endpoint::Score.url(DEFAULT_BASE_URL),
            "https://minfraud.maxmind.com/minfraud/v2.0/score"
        );
        assert_eq!(
            Endpoint::Insights.url(DEFAULT_BASE_URL),
            "https://minfraud.maxmind.com/minfraud/v2.0/insights"
        );
        assert_eq!(
            Endpoint::Factors.url(DEFAULT_BASE_URL),
            "https://minfraud.maxmind.com/minfraud/v2.0/factors"
        );
    }

    #[test]
    fn test_trailing_slash_is_collapsed() {
        assert_eq!(
            Endpoint::Factors.url("http://127.0.0.1:8080/minfraud/v2.0/"),
            "http://127.0.0.1:8080/minfraud/v2.0/factors"
        );
    }
}
