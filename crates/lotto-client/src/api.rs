use std::{sync::LazyLock, time::Duration};

use serde::Deserialize;

pub mod draw;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Where and how long to ask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCommon {
    base_url: String,
    timeout: Duration,
}

impl ApiCommon {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join `path` onto the base url
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[expect(async_fn_in_trait)]
pub trait ApiRequest
where
    for<'de> Self::Response: Deserialize<'de>,
{
    type Response;

    async fn execute(self, common: &ApiCommon) -> anyhow::Result<Self::Response>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let common = ApiCommon::new("http://127.0.0.1:5000/", Duration::from_secs(1));
        assert_eq!(common.endpoint("/lotto"), "http://127.0.0.1:5000/lotto");

        let common = ApiCommon::new("http://example.com/api", Duration::from_secs(1));
        assert_eq!(common.endpoint("lotto"), "http://example.com/api/lotto");
    }
}
