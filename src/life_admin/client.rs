use crate::error::FetchError;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Clone)]
pub struct LifeAdminClient {
    pub base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl LifeAdminClient {
    pub fn new(base_url: String, api_key: String, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        LifeAdminClient {
            base_url,
            api_key,
            agent: builder.build(),
        }
    }

    fn logs_url(&self) -> String {
        format!("{}/logs", self.base_url.trim_end_matches('/'))
    }

    /// GET /logs. Anything but a 200 is an error, as is a body that is not JSON.
    pub fn get_logs(&self) -> Result<Value, FetchError> {
        let url = self.logs_url();
        debug!(%url, "requesting logs");

        let resp = match self
            .agent
            .get(&url)
            .set(API_KEY_HEADER, &self.api_key)
            .call()
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(transport)) => return Err(transport.into()),
        };

        // ureq only reports 4xx/5xx as errors
        if resp.status() != 200 {
            return Err(FetchError::Status(resp.status()));
        }

        let data = resp.into_json::<Value>()?;
        debug!(?data, "received logs");

        Ok(data)
    }
}
