use crate::config::{Config, DEFAULT_BASE_URL, Valves};
use crate::error::{FetchError, render_error};
use crate::life_admin::client::LifeAdminClient;
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::warn;

pub const FUNCTION_NAME: &str = "fetch_logs";

/// Metadata a chat host shows when listing installed tools.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolManifest {
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub required_open_webui_version: &'static str,
    pub requirements: Vec<&'static str>,
    pub version: &'static str,
    pub licence: &'static str,
}

/// Fetches daily logs from the Life Admin API on behalf of a chat host.
#[derive(Clone)]
pub struct LogFetcher {
    valves: Valves,
    client: LifeAdminClient,
}

impl LogFetcher {
    pub fn new(valves: Valves) -> Self {
        Self::with_endpoint(valves, DEFAULT_BASE_URL, None)
    }

    pub fn with_endpoint(valves: Valves, base_url: &str, timeout: Option<Duration>) -> Self {
        let client = LifeAdminClient::new(
            base_url.to_string(),
            valves.api_key().to_string(),
            timeout,
        );
        LogFetcher { valves, client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoint(config.valves(), &config.base_url, config.timeout())
    }

    /// Returns a JSON string of daily log entries, or an error message.
    /// Never fails: every error is reported in the returned text.
    pub fn fetch_logs(&self) -> String {
        render(self.try_fetch_logs())
    }

    pub fn try_fetch_logs(&self) -> Result<Value, FetchError> {
        if !self.valves.is_configured() {
            return Err(FetchError::MissingApiKey);
        }

        self.client.get_logs()
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest {
            title: "Life Admin Logs",
            author: "Tom Collins",
            description: "Fetches daily logs from Life Admin API",
            required_open_webui_version: "0.4.0",
            requirements: vec!["ureq"],
            version: env!("CARGO_PKG_VERSION"),
            licence: "MIT",
        }
    }

    /// Function-calling descriptor; fetch_logs takes no arguments.
    pub fn function_spec() -> Value {
        json!({
            "name": FUNCTION_NAME,
            "description": "Fetches daily logs from the Life Admin API. Returns a JSON string of daily log entries",
            "parameters": {
                "type": "object",
                "properties": {}
            }
        })
    }
}

fn render(result: Result<Value, FetchError>) -> String {
    let rendered = result.and_then(|data| {
        serde_json::to_string_pretty(&data).map_err(|e| FetchError::Decode(e.into()))
    });

    match rendered {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "fetch_logs failed");
            render_error(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_fetcher_reports_missing_key() {
        let fetcher = LogFetcher::new(Valves::default());
        assert!(matches!(
            fetcher.try_fetch_logs(),
            Err(FetchError::MissingApiKey)
        ));
        assert_eq!(fetcher.fetch_logs(), "Error: API key not configured");
    }

    #[test]
    fn render_pretty_prints_with_two_spaces() {
        let text = render(Ok(json!({"a": 1, "b": [true]})));
        assert_eq!(text, "{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}");
    }

    #[test]
    fn render_keeps_non_ascii_unescaped() {
        assert_eq!(render(Ok(json!({"meal": "café"}))), "{\n  \"meal\": \"café\"\n}");
    }

    #[test]
    fn render_formats_status_failure() {
        assert_eq!(
            render(Err(FetchError::Status(503))),
            "Error fetching logs: API request failed with status 503"
        );
    }

    #[test]
    fn manifest_carries_crate_version() {
        let manifest = LogFetcher::manifest();
        assert_eq!(manifest.title, "Life Admin Logs");
        assert_eq!(manifest.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn function_spec_takes_no_arguments() {
        let spec = LogFetcher::function_spec();
        assert_eq!(spec["name"], FUNCTION_NAME);
        assert_eq!(spec["parameters"]["properties"], json!({}));
    }
}
