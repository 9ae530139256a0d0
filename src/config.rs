use clap::Parser;
use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://life-admin.tomascollins.workers.dev";

/// Settings the host hands to the tool. Fixed once constructed.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Valves {
    /// API key for life-admin logs access
    #[serde(default)]
    api_key: String,
}

impl Valves {
    pub fn new(api_key: impl Into<String>) -> Self {
        Valves {
            api_key: api_key.into(),
        }
    }

    /// Load valves from the JSON object the host stores for this tool.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// JSON schema the host renders as the tool's settings form
    pub fn schema() -> Value {
        json!({
            "title": "Valves",
            "type": "object",
            "properties": {
                "api_key": {
                    "title": "Api Key",
                    "type": "string",
                    "default": "",
                    "description": "API key for life-admin logs access"
                }
            }
        })
    }
}

impl fmt::Debug for Valves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.is_configured() { "<redacted>" } else { "" };
        f.debug_struct("Valves").field("api_key", &key).finish()
    }
}

/// life-admin-logs - run the Life Admin logs tool the way a chat host would
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Value sent as the X-API-Key header
    #[arg(long, env = "LIFE_ADMIN_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Life Admin API base address
    #[arg(long, env = "LIFE_ADMIN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Overall request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the tool manifest instead of fetching logs
    #[arg(long)]
    pub manifest: bool,
}

impl Config {
    /// Parse command-line arguments into Config
    pub fn new() -> Self {
        Config::parse()
    }

    pub fn valves(&self) -> Valves {
        Valves::new(self.api_key.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valves_default_to_empty_key() {
        let valves = Valves::default();
        assert_eq!(valves.api_key(), "");
        assert!(!valves.is_configured());
    }

    #[test]
    fn valves_from_host_json() {
        assert_eq!(Valves::from_json("{}").unwrap(), Valves::default());
        let valves = Valves::from_json(r#"{"api_key":"abc"}"#).unwrap();
        assert_eq!(valves.api_key(), "abc");
        assert!(Valves::from_json(r#"{"api_key":1}"#).is_err());
    }

    #[test]
    fn debug_output_hides_key() {
        let printed = format!("{:?}", Valves::new("super-secret"));
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn schema_describes_api_key() {
        let schema = Valves::schema();
        assert_eq!(schema["properties"]["api_key"]["type"], "string");
        assert_eq!(schema["properties"]["api_key"]["default"], "");
    }

    #[test]
    fn cli_flags_parse() {
        let config = Config::try_parse_from([
            "life-admin-logs",
            "--api-key",
            "k",
            "--base-url",
            "http://localhost:8787",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(config.valves(), Valves::new("k"));
        assert_eq!(config.base_url, "http://localhost:8787");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert!(!config.manifest);
    }
}
