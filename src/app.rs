use crate::config::{Config, Valves};
use crate::tool::LogFetcher;
use anyhow::Context;
use serde_json::json;
use std::io::Write;
use tracing::info;

pub struct App {
    pub config: Config,
    pub fetcher: LogFetcher,
}

impl App {
    pub fn new(config: Config) -> Self {
        let fetcher = LogFetcher::from_config(&config);
        App { config, fetcher }
    }

    /// Produce what a host would receive: the manifest, or the tool's return string.
    pub fn output(&self) -> anyhow::Result<String> {
        if self.config.manifest {
            let descriptor = json!({
                "manifest": LogFetcher::manifest(),
                "function": LogFetcher::function_spec(),
                "valves": Valves::schema(),
            });
            return serde_json::to_string_pretty(&descriptor).context("failed to encode manifest");
        }

        info!(base_url = %self.config.base_url, "invoking fetch_logs");
        Ok(self.fetcher.fetch_logs())
    }

    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let text = self.output()?;
        writeln!(out, "{text}").context("failed to write tool output")?;
        Ok(())
    }
}
