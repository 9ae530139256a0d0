pub mod app;
pub mod config;
pub mod error;
pub mod life_admin;
pub mod tool;

pub use config::{Config, Valves};
pub use error::FetchError;
pub use tool::{LogFetcher, ToolManifest};
