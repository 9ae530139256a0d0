use life_admin_logs::app::App;
use life_admin_logs::config::Config;
use std::io::stdout;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries only the tool result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(Config::new());
    app.run(&mut stdout().lock())
}
