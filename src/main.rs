use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use blog_console::config::AppConfig;
use blog_console::shell::Shell;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    info!(
        target: "blog_console",
        "blog console starting: base_url={}, state_dir='{}'",
        config.base_url.as_deref().unwrap_or("<default>"),
        config.state_dir.display()
    );

    let mut shell = Shell::new(&config)?;
    shell.run()
}
