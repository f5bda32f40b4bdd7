use std::path::{Path, PathBuf};

mod session;
mod terminal;

use clap::ArgAction;
use parkade::{Config, Lot};
use session::Session;

/// The config file looked for in the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG_PATH: &str = "parkade.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured number of parking spaces
    #[arg(long)]
    capacity: Option<usize>,

    /// Override the directory exported ledgers are written into
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = self.load_config()?;
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(dir) = self.export_dir {
            config.export_dir = dir;
        }

        let lot = Lot::new(config.capacity);
        Session::new(lot, config.export_dir).run()
    }

    /// Resolves the configuration.
    ///
    /// An explicitly passed `--config` path must load; the default path is
    /// optional and falls back to defaults when absent or unreadable.
    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(path) = &self.config {
            return Config::load(path)
                .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()));
        }

        Ok(
            Config::load(Path::new(DEFAULT_CONFIG_PATH)).unwrap_or_else(|e| {
                tracing::debug!("using default configuration: {e}");
                Config::default()
            }),
        )
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
