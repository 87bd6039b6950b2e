//! Command-line and environment configuration for the server binary.

use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// items_api - in-memory item catalogue over REST
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Interface to bind to
    #[arg(long, env = "ITEMS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Start with an empty catalogue instead of the three sample items
    #[arg(long, env = "ITEMS_NO_SEED", default_value = "false")]
    pub no_seed: bool,

    /// Emit logs as JSON (for log aggregation)
    #[arg(long, env = "ITEMS_LOG_JSON", default_value = "false")]
    pub log_json: bool,
}

impl Config {
    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
