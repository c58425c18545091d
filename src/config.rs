//! Command-line driven runtime configuration.
//!
//! The service is deliberately configuration-light: one flag selects seed-mode
//! versus serve-mode, and one option picks the listen port. No environment
//! variables influence behavior (`RUST_LOG` only affects log filtering).

use clap::Parser;

/// Command-line arguments accepted by the server binary.
#[derive(Debug, Parser)]
#[command(
    name = "studentreg",
    about = "In-memory student registry served over HTTP"
)]
pub struct Cli {
    /// Populate the store with randomized sample data and exit without serving.
    #[arg(long)]
    pub seed: bool,

    /// Number of sample students to generate in seed-mode.
    #[arg(long, default_value_t = 10)]
    pub seed_count: usize,

    /// TCP port to listen on in serve-mode.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

/// Resolved runtime configuration threaded explicitly through startup.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    /// Whether to run the seeder instead of serving HTTP traffic.
    pub seed: bool,
    /// Record count for seed-mode.
    pub seed_count: usize,
    /// Listen port for serve-mode.
    pub port: u16,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            seed: cli.seed,
            seed_count: cli.seed_count,
            port: cli.port,
        }
    }
}
