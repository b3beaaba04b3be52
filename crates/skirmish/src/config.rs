//! Server configuration.

use std::time::Duration;

/// Tunables for a [`CombatServer`](crate::CombatServer).
///
/// The bind address lives on the builder, not here — everything in this
/// struct has a usable default, while the address is the one thing an
/// embedder always chooses.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Maximum concurrently served connections. Connections accepted past
    /// the cap are closed immediately rather than queued.
    pub max_connections: usize,

    /// How long `run` waits for in-flight handlers to finish after the
    /// shutdown signal before aborting them.
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_connections: 256,
            shutdown_timeout: Duration::from_millis(500),
        }
    }
}
