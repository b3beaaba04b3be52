//! # Skirmish
//!
//! A small synchronous combat-resolution service over TCP. Clients send
//! newline-delimited JSON [`CombatRequest`](skirmish_protocol::CombatRequest)
//! messages; the server resolves each one with the pure rules in
//! [`skirmish_resolver`] and writes one newline-delimited
//! [`CombatResult`](skirmish_protocol::CombatResult) back on the same
//! connection, strictly in arrival order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skirmish::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), SkirmishError> {
//!     let server = CombatServer::builder()
//!         .bind("127.0.0.1:5555")
//!         .build()
//!         .await?;
//!     let handle = server.shutdown_handle();
//!     // ... hand `handle` to whatever owns the process lifecycle ...
//!     server.run().await
//! }
//! ```

mod config;
mod error;
mod handler;
mod server;

pub use config::ServerConfig;
pub use error::SkirmishError;
pub use server::{CombatServer, CombatServerBuilder, ShutdownHandle};

/// Convenient re-exports for server embedders.
pub mod prelude {
    pub use crate::{
        CombatServer, CombatServerBuilder, ServerConfig, ShutdownHandle,
        SkirmishError,
    };
    pub use skirmish_protocol::{
        CombatEvent, CombatRequest, CombatResult, EventKind, MatchId,
        PlayerAction, PlayerId, PlayerState,
    };
    pub use skirmish_resolver::resolve;
}
