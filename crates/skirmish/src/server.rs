//! `CombatServer` builder and accept loop.
//!
//! This is the entry point for running the service. It ties the layers
//! together: transport (accept) → handler (per-connection loop) →
//! protocol (frame + codec) → resolver (rules).

use std::sync::Arc;
use std::time::Duration;

use skirmish_protocol::{Codec, JsonLineCodec};
use skirmish_transport::{Connection, TcpTransport, Transport};
use tokio::sync::{Semaphore, watch};
use tokio::task::JoinSet;

use crate::config::ServerConfig;
use crate::handler::handle_connection;
use crate::SkirmishError;

/// Shared server state passed to each connection handler task.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks. The resolver
/// itself is a pure function and needs no state here.
pub(crate) struct ServerState<C: Codec> {
    pub(crate) codec: C,
}

/// Builder for configuring and starting a combat server.
///
/// # Example
///
/// ```rust,ignore
/// let server = CombatServer::builder()
///     .bind("0.0.0.0:5555")
///     .config(ServerConfig::default())
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct CombatServerBuilder {
    bind_addr: String,
    config: ServerConfig,
}

impl CombatServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:5555".to_string(),
            config: ServerConfig::default(),
        }
    }

    /// Sets the `host:port` address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the server configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Binds the listening socket and builds the server.
    ///
    /// Uses [`JsonLineCodec`], the wire format clients speak. Fails with a
    /// transport error if the address can't be bound (in use, permission
    /// denied); in that case the service does not come up.
    pub async fn build(
        self,
    ) -> Result<CombatServer<JsonLineCodec>, SkirmishError> {
        let transport = TcpTransport::bind(&self.bind_addr).await?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(CombatServer {
            transport,
            state: Arc::new(ServerState {
                codec: JsonLineCodec,
            }),
            limiter: Arc::new(Semaphore::new(self.config.max_connections)),
            shutdown_timeout: self.config.shutdown_timeout,
            shutdown_tx,
            shutdown_rx,
        })
    }
}

impl Default for CombatServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Requests a running server to stop.
///
/// Cloneable and safe to trigger from any task, any number of times, and
/// with zero connections active. The corresponding
/// [`run`](CombatServer::run) call stops accepting, signals in-flight
/// handlers, and returns within the configured shutdown timeout.
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    /// Signals the server to shut down. Idempotent.
    pub fn shutdown(&self) {
        // Send only fails when the server is already gone.
        let _ = self.tx.send(true);
    }
}

/// A running combat-resolution server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct CombatServer<C: Codec> {
    transport: TcpTransport,
    state: Arc<ServerState<C>>,
    limiter: Arc<Semaphore>,
    shutdown_timeout: Duration,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl CombatServer<JsonLineCodec> {
    /// Creates a new builder.
    pub fn builder() -> CombatServerBuilder {
        CombatServerBuilder::new()
    }
}

impl<C: Codec> CombatServer<C> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Returns a handle that can stop this server.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.shutdown_tx.clone(),
        }
    }

    /// Runs the server accept loop.
    ///
    /// Accepts incoming connections and spawns a handler task for each,
    /// up to `max_connections`; connections past the cap are closed
    /// immediately. Runs until a [`ShutdownHandle`] fires, then releases
    /// the listening socket, waits up to the shutdown timeout for
    /// in-flight handlers to drain, and aborts any that remain.
    pub async fn run(mut self) -> Result<(), SkirmishError> {
        tracing::info!("combat service running");

        let mut handlers = JoinSet::new();
        let mut shutdown = self.shutdown_rx.clone();

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    tracing::info!("shutdown signal received");
                    break;
                }
                res = self.transport.accept() => match res {
                    Ok(conn) => {
                        let permit = match Arc::clone(&self.limiter)
                            .try_acquire_owned()
                        {
                            Ok(permit) => permit,
                            Err(_) => {
                                tracing::warn!(
                                    conn_id = %conn.id(),
                                    "connection limit reached, rejecting"
                                );
                                let _ = conn.close().await;
                                continue;
                            }
                        };
                        let state = Arc::clone(&self.state);
                        let shutdown = self.shutdown_rx.clone();
                        handlers.spawn(async move {
                            // Held for the handler's lifetime; dropping it
                            // frees a connection slot.
                            let _permit = permit;
                            if let Err(e) =
                                handle_connection(conn, state, shutdown)
                                    .await
                            {
                                tracing::debug!(
                                    error = %e,
                                    "connection ended with error"
                                );
                            }
                        });
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "accept failed");
                    }
                }
            }
        }

        // Stop accepting: releasing the listener before the drain means no
        // new connection can arrive while handlers wind down.
        drop(self.transport);

        let drain = async {
            while handlers.join_next().await.is_some() {}
        };
        if tokio::time::timeout(self.shutdown_timeout, drain)
            .await
            .is_err()
        {
            tracing::warn!(
                timeout = ?self.shutdown_timeout,
                "handlers still running after shutdown timeout, aborting"
            );
            handlers.abort_all();
            while handlers.join_next().await.is_some() {}
        }

        tracing::info!("combat service stopped");
        Ok(())
    }
}
