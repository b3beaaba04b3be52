//! End-to-end demo: starts a combat server, plays one scripted exchange
//! against it over raw TCP, prints the events, and shuts down.
//!
//! Run with `cargo run -p duel`. Set `SKIRMISH_ADDR` to change the bind
//! address (default `127.0.0.1:5555`).

use std::time::Duration;

use skirmish::prelude::*;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let bind_addr = std::env::var("SKIRMISH_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:5555".to_string());

    let server = CombatServer::builder().bind(&bind_addr).build().await?;
    let addr = server.local_addr()?.to_string();
    let shutdown = server.shutdown_handle();
    let server_task = tokio::spawn(server.run());

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Two duellists in melee range, one of them at death's door.
    let request = CombatRequest {
        match_id: MatchId(1),
        players: vec![
            PlayerState {
                id: PlayerId(1),
                x: 0.0,
                y: 0.0,
                hp: 100,
            },
            PlayerState {
                id: PlayerId(2),
                x: 1.0,
                y: 0.5,
                hp: 10,
            },
        ],
        actions: vec![PlayerAction {
            id: PlayerId(1),
            action: "ATTACK".to_string(),
            dirx: 1.0,
            diry: 0.5,
        }],
    };

    let stream = TcpStream::connect(&addr).await?;
    let (read, mut write) = stream.into_split();
    let mut reader = BufReader::new(read);

    let mut line = serde_json::to_string(&request)?;
    line.push('\n');
    write.write_all(line.as_bytes()).await?;
    tracing::info!(%addr, "sent combat request");

    let mut response = String::new();
    reader.read_line(&mut response).await?;
    let result: CombatResult = serde_json::from_str(&response)?;

    for event in &result.events {
        tracing::info!(
            kind = ?event.kind,
            attacker = %event.attacker,
            target = %event.target,
            damage = event.damage,
            "combat event"
        );
    }

    shutdown.shutdown();
    server_task.await??;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
