//! A random-play agent that connects to a Sternhalma server and plays
//! one game to the end.
//!
//! Usage: `sternhalma-agent [ADDR]` where `ADDR` is `host:port` or
//! `unix:/path` (default `127.0.0.1:7878`). Log verbosity via
//! `RUST_LOG`, e.g. `RUST_LOG=sternhalma_client=debug`.

use sternhalma_client::{
    Agent, BrownianStrategy, Client, ClientConfig, GameResult, ServerAddr,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let addr: ServerAddr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:7878".to_string())
        .parse()?;

    let mut client = Client::connect(ClientConfig::new(addr)).await?;
    let mut agent = Agent::new(BrownianStrategy);

    let outcome = agent.play(&mut client).await?;
    client.close().await;

    println!("{}", agent.board().render());
    match outcome {
        Some(GameResult::Finished {
            winner,
            total_turns,
            scores,
        }) => {
            println!(
                "{winner} won after {total_turns} turns \
                 ({} - {})",
                scores.0[0], scores.0[1]
            );
        }
        Some(GameResult::MaxTurns {
            total_turns,
            scores,
        }) => {
            println!(
                "turn limit reached after {total_turns} turns \
                 ({} - {})",
                scores.0[0], scores.0[1]
            );
        }
        None => println!("server ended the session without a result"),
    }

    Ok(())
}
