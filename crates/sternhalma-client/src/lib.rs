//! Session client and agent loop for the Sternhalma game server.
//!
//! Layered on `sternhalma-protocol`:
//!
//! - [`ClientConfig`] / [`ServerAddr`] — where the server is and how
//!   patiently to reach it.
//! - [`Client`] — one socket, one session: bounded-retry connect, the
//!   `hello`/`reconnect` handshake, and timed typed message exchange.
//! - [`Agent`] / [`Strategy`] — the game loop that turns server
//!   messages into board updates and movement choices.
//!
//! # Example
//!
//! ```no_run
//! use sternhalma_client::{Agent, BrownianStrategy, Client, ClientConfig};
//!
//! # async fn run() -> Result<(), sternhalma_client::ClientError> {
//! let config = ClientConfig::new("127.0.0.1:7878".parse().unwrap());
//! let mut client = Client::connect(config).await?;
//! let mut agent = Agent::new(BrownianStrategy);
//! let result = agent.play(&mut client).await?;
//! client.close().await;
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

mod agent;
mod client;
mod config;
mod error;

pub use agent::{Agent, BrownianStrategy, FirstStrategy, Strategy};
pub use client::{Client, SessionState};
pub use config::{AddrParseError, ClientConfig, ServerAddr};
pub use error::ClientError;

// The result type callers receive from `Agent::play`.
pub use sternhalma_protocol::GameResult;
