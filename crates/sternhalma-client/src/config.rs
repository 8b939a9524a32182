//! Client configuration: where the server is and how patiently to reach it.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(unix)]
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ServerAddr
// ---------------------------------------------------------------------------

/// The server endpoint: a TCP `host:port` or a Unix-domain socket path.
///
/// Both are equivalent at the framing layer; the choice only affects how
/// the stream is dialed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerAddr {
    /// TCP endpoint, e.g. `"game.example.net:7878"`.
    Tcp(String),

    /// Unix-domain socket path, e.g. `/run/sternhalma.sock`.
    #[cfg(unix)]
    Unix(PathBuf),
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp(addr) => write!(f, "{addr}"),
            #[cfg(unix)]
            Self::Unix(path) => write!(f, "unix:{}", path.display()),
        }
    }
}

/// The given string is neither `host:port` nor `unix:/path`.
#[derive(Debug, thiserror::Error)]
#[error("invalid server address {0:?}: expected host:port or unix:/path")]
pub struct AddrParseError(String);

impl FromStr for ServerAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[cfg(unix)]
        if let Some(path) = s.strip_prefix("unix:") {
            if path.is_empty() {
                return Err(AddrParseError(s.to_string()));
            }
            return Ok(Self::Unix(PathBuf::from(path)));
        }

        // Minimal shape check only; name resolution happens at dial time.
        match s.rsplit_once(':') {
            Some((host, port))
                if !host.is_empty() && port.parse::<u16>().is_ok() =>
            {
                Ok(Self::Tcp(s.to_string()))
            }
            _ => Err(AddrParseError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Connection and timing parameters for one session.
///
/// The retry budget only applies to connection establishment; once a
/// session is up, individual sends are not retried (a failed send is a
/// broken connection, and reconnecting is the caller's decision).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where the server lives.
    pub addr: ServerAddr,

    /// How many times to try dialing before giving up.
    pub attempts: u32,

    /// Sleep between failed connection attempts.
    pub retry_delay: Duration,

    /// Per-operation timeout applied to each read and each write
    /// independently (never to the game as a whole — a turn can
    /// legitimately take a long time to arrive only if the server
    /// keeps the connection warm within this bound).
    pub io_timeout: Duration,
}

impl ClientConfig {
    /// A config for the given endpoint with the default retry budget
    /// (20 attempts, 500 ms apart) and a 30-second operation timeout.
    pub fn new(addr: ServerAddr) -> Self {
        Self {
            addr,
            attempts: 20,
            retry_delay: Duration::from_millis(500),
            io_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tcp_address() {
        let addr: ServerAddr = "127.0.0.1:7878".parse().unwrap();
        assert_eq!(addr, ServerAddr::Tcp("127.0.0.1:7878".into()));
    }

    #[test]
    fn test_parse_hostname_address() {
        let addr: ServerAddr = "game.example.net:19".parse().unwrap();
        assert_eq!(addr, ServerAddr::Tcp("game.example.net:19".into()));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_unix_address() {
        let addr: ServerAddr = "unix:/run/halma.sock".parse().unwrap();
        assert_eq!(addr, ServerAddr::Unix("/run/halma.sock".into()));
    }

    #[test]
    fn test_parse_rejects_missing_port() {
        assert!("localhost".parse::<ServerAddr>().is_err());
        assert!("localhost:".parse::<ServerAddr>().is_err());
        assert!("localhost:notaport".parse::<ServerAddr>().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_rejects_empty_unix_path() {
        assert!("unix:".parse::<ServerAddr>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for text in ["127.0.0.1:7878", "unix:/tmp/s.sock"] {
            #[cfg(not(unix))]
            if text.starts_with("unix:") {
                continue;
            }
            let addr: ServerAddr = text.parse().unwrap();
            assert_eq!(addr.to_string(), text);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config =
            ClientConfig::new(ServerAddr::Tcp("127.0.0.1:1".into()));
        assert_eq!(config.attempts, 20);
        assert_eq!(config.retry_delay, Duration::from_millis(500));
        assert_eq!(config.io_timeout, Duration::from_secs(30));
    }
}
