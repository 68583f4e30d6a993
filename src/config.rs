use std::{env, net::SocketAddr, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_NOTICE_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub notice_hold: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or(lookup("PORT"), "PORT", DEFAULT_PORT);
        let notice_secs = parse_or(lookup("NOTICE_SECS"), "NOTICE_SECS", DEFAULT_NOTICE_SECS);

        Self {
            port,
            notice_hold: Duration::from_secs(notice_secs),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T: std::str::FromStr + Copy>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={raw:?}");
            default
        }),
    }
}
