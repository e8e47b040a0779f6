// config.rs
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_DATABASE_PATH: &str = "data/zillow_rockridge.db";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub max_workers: usize,
}

impl Config {
    /// Reads settings from the environment (after `.env` has been loaded).
    pub fn init() -> Config {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let database_path = lookup("DATABASE_PATH")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        Config {
            database_path: PathBuf::from(database_path),
            host: parse_or("HOST", &lookup, IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: parse_or("PORT", &lookup, DEFAULT_PORT),
            max_workers: parse_or("MAX_WORKERS", &lookup, DEFAULT_MAX_WORKERS).max(1),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {key}={raw:?}, using the default");
            default
        }),
    }
}
