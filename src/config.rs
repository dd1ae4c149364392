use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::store::DEFAULT_DATA_FILE;

pub const LISTEN_ADDR_ENV: &str = "MOVIES_LISTEN_ADDR";
pub const DATA_FILE_ENV: &str = "MOVIES_DATA_FILE";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Parser)]
#[command(name = "movie-catalog", about = "REST service over a JSON file of movies")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// JSON array of movies, read at startup and rewritten on every change
    #[arg(long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["movie-catalog"]).unwrap();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "movie-catalog",
            "--listen-addr",
            "127.0.0.1:9000",
            "--data-file",
            "/tmp/movies.json",
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.data_file, PathBuf::from("/tmp/movies.json"));
    }

    #[test]
    fn bad_address_is_rejected() {
        assert!(Config::try_parse_from(["movie-catalog", "--listen-addr", "nowhere"]).is_err());
    }
}
