//! Server configuration from flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "storyboard-server",
    about = "Serve the storyboard UI, planning API and image proxy",
    version
)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory served for non-API paths
    #[arg(short, long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Timeout for one upstream image fetch, in seconds
    #[arg(long, env = "PROXY_TIMEOUT_SECS", default_value_t = 60)]
    pub proxy_timeout_secs: u64,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "storyboard-server",
            "--port",
            "8088",
            "--static-dir",
            "dist",
            "--proxy-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(config.addr().port(), 8088);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.proxy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::try_parse_from(["storyboard-server", "--port", "http"]).is_err());
    }
}
