//! Server configuration from command-line flags and environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use poster_core::template::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use poster_core::CanvasSize;

use crate::validation::{validate_canvas_size, ValidationError};

/// Default port for the editor server.
pub const DEFAULT_PORT: u16 = 3000;

/// Hosts that are always accepted regardless of the allow-list.
const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// Command-line arguments for the poster designer server.
#[derive(Debug, Clone, Parser)]
#[command(name = "poster-designer")]
#[command(about = "Poster designer editor server")]
#[command(version)]
pub struct CliArgs {
    /// Address to bind
    #[arg(long, env = "POSTER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "POSTER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Extra hostnames accepted in the Host header (comma separated).
    /// When empty, every host is accepted.
    #[arg(long = "allowed-host", env = "POSTER_ALLOWED_HOSTS", value_delimiter = ',')]
    pub allowed_hosts: Vec<String>,

    /// Canvas width used when a request does not supply one
    #[arg(long, env = "POSTER_CANVAS_WIDTH", default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub canvas_width: f32,

    /// Canvas height used when a request does not supply one
    #[arg(long, env = "POSTER_CANVAS_HEIGHT", default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: f32,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub addr: SocketAddr,
    /// Lower-cased hostnames accepted in addition to loopback.
    pub allowed_hosts: Vec<String>,
    /// Canvas size for requests that omit one.
    pub canvas_size: CanvasSize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            allowed_hosts: Vec::new(),
            canvas_size: CanvasSize::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
        }
    }
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = ValidationError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let canvas_size = CanvasSize::new(args.canvas_width, args.canvas_height);
        validate_canvas_size(canvas_size)?;

        let allowed_hosts = args
            .allowed_hosts
            .iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        Ok(Self {
            addr: SocketAddr::new(args.host, args.port),
            allowed_hosts,
            canvas_size,
        })
    }
}

impl ServerConfig {
    /// Whether a request for `host` (as sent in the Host header) is accepted.
    #[must_use]
    pub fn is_host_allowed(&self, host: &str) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        let name = host_name(host).to_ascii_lowercase();
        LOOPBACK_HOSTS.contains(&name.as_str()) || self.allowed_hosts.contains(&name)
    }
}

/// Strip the port (and IPv6 brackets) from a Host header value.
fn host_name(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split_once(']').map_or(rest, |(name, _)| name);
    }
    host.split_once(':').map_or(host, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["poster-designer"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_from(args(&[])).expect("valid");
        assert_eq!(config.addr.port(), DEFAULT_PORT);
        assert_eq!(config.canvas_size, CanvasSize::new(450.0, 800.0));
        assert!(config.allowed_hosts.is_empty());
    }

    #[test]
    fn test_allowed_hosts_are_normalized() {
        let config = ServerConfig::try_from(args(&[
            "--allowed-host",
            "Poster.Example.com, ,preview.example.com",
        ]))
        .expect("valid");
        assert_eq!(
            config.allowed_hosts,
            vec!["poster.example.com", "preview.example.com"]
        );
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        let result = ServerConfig::try_from(args(&["--canvas-width", "0"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_host_allow_list() {
        let config = ServerConfig {
            allowed_hosts: vec!["poster.example.com".to_string()],
            ..ServerConfig::default()
        };
        assert!(config.is_host_allowed("poster.example.com"));
        assert!(config.is_host_allowed("POSTER.example.com:3000"));
        assert!(config.is_host_allowed("localhost:3000"));
        assert!(config.is_host_allowed("127.0.0.1"));
        assert!(config.is_host_allowed("[::1]:3000"));
        assert!(!config.is_host_allowed("evil.example.com"));
    }

    #[test]
    fn test_empty_allow_list_accepts_all() {
        let config = ServerConfig::default();
        assert!(config.is_host_allowed("anything.example"));
    }
}
