use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use trip_planner_services::DEFAULT_CURRENCY;

/// Every option can also be set through the environment variable named next to it.
#[derive(Parser, Debug, Clone)]
#[command(name = "server", version, about = "Mock trip planner API")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Deployment name reported by `/` and `/api/health`
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub environment: String,

    /// Serve `/docs` and `/openapi.json`
    #[arg(long, env = "ENABLE_DOCS", default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub docs: bool,

    /// Collect request metrics and serve them at `/metrics`
    #[arg(long, env = "ENABLE_METRICS", default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub metrics: bool,

    /// Built dashboard, served under `/dashboard` when the directory exists
    #[arg(long, env = "FRONTEND_DIR", default_value = "frontend/dist")]
    pub frontend_dir: PathBuf,

    #[arg(long, env = "LOG_DIR", default_value = "server/log")]
    pub log_dir: PathBuf,

    /// ISO 4217 code used when a request does not name one
    #[arg(long, env = "DEFAULT_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            environment: "development".into(),
            docs: true,
            metrics: true,
            frontend_dir: PathBuf::from("frontend/dist"),
            log_dir: PathBuf::from("server/log"),
            currency: DEFAULT_CURRENCY.into(),
        }
    }
}
