pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod http_metrics;
pub mod middleware;
pub mod routes;
pub mod server_state;
