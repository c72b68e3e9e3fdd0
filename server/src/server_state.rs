use std::time::Instant;

use trip_planner_services::{PlannerError, PlannerServices};

use crate::{config::ServerConfig, http_metrics::HttpMetrics};

pub struct ServerState {
    pub config: ServerConfig,
    pub services: PlannerServices,
    pub metrics: HttpMetrics,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Result<Self, PlannerError> {
        let services = PlannerServices::new(&config.currency)?;

        Ok(Self {
            config,
            services,
            metrics: HttpMetrics::new(),
            started_at: Instant::now(),
        })
    }
}
