//! Runtime configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

/// Routes used when none are configured.
pub const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("medilabo-patient-service", "http://patient-service:8082"),
    ("medilabo-note-service", "http://note-service:8083"),
    ("medilabo-risk-diabetes-service", "http://risk-service:8084"),
];

/// One `name=url` route mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub service: String,
    pub upstream: Url,
}

impl RouteSpec {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let (service, upstream) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected SERVICE=URL, got '{}'", raw))?;
        let service = service.trim();
        if service.is_empty() || service.contains('/') {
            return Err(format!("invalid service name '{}'", service));
        }

        let upstream = Url::parse(upstream.trim())
            .map_err(|e| format!("invalid upstream URL '{}': {}", upstream, e))?;
        if !matches!(upstream.scheme(), "http" | "https") {
            return Err(format!(
                "upstream must use http or https, got: {}",
                upstream.scheme()
            ));
        }

        Ok(Self {
            service: service.to_string(),
            upstream,
        })
    }
}

/// Gateway settings, from flags or environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "medilabo-gateway",
    version,
    about = "Basic-auth gateway for the Medilabo services"
)]
pub struct GatewayConfig {
    /// Address the gateway listens on
    #[arg(long, env = "GATEWAY_LISTEN", default_value = "0.0.0.0:8081")]
    pub listen: SocketAddr,

    /// Route as SERVICE=URL; repeat for each service
    #[arg(
        long = "route",
        env = "GATEWAY_ROUTES",
        value_delimiter = ',',
        value_parser = RouteSpec::parse
    )]
    pub routes: Vec<RouteSpec>,

    /// Upstream request timeout, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// bcrypt cost for the account password hashes
    #[arg(
        long,
        env = "PASSWORD_COST",
        default_value_t = bcrypt::DEFAULT_COST,
        value_parser = clap::value_parser!(u32).range(4..=31)
    )]
    pub password_cost: u32,
}

impl GatewayConfig {
    /// Configured routes, or [`DEFAULT_ROUTES`] if none were given.
    pub fn routes(&self) -> Vec<RouteSpec> {
        if !self.routes.is_empty() {
            return self.routes.clone();
        }
        DEFAULT_ROUTES
            .iter()
            .filter_map(|(service, url)| RouteSpec::parse(&format!("{}={}", service, url)).ok())
            .collect()
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
