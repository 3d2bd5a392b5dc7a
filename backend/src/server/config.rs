//! Application configuration resolved once at startup.

use std::net::SocketAddr;

use clap::Parser;

/// Built-in token secret for local development.
pub const DEV_JWT_SECRET: &str = "insecure-dev-secret";

/// Runtime configuration, from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stockyard-backend",
    about = "Dealership stock management backend"
)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    #[arg(long, env = "STOCKYARD_BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind_addr: SocketAddr,

    /// Secret used to sign and verify access tokens.
    #[arg(
        long,
        env = "STOCKYARD_JWT_SECRET",
        default_value = DEV_JWT_SECRET,
        hide_env_values = true
    )]
    pub jwt_secret: String,

    /// Access token lifetime in seconds.
    #[arg(long, env = "STOCKYARD_JWT_EXPIRY_SECS", default_value_t = 3600)]
    pub jwt_expiry_secs: i64,

    /// Bcrypt cost factor for password hashing.
    #[arg(long, env = "STOCKYARD_BCRYPT_COST", default_value_t = 10)]
    pub bcrypt_cost: u32,

    /// Seed a default account when the user collection is empty.
    #[arg(long, env = "STOCKYARD_SEED_DEFAULT_ACCOUNT", default_value_t = false)]
    pub seed_default_account: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = AppConfig::try_parse_from(["stockyard-backend"]).expect("parseable");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.jwt_expiry_secs, 3600);
        assert_eq!(config.bcrypt_cost, 10);
        assert!(!config.seed_default_account);
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "stockyard-backend",
            "--bind-addr",
            "0.0.0.0:9000",
            "--jwt-expiry-secs",
            "60",
            "--seed-default-account",
        ])
        .expect("parseable");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.jwt_expiry_secs, 60);
        assert!(config.seed_default_account);
    }
}
