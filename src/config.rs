use std::env;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Clone, Debug)]
pub struct Config {
    pub lendings_base_url: String,
    pub fines_base_url: String,
    pub fine_daily_rate: Decimal,
    pub fine_grace_days: i64,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub service_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            lendings_base_url: env::var("LENDINGS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            fines_base_url: env::var("FINES_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3002".to_string()),
            fine_daily_rate: env::var("FINE_DAILY_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(dec!(20)),
            fine_grace_days: env::var("FINE_GRACE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            service_token: env::var("SERVICE_TOKEN").ok(),
        }
    }
}
