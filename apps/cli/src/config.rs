use std::{path::PathBuf, time::Duration};

pub struct Config {
    pub data_file: PathBuf,
    pub log_format: String,
    pub simulated_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = var("SKYLET_DATA_FILE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "./data/skylet.json".into());
        let log_format = var("SKYLET_LOG_FORMAT").unwrap_or_else(|| "text".into());
        let delay_ms: u64 = var("SKYLET_SIMULATED_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        Self {
            data_file: PathBuf::from(data_file),
            log_format,
            simulated_delay: Duration::from_millis(delay_ms),
        }
    }
}
