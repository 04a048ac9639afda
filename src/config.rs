use std::env;

use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub log_dir: String,
    pub load_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            load_sample_data: env::var("LOAD_SAMPLE_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        }
    }
}
