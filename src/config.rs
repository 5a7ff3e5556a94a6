use std::env;
use std::net::SocketAddr;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

const TOP_STORIES_URL: &str = "https://api.nytimes.com/svc/topstories/v2";
const ARTICLE_SEARCH_URL: &str = "https://api.nytimes.com/svc/search/v2/articlesearch.json";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NytimesConfig {
    pub api_key: String,
    pub top_stories_url: String,
    pub article_search_url: String,
    /// Upper bound for a single upstream request.
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub level: String,
    pub api: ApiConfig,
    pub nytimes: NytimesConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let s = config::Config::builder()
            .set_default("level", "info")?
            .set_default("api.bind", "0.0.0.0:8000")?
            .set_default("nytimes.api_key", "")?
            .set_default("nytimes.top_stories_url", TOP_STORIES_URL)?
            .set_default("nytimes.article_search_url", ARTICLE_SEARCH_URL)?
            .set_default("nytimes.timeout_secs", 10)?
            .set_default(
                "nytimes.user_agent",
                concat!("nytimes-api/", env!("CARGO_PKG_VERSION")),
            )?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("nytimes.api_key", env::var("NYT_API_KEY").ok())?
            .build()?;

        s.try_deserialize()
    }
}
