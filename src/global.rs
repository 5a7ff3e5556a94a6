use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;
use crate::nytimes::{NewsSource, NytClient};

pub struct Global {
    pub config: Config,
    pub news: Arc<dyn NewsSource>,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        if config.nytimes.api_key.is_empty() {
            tracing::warn!("no NYTimes API key configured, upstream requests will be rejected");
        }

        let client = NytClient::new(&config.nytimes).context("http client")?;

        Ok(Self::with_source(config, Arc::new(client)))
    }

    pub fn with_source(config: Config, news: Arc<dyn NewsSource>) -> Arc<Self> {
        Arc::new(Self {
            config,
            news,
            started_at: std::time::Instant::now(),
        })
    }
}
