use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::api::{RecipeApi, SearchOutcome};
use crate::config::AppConfig;
use crate::error::SearchError;
use crate::model::SearchResponse;

/// Client for TheMealDB JSON search endpoint.
pub struct MealDb {
    client: Client,
    base_url: String,
}

impl MealDb {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(MealDb {
            client,
            base_url: config.endpoint.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        MealDb {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl RecipeApi for MealDb {
    async fn search_by_name(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        // The query value is percent-encoded by the typed query builder
        let response = self
            .client
            .get(format!("{}/search.php", self.base_url))
            .query(&[("s", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::StatusError(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        match parsed.meals {
            Some(meals) if !meals.is_empty() => {
                debug!("search '{}' matched {} meal(s)", query, meals.len());
                Ok(SearchOutcome::Found(meals))
            }
            _ => {
                debug!("search '{}' matched nothing", query);
                Ok(SearchOutcome::NoMatches)
            }
        }
    }
}
