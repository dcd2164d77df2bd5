use reqwest::Client;
use tracing::debug;

use crate::api::records::{ApiRecord, ApiResponse, RawActivity, RawFountain, RawGreenSpace};
use crate::config::AppConfig;
use crate::model::{Dataset, FetchError};

/// Source of the three raw record collections. The aggregator only talks to
/// this trait, so tests can swap in canned or failing sources.
#[async_trait::async_trait]
pub trait SpotSource: Send + Sync {
    async fn green_spaces(&self) -> Result<Vec<ApiRecord<RawGreenSpace>>, FetchError>;
    async fn fountains(&self) -> Result<Vec<ApiRecord<RawFountain>>, FetchError>;
    async fn activities(&self) -> Result<Vec<ApiRecord<RawActivity>>, FetchError>;
}

pub struct OpenDataClient {
    client: Client,
    config: AppConfig,
}

impl OpenDataClient {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent("cool-spots/0.1 (+https://opendata.paris.fr)")
            .build()?;
        Ok(Self { client, config })
    }

    fn build_url(&self, dataset: Dataset, rows: u32) -> String {
        format!(
            "{}?dataset={}&rows={}",
            self.config.api_base_url,
            dataset.id(),
            rows
        )
    }

    async fn fetch_records<T>(
        &self,
        dataset: Dataset,
        rows: u32,
    ) -> Result<Vec<ApiRecord<T>>, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.build_url(dataset, rows);
        debug!("fetching {} from {}", dataset, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Http { dataset, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { dataset, status });
        }

        let body: ApiResponse<T> = response
            .json()
            .await
            .map_err(|source| FetchError::Http { dataset, source })?;

        debug!("{}: {} of {} records", dataset, body.records.len(), body.nhits);
        Ok(body.records)
    }
}

#[async_trait::async_trait]
impl SpotSource for OpenDataClient {
    async fn green_spaces(&self) -> Result<Vec<ApiRecord<RawGreenSpace>>, FetchError> {
        self.fetch_records(Dataset::GreenSpaces, self.config.green_space_rows)
            .await
    }

    async fn fountains(&self) -> Result<Vec<ApiRecord<RawFountain>>, FetchError> {
        self.fetch_records(Dataset::Fountains, self.config.fountain_rows)
            .await
    }

    async fn activities(&self) -> Result<Vec<ApiRecord<RawActivity>>, FetchError> {
        self.fetch_records(Dataset::Activities, self.config.activity_rows)
            .await
    }
}
