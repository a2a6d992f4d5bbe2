use std::future::Future;
use std::time::Duration;

use derive_new::new as New;
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};
use snafu::{ensure, ResultExt};
use tracing::instrument;
use url::Url;

use crate::config::ApiConfig;
use crate::model::{ChannelSummary, VideoRecord};

pub use error::*;

mod error;

/// Everything one fetch yields: the records in upstream order and the summary.
#[derive(Debug, Clone, Default, PartialEq, New)]
pub struct ChannelData {
    pub records: Vec<VideoRecord>,
    pub summary: ChannelSummary,
}

/// Where a view gets its channel data from.
pub trait VideoSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<ChannelData>> + Send;
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideosResponse {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    videos: Vec<VideoRecord>,
    #[serde(default)]
    channel_info: Option<ChannelInfo>,
    #[serde(default)]
    total_views: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelInfo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    subscriber_count: Option<u64>,
    #[serde(default)]
    total_views: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl VideosResponse {
    fn into_channel_data(self) -> ChannelData {
        let channel = self.channel_info.unwrap_or_default();

        let summary = ChannelSummary {
            name: channel.name,
            subscriber_count: channel.subscriber_count,
            channel_total_views: channel.total_views,
            video_count: self.videos.len() as u64,
            sum_of_views: self.total_views,
        };

        ChannelData {
            records: self.videos,
            summary,
        }
    }
}

/// HTTP client for the local videos endpoint.
#[derive(Debug, Clone)]
pub struct ChannelApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl ChannelApi {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        Self::with_builder(reqwest::Client::builder().timeout(timeout), endpoint)
    }

    fn with_builder(builder: reqwest::ClientBuilder, endpoint: Url) -> Result<Self> {
        let client = builder.build().context(BuildClientSnafu)?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl VideoSource for ChannelApi {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<ChannelData> {
        let endpoint = &self.endpoint;
        tracing::info!("fetch channel videos");

        let response = self
            .client
            .get(endpoint.clone())
            .send()
            .await
            .context(RequestSnafu { endpoint: endpoint.clone() })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context(RequestSnafu { endpoint: endpoint.clone() })?;

        ensure!(
            status.is_success(),
            StatusSnafu {
                endpoint: endpoint.clone(),
                status,
                message: serde_json::from_str::<ErrorResponse>(&body)
                    .ok()
                    .map(|e| e.error),
            }
        );

        let response: VideosResponse =
            serde_json::from_str(&body).context(DecodeSnafu { endpoint: endpoint.clone() })?;

        let data = response.into_channel_data();
        tracing::info!(videos = data.records.len(), "fetched channel videos");

        Ok(data)
    }
}
