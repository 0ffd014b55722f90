use crate::domain::model::{CourseList, GradeSubmission, HealthReport, ModelInfo, PredictionOutcome};
use crate::domain::ports::{ConfigProvider, PredictionApi};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// reqwest-backed backend client. Cheap to clone; the base URL is resolved
/// once from configuration and never re-read.
#[derive(Debug, Clone)]
pub struct HttpPredictionApi {
    base_url: String,
    client: Client,
}

impl HttpPredictionApi {
    pub fn new(config: &impl ConfigProvider) -> Self {
        Self {
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::BackendError {
            status: status.as_u16(),
            detail: extract_detail(&body),
        })
    }
}

/// Pulls the `detail` string out of a FastAPI-style error body. Non-JSON or
/// detail-less bodies yield an empty string, which downstream collapses into
/// a generic message.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

#[async_trait]
impl PredictionApi for HttpPredictionApi {
    async fn input_courses(&self) -> Result<CourseList> {
        self.get_json("/courses/input").await
    }

    async fn output_courses(&self) -> Result<CourseList> {
        self.get_json("/courses/output").await
    }

    async fn model_info(&self) -> Result<ModelInfo> {
        self.get_json("/model/info").await
    }

    async fn health(&self) -> Result<HealthReport> {
        self.get_json("/health").await
    }

    async fn predict(&self, submission: &GradeSubmission) -> Result<PredictionOutcome> {
        let url = self.endpoint("/predict");
        tracing::debug!("POST {} ({} grades)", url, submission.grades.len());
        let response = self.client.post(&url).json(submission).send().await?;
        decode(response).await
    }
}
