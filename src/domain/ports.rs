use crate::domain::model::{CourseList, GradeSubmission, HealthReport, ModelInfo, PredictionOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
}

/// Everything the form needs from the prediction backend.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    async fn input_courses(&self) -> Result<CourseList>;
    async fn output_courses(&self) -> Result<CourseList>;
    async fn model_info(&self) -> Result<ModelInfo>;
    async fn health(&self) -> Result<HealthReport>;
    async fn predict(&self, submission: &GradeSubmission) -> Result<PredictionOutcome>;
}
