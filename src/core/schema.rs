use crate::domain::model::{GradeSheet, ModelInfo};
use crate::domain::ports::PredictionApi;
use crate::utils::error::Result;

/// Everything the form needs before the first user interaction. Input and
/// output schemas resolve together or not at all.
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub input_courses: Vec<String>,
    pub output_courses: Vec<String>,
    pub model_info: Option<ModelInfo>,
}

/// Fetches both course schemas and the model metadata in one concurrent
/// gather. Either schema failing is fatal; a model-info failure only logs
/// and leaves the metadata absent. On success the initial grade sheet is
/// seeded with the default grade for every input course.
pub async fn load_schema(api: &impl PredictionApi) -> Result<(FormSchema, GradeSheet)> {
    tracing::info!("Loading course schema from backend");

    let (input, output, info) = tokio::join!(
        api.input_courses(),
        api.output_courses(),
        api.model_info()
    );

    let input = input?;
    let output = output?;
    let model_info = match info {
        Ok(info) => Some(info),
        Err(e) => {
            tracing::warn!("Model info unavailable: {}", e);
            None
        }
    };

    tracing::info!(
        "Schema loaded: {} input courses, {} output courses",
        input.courses.len(),
        output.courses.len()
    );

    let sheet = GradeSheet::with_defaults(&input.courses);

    Ok((
        FormSchema {
            input_courses: input.courses,
            output_courses: output.courses,
            model_info,
        },
        sheet,
    ))
}
