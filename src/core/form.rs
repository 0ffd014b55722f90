use crate::core::schema::{load_schema, FormSchema};
use crate::domain::model::{coerce_grade, GradeSheet, PredictionOutcome, RequestLifecycle};
use crate::domain::ports::PredictionApi;
use crate::utils::error::Result;

/// What a `submit` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// A request was issued and the lifecycle moved to Success or Failed.
    Completed,
    /// A prediction was already in flight; nothing was sent.
    AlreadyInFlight,
}

/// Owns the grade sheet and the submission lifecycle. The sheet's key set is
/// fixed to the input schema; the controller only ever rewrites values.
pub struct FormController {
    schema: FormSchema,
    sheet: GradeSheet,
    lifecycle: RequestLifecycle,
    result: Option<PredictionOutcome>,
}

impl FormController {
    pub fn new(schema: FormSchema, sheet: GradeSheet) -> Self {
        Self {
            schema,
            sheet,
            lifecycle: RequestLifecycle::Idle,
            result: None,
        }
    }

    /// Loads the schemas and returns a ready-to-use controller. Fails when
    /// either course schema cannot be fetched.
    pub async fn bootstrap(api: &impl PredictionApi) -> Result<Self> {
        let (schema, sheet) = load_schema(api).await?;
        Ok(Self::new(schema, sheet))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn sheet(&self) -> &GradeSheet {
        &self.sheet
    }

    pub fn lifecycle(&self) -> &RequestLifecycle {
        &self.lifecycle
    }

    pub fn last_result(&self) -> Option<&PredictionOutcome> {
        self.result.as_ref()
    }

    /// Coerces `raw` and writes it to one course. Unknown courses are a
    /// logged no-op so the key set stays equal to the input schema.
    pub fn set_grade(&mut self, course: &str, raw: &str) {
        let value = coerce_grade(raw);
        if self.sheet.set(course, value) {
            tracing::debug!("Set {} = {}", course, value);
        } else {
            tracing::warn!("Ignoring grade for unknown course '{}'", course);
        }
    }

    /// Coerces `raw` once and applies it to every course.
    pub fn set_all(&mut self, raw: &str) {
        let value = coerce_grade(raw);
        self.sheet.fill(value);
        tracing::debug!("Filled all {} courses with {}", self.sheet.len(), value);
    }

    /// Sends the current sheet snapshot to the prediction endpoint. A submit
    /// while one is already in flight does nothing. Failures never escape:
    /// they land in the lifecycle as a displayable message, and the sheet is
    /// left untouched either way.
    pub async fn submit(&mut self, api: &impl PredictionApi) -> SubmitDisposition {
        if self.lifecycle == RequestLifecycle::Loading {
            tracing::debug!("Prediction already in flight, ignoring submit");
            return SubmitDisposition::AlreadyInFlight;
        }

        self.lifecycle = RequestLifecycle::Loading;
        let snapshot = self.sheet.to_submission();

        match api.predict(&snapshot).await {
            Ok(outcome) => {
                tracing::info!("Prediction received for {} courses", outcome.predictions.len());
                self.result = Some(outcome);
                self.lifecycle = RequestLifecycle::Success;
            }
            Err(e) => {
                tracing::error!("Prediction request failed: {}", e);
                self.lifecycle = RequestLifecycle::Failed(e.user_message());
            }
        }

        SubmitDisposition::Completed
    }
}
