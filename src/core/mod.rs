pub mod form;
pub mod render;
pub mod schema;
pub mod session;

pub use crate::domain::model::{GradeSheet, PredictionOutcome, RequestLifecycle};
pub use crate::domain::ports::{ConfigProvider, PredictionApi};
pub use crate::utils::error::Result;
