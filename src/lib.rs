pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpPredictionApi;
pub use config::CliConfig;
pub use core::form::{FormController, SubmitDisposition};
pub use core::session::Session;
pub use utils::error::{ClientError, Result};
