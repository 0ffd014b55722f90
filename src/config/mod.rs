use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "academiq")]
#[command(about = "Interactive client for the AcademiQ grade prediction backend")]
pub struct CliConfig {
    /// Base URL of the prediction backend. Read once at startup.
    #[arg(long, env = "ACADEMIQ_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)
    }
}
