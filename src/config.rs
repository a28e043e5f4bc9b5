// src/config.rs
use crate::error::AppError;
use crate::types::{PageRef, SecretToken};
use clap::Parser;

/// Environment variable holding the Notion integration token.
pub const NOTION_TOKEN_VAR: &str = "NOTION_API_TOKEN";

/// Environment variable holding the OpenAI API key.
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion page ID (hyphenated UUID, bare 32-char form, or page URL)
    pub page: String,

    /// Skip the AI summary and print only the outline
    #[arg(long, default_value_t = false)]
    pub no_summary: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration — validated and ready to drive the run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub page: PageRef,
    pub notion_token: SecretToken,
    /// `None` only when the summary stage is skipped.
    pub openai_key: Option<SecretToken>,
    pub summarize: bool,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete configuration from CLI input and environment.
    ///
    /// Missing credentials are a fatal startup condition: both collaborators
    /// are checked before any network activity, except that the OpenAI key
    /// is not required when the summary stage is skipped.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let notion_token = require_env(NOTION_TOKEN_VAR)?;

        let openai_key = if cli.no_summary {
            None
        } else {
            Some(require_env(OPENAI_KEY_VAR)?)
        };

        Ok(PipelineConfig {
            page: PageRef::parse(&cli.page),
            notion_token,
            openai_key,
            summarize: !cli.no_summary,
            verbose: cli.verbose,
        })
    }
}

fn require_env(name: &'static str) -> Result<SecretToken, AppError> {
    let value = std::env::var(name)
        .map_err(|_| AppError::MissingConfiguration(format!("{} environment variable not set", name)))?;
    SecretToken::new(name, value).map_err(AppError::from)
}
