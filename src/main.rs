// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_digest::{
    compose_report, deliver, extract_text, render_outline, AppError, BlockTree, CommandLineInput,
    ComposedDocument, ContentSource, NotionHttpClient, OpenAiSummarizer, OutlineComposer,
    PageRef, PipelineConfig, Summarizer, SynopsisOutcome, SynopsisProvider, TreeFetcher,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration. Diagnostics go to stderr and a temp-dir
/// log file; stdout is reserved for the report itself.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_digest.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Orchestrates the run: fetch tree → compose outline and digest text →
/// summarize → print.
struct DigestPipeline<'a> {
    config: &'a PipelineConfig,
}

impl<'a> DigestPipeline<'a> {
    fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl ContentSource for DigestPipeline<'_> {
    async fn fetch(&self, root: &PageRef) -> Result<BlockTree, AppError> {
        log::info!("Retrieving block tree for {}", root);

        let client = NotionHttpClient::new(&self.config.notion_token)?;
        let fetcher = TreeFetcher::new(Arc::new(client));
        fetcher.fetch_tree(root).await
    }
}

impl OutlineComposer for DigestPipeline<'_> {
    fn compose(&self, tree: &BlockTree) -> ComposedDocument {
        ComposedDocument {
            outline: render_outline(tree),
            digest_text: extract_text(tree),
        }
    }
}

#[async_trait::async_trait]
impl SynopsisProvider for DigestPipeline<'_> {
    async fn synopsis(&self, document: &str) -> Result<String, AppError> {
        let api_key = self
            .config
            .openai_key
            .clone()
            .ok_or_else(|| AppError::Summarization("no OpenAI key configured".to_string()))?;
        OpenAiSummarizer::new(api_key).summarize(document).await
    }
}

/// Executes the pipeline. Fetch failures abort the run with no output;
/// summarization failures are folded into the report instead.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = DigestPipeline::new(config);

    let tree = pipeline.fetch(&config.page).await?;
    let document = pipeline.compose(&tree);

    let synopsis = if config.summarize {
        match pipeline.synopsis(&document.digest_text).await {
            Ok(text) => SynopsisOutcome::Ready(text),
            Err(error) => {
                log::error!("Error generating summary: {}", error);
                SynopsisOutcome::Failed(error)
            }
        }
    } else {
        SynopsisOutcome::Skipped
    };

    let report = compose_report(&document.outline, &synopsis);
    deliver(&report)?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = PipelineConfig::resolve(cli).context("configuration")?;

    execute_pipeline(&config).await?;

    Ok(())
}
