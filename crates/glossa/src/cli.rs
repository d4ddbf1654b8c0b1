//! Command line interface
//!
//! Every command prints one JSON document on stdout.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glossa_application::ports::registry::{list_embedding_providers, list_translation_providers};
use glossa_domain::constants::TRANSLATION_ROLE_OTHER;
use glossa_domain::error::Error;
use glossa_domain::value_objects::{
    EvaluationRequest, SimilarityMethod, TextPair, TranslationRequest,
};
use glossa_infrastructure::logging::log_config_loaded;
use glossa_infrastructure::{ConfigLoader, GlossaContext, init_logging};
use serde_json::{Value, json};

/// Command line interface for Glossa
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(about = "Text-similarity scoring and round-trip translation evaluation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one pair of texts
    Score {
        /// `lexical`, `vector-space`, `semantic` or `all`
        #[arg(short, long, default_value = "all")]
        method: MethodSelection,

        /// Embedding model for the semantic method
        #[arg(long)]
        model: Option<String>,

        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// First text
        source: String,

        /// Second text
        target: String,
    },

    /// Translate a text
    Translate {
        /// Target language
        #[arg(long)]
        to: String,

        /// Source language
        #[arg(long)]
        from: Option<String>,

        /// Phrasing register, e.g. "Doctor"
        #[arg(long, default_value = TRANSLATION_ROLE_OTHER)]
        role: String,

        /// Model identifier (defaults to the configured model)
        #[arg(long)]
        model: Option<String>,

        /// Text to translate
        text: String,
    },

    /// Round-trip a text through several models and rank them
    Evaluate {
        /// Language of the text
        #[arg(long)]
        from: String,

        /// Intermediate language
        #[arg(long)]
        to: String,

        /// Phrasing register
        #[arg(long, default_value = TRANSLATION_ROLE_OTHER)]
        role: String,

        /// Model to evaluate; repeat for several
        #[arg(long = "model", required = true)]
        models: Vec<String>,

        /// Text to evaluate with
        text: String,
    },

    /// List registered embedding and translation providers
    Providers,
}

/// Method argument of `glossa score`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodSelection {
    /// Every registered method
    All,
    /// A single method
    One(SimilarityMethod),
}

impl FromStr for MethodSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

/// Load configuration, start logging, then wire the services
///
/// The configuration source is reported once the subscriber exists.
pub fn startup(config_path: Option<&Path>) -> anyhow::Result<GlossaContext> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;
    log_config_loaded(loader.source_path().as_deref());

    Ok(GlossaContext::from_config(config)?)
}

/// Run a command against a wired context
pub async fn run_command(context: &GlossaContext, command: Command) -> anyhow::Result<Value> {
    match command {
        Command::Score {
            method,
            model,
            timeout,
            source,
            target,
        } => {
            let similarity = match &model {
                Some(model) => context.similarity_for_model(model),
                None => context.similarity(),
            };
            let pair = TextPair::new(source, target);
            let timeout = timeout.map(Duration::from_secs);

            match method {
                MethodSelection::One(method) => {
                    let outcome = match timeout {
                        Some(timeout) => similarity.score_with_timeout(&pair, method, timeout).await,
                        None => similarity.score(&pair, method).await,
                    }
                    .with_context(|| format!("{method} scoring failed"))?;
                    Ok(serde_json::to_value(outcome)?)
                }
                MethodSelection::All => {
                    let report = match timeout {
                        Some(timeout) => tokio::time::timeout(timeout, similarity.score_all(&pair))
                            .await
                            .map_err(|_| Error::timeout("similarity report", timeout))?,
                        None => similarity.score_all(&pair).await,
                    };
                    Ok(json!({
                        "results": report.results,
                        "overall": report.overall(),
                    }))
                }
            }
        }

        Command::Translate {
            to,
            from,
            role,
            model,
            text,
        } => {
            let mut request = TranslationRequest::new(text, to).with_role(role);
            if let Some(from) = from {
                request = request.with_source_language(from);
            }
            if let Some(model) = model {
                request = request.with_model(model);
            }

            let translation = context
                .translator()?
                .translate(&request)
                .await
                .context("translation failed")?;
            Ok(serde_json::to_value(translation)?)
        }

        Command::Evaluate {
            from,
            to,
            role,
            models,
            text,
        } => {
            let request = EvaluationRequest {
                text,
                source_language: from,
                target_language: to,
                role,
                models,
            };
            let report = context
                .evaluation_service()?
                .evaluate(&request)
                .await
                .context("evaluation failed")?;
            Ok(serde_json::to_value(report)?)
        }

        Command::Providers => {
            let entries = |providers: Vec<(&'static str, &'static str)>| {
                providers
                    .into_iter()
                    .map(|(name, description)| json!({ "name": name, "description": description }))
                    .collect::<Vec<_>>()
            };
            Ok(json!({
                "embedding": entries(list_embedding_providers()),
                "translation": entries(list_translation_providers()),
            }))
        }
    }
}
