//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for local
//! embedding generation. Uses ONNX models for inference without external API calls.

use std::ops::Range;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};

use glossa_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::EmbeddingProvider;
use glossa_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_FASTEMBED_BASE, EMBEDDING_DIMENSION_FASTEMBED_LARGE,
    EMBEDDING_DIMENSION_FASTEMBED_SMALL, FASTEMBED_CHANNEL_CAPACITY, FASTEMBED_MAX_INPUT_TOKENS,
    FASTEMBED_SPECIAL_TOKENS,
};

/// Messages for the FastEmbed actor
enum FastEmbedMessage {
    EmbedBatch {
        texts: Vec<String>,
        tx: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// Model tokenizer with truncation turned off, reporting token byte ranges
type SpanTokenizer = dyn Fn(&str) -> Result<Vec<Range<usize>>> + Send + Sync;

/// FastEmbed local embedding provider using Actor pattern
///
/// The ONNX session needs exclusive access, so it lives on a dedicated
/// thread and encode requests are queued through a channel. Token counting
/// only needs the tokenizer and runs on the caller. Clones share the same
/// actor.
#[derive(Clone)]
pub struct FastEmbedProvider {
    sender: mpsc::Sender<FastEmbedMessage>,
    tokenizer: Arc<SpanTokenizer>,
    model_name: String,
    dimensions: usize,
    max_length: usize,
}

impl FastEmbedProvider {
    /// Load a model by identifier (e.g. `all-MiniLM-L6-v2`, `bge-small-en`)
    ///
    /// `max_length` is the session window, special tokens included. Blocks
    /// while the model is downloaded and the session is created.
    pub fn new(model_name: &str, max_length: usize) -> Result<Self> {
        let (model, dimensions) = parse_embedding_model(model_name)?;
        let init_options = InitOptions::new(model)
            .with_max_length(max_length)
            .with_cache_dir(default_cache_dir())
            .with_show_download_progress(false);

        let text_embedding = TextEmbedding::try_new(init_options)
            .map_err(|e| Error::model_load(model_name, format!("FastEmbed init failed: {e}")))?;
        let tokenizer = span_tokenizer(&text_embedding, model_name)?;

        let (tx, rx) = mpsc::channel(FASTEMBED_CHANNEL_CAPACITY);
        let actor = FastEmbedActor {
            receiver: rx,
            model: text_embedding,
            model_name: model_name.to_string(),
        };
        std::thread::Builder::new()
            .name(format!("fastembed-{model_name}"))
            .spawn(move || actor.run())
            .map_err(|e| Error::model_load(model_name, format!("actor thread failed: {e}")))?;

        Ok(Self {
            sender: tx,
            tokenizer,
            model_name: model_name.to_string(),
            dimensions,
            max_length,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(FastEmbedMessage::EmbedBatch {
                texts: texts.to_vec(),
                tx,
            })
            .await
            .map_err(|_| Error::embedding("FastEmbed actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::embedding("FastEmbed actor closed")))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    fn max_input_tokens(&self) -> usize {
        self.max_length.saturating_sub(FASTEMBED_SPECIAL_TOKENS)
    }

    fn token_spans(&self, text: &str) -> Result<Vec<Range<usize>>> {
        (self.tokenizer)(text)
    }
}

/// Clone the session tokenizer without its truncation so long inputs are
/// counted in full
fn span_tokenizer(model: &TextEmbedding, model_name: &str) -> Result<Arc<SpanTokenizer>> {
    let mut tokenizer = model.tokenizer.clone();
    tokenizer
        .with_truncation(None)
        .map_err(|e| Error::model_load(model_name, format!("tokenizer setup failed: {e}")))?;
    tokenizer.with_padding(None);

    let model_name = model_name.to_string();
    Ok(Arc::new(move |text: &str| {
        let encoding = tokenizer.encode(text, false).map_err(|e| {
            Error::embedding(format!("Tokenizing for '{model_name}' failed: {e}"))
        })?;
        Ok(encoding
            .get_offsets()
            .iter()
            .map(|&(start, end)| start..end)
            .collect())
    }))
}

/// Internal actor that owns the ONNX session
struct FastEmbedActor {
    receiver: mpsc::Receiver<FastEmbedMessage>,
    model: TextEmbedding,
    model_name: String,
}

impl FastEmbedActor {
    fn run(mut self) {
        while let Some(msg) = self.receiver.blocking_recv() {
            match msg {
                FastEmbedMessage::EmbedBatch { texts, tx } => {
                    let result = self
                        .model
                        .embed(texts, None)
                        .map(|vectors| {
                            vectors
                                .into_iter()
                                .map(|vector| Embedding {
                                    dimensions: vector.len(),
                                    vector,
                                    model: self.model_name.clone(),
                                })
                                .collect()
                        })
                        .map_err(|e| Error::embedding(format!("FastEmbed embedding failed: {e}")));
                    let _ = tx.send(result);
                }
            }
        }
        tracing::debug!(model = %self.model_name, "FastEmbed actor stopped");
    }
}

/// Parse a model identifier to the FastEmbed model and its dimensionality
///
/// Accepts the Hugging Face style names used by sentence-transformers, with
/// or without the organisation prefix, case-insensitively.
pub fn parse_embedding_model(model_name: &str) -> Result<(EmbeddingModel, usize)> {
    let normalized = model_name.to_lowercase();
    let name = normalized.rsplit('/').next().unwrap_or(normalized.as_str());

    let parsed = match name {
        "all-minilm-l6-v2" | "allminilml6v2" => {
            (EmbeddingModel::AllMiniLML6V2, EMBEDDING_DIMENSION_FASTEMBED_SMALL)
        }
        "all-minilm-l12-v2" | "allminilml12v2" => {
            (EmbeddingModel::AllMiniLML12V2, EMBEDDING_DIMENSION_FASTEMBED_SMALL)
        }
        "paraphrase-multilingual-minilm-l12-v2" | "paraphrase-ml-minilm-l12-v2" => (
            EmbeddingModel::ParaphraseMLMiniLML12V2,
            EMBEDDING_DIMENSION_FASTEMBED_SMALL,
        ),
        "bge-small-en" | "bge-small-en-v1.5" => {
            (EmbeddingModel::BGESmallENV15, EMBEDDING_DIMENSION_FASTEMBED_SMALL)
        }
        "bge-base-en" | "bge-base-en-v1.5" => {
            (EmbeddingModel::BGEBaseENV15, EMBEDDING_DIMENSION_FASTEMBED_BASE)
        }
        "bge-large-en" | "bge-large-en-v1.5" => {
            (EmbeddingModel::BGELargeENV15, EMBEDDING_DIMENSION_FASTEMBED_LARGE)
        }
        "multilingual-e5-small" => (
            EmbeddingModel::MultilingualE5Small,
            EMBEDDING_DIMENSION_FASTEMBED_SMALL,
        ),
        "multilingual-e5-base" => (
            EmbeddingModel::MultilingualE5Base,
            EMBEDDING_DIMENSION_FASTEMBED_BASE,
        ),
        "multilingual-e5-large" => (
            EmbeddingModel::MultilingualE5Large,
            EMBEDDING_DIMENSION_FASTEMBED_LARGE,
        ),
        _ => {
            return Err(Error::model_load(
                model_name,
                "not a supported FastEmbed model",
            ));
        }
    };
    Ok(parsed)
}

/// `$XDG_CACHE_HOME/glossa/fastembed`, or `.fastembed_cache` when unknown
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir().map_or_else(
        || PathBuf::from(".fastembed_cache"),
        |dir| dir.join("glossa").join("fastembed"),
    )
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating FastEmbed provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let model_name = config
        .model
        .as_deref()
        .unwrap_or(glossa_domain::constants::SEMANTIC_DEFAULT_MODEL);
    let provider = FastEmbedProvider::new(model_name, FASTEMBED_MAX_INPUT_TOKENS).map_err(|e| match e {
        Error::ModelLoad { message, .. } => message,
        other => other.to_string(),
    })?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local ONNX provider (all-MiniLM-L6-v2, bge-*, multilingual-e5-*)",
    factory: fastembed_factory,
};
