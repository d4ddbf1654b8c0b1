//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Glossa
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// No term vocabulary could be built for a vector-space comparison
    #[error("Empty vocabulary: {message}")]
    EmptyVocabulary {
        /// Which side of the pair produced no terms
        message: String,
    },

    /// Embedding model could not be resolved or loaded
    #[error("Failed to load embedding model '{model}': {message}")]
    ModelLoad {
        /// Model identifier that was requested
        model: String,
        /// Description of the load failure
        message: String,
    },

    /// Input exceeds the configured semantic token budget
    #[error("Input too large: {tokens} tokens exceeds the limit of {limit}")]
    InputTooLarge {
        /// Number of tokens counted in the offending text
        tokens: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Embedding provider operation error
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding provider error
        message: String,
    },

    /// Translation provider operation error
    #[error("Translation provider error: {message}")]
    Translation {
        /// Description of the translation error
        message: String,
    },

    /// Operation exceeded a caller-supplied deadline
    #[error("Timed out after {timeout_ms} ms: {operation}")]
    Timeout {
        /// Operation that was cut off
        operation: String,
        /// Deadline in milliseconds
        timeout_ms: u64,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Scoring error creation methods
impl Error {
    /// Create an empty vocabulary error
    pub fn empty_vocabulary<S: Into<String>>(message: S) -> Self {
        Self::EmptyVocabulary {
            message: message.into(),
        }
    }

    /// Create a model load error
    pub fn model_load<M: Into<String>, S: Into<String>>(model: M, message: S) -> Self {
        Self::ModelLoad {
            model: model.into(),
            message: message.into(),
        }
    }

    /// Create an input too large error
    pub fn input_too_large(tokens: usize, limit: usize) -> Self {
        Self::InputTooLarge { tokens, limit }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

// Translation error creation methods
impl Error {
    /// Create a translation provider error
    pub fn translation<S: Into<String>>(message: S) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
