//! Translation Provider Implementations
//!
//! | Provider | Type |
//! |----------|------|
//! | [`OpenAITranslationProvider`] | OpenAI-compatible chat completions |
//! | [`NullTranslationProvider`] | Echo, for testing |

pub mod null;
pub mod openai;
pub mod prompt;

pub use null::NullTranslationProvider;
pub use openai::OpenAITranslationProvider;
pub use prompt::build_prompt;
