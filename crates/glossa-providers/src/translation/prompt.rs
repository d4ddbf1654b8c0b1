//! Translation instruction template
//!
//! The instruction sent to the language model is fixed; only the languages,
//! the register and the text vary.

use glossa_domain::value_objects::{TranslationDirection, TranslationRequest};

/// Render the user message for a translation request
///
/// ```text
/// Please translate the following text [from <source> ]to <target>.
/// Make sure to preserve the semantics and meaning while keeping as many words the same as possible.
/// [Use terminology and phrasing appropriate for a <role>.]
/// Only return the translated text:
///
/// <text>
/// ```
///
/// Back translations say "back to <target>" and never name a source.
pub fn build_prompt(request: &TranslationRequest) -> String {
    let mut lines = Vec::with_capacity(4);

    lines.push(match request.direction {
        TranslationDirection::Forward => match &request.source_language {
            Some(source) if !source.trim().is_empty() => format!(
                "Please translate the following text from {} to {}.",
                source.trim(),
                request.target_language
            ),
            _ => format!(
                "Please translate the following text to {}.",
                request.target_language
            ),
        },
        TranslationDirection::Back => format!(
            "Please translate the following text back to {}.",
            request.target_language
        ),
    });

    lines.push(
        "Make sure to preserve the semantics and meaning while keeping as many words the same as possible."
            .to_string(),
    );

    if request.has_register() {
        lines.push(format!(
            "Use terminology and phrasing appropriate for a {}.",
            request.role
        ));
    }

    lines.push(format!("Only return the translated text:\n\n{}", request.text));
    lines.join("\n")
}
