//! Context for foreign errors
//!
//! Configuration loading touches figment, toml, validator and the file
//! system. Their errors are wrapped here so the rest of the crate only sees
//! [`glossa_domain::Error`], with the failing step in the message and the
//! original error kept as the source.

use std::fmt;

use glossa_domain::error::{Error, Result};

/// Attach a step description to a foreign `Result`
///
/// ```ignore
/// use glossa_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(&path, toml).io_context("Failed to write config file")?;
/// let config: AppConfig = figment.extract().config_context("Failed to extract configuration")?;
/// ```
pub trait ErrorContext<T>: Sized {
    /// Wrap as `Error::Io`
    fn io_context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Wrap as `Error::Configuration`
    fn config_context<C: fmt::Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::io_with_source(describe(&context, &err), err))
    }

    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(describe(&context, &err), err))
    }
}

fn describe(context: &dyn fmt::Display, err: &dyn fmt::Display) -> String {
    format!("{context}: {err}")
}
