//! Run configuration.
//!
//! Credentials and the target repository come from the process (flags or
//! environment); everything else comes from an optional TOML settings file.

mod credentials;
mod error;
mod repository;
mod settings;

pub use credentials::{Credentials, FALLBACK_TOKEN_ENV};
pub use error::ConfigError;
pub use repository::RepositoryId;
pub use settings::{LabelColors, SeedSettings};
