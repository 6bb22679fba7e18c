//! Credential and target resolution.

use crate::config::{ConfigError, RepositoryId};

/// Fallback environment variable for the token when `GITHUB_TOKEN` is unset.
pub const FALLBACK_TOKEN_ENV: &str = "GH_TOKEN";

/// Authentication token and target repository for a run.
#[derive(Clone)]
pub struct Credentials {
    /// GitHub token sent as a bearer credential.
    pub token: String,

    /// Repository the issues are created in.
    pub repository: RepositoryId,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .finish()
    }
}

impl Credentials {
    /// Resolves credentials from explicit values, falling back to
    /// [`FALLBACK_TOKEN_ENV`] for the token.
    ///
    /// Blank values count as missing. Every missing name is reported at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] if the token or repository is
    /// absent, or [`ConfigError::InvalidRepository`] if the repository is
    /// not `owner/name`.
    pub fn resolve(token: Option<String>, repository: Option<String>) -> Result<Self, ConfigError> {
        let token = non_blank(token).or_else(|| non_blank(std::env::var(FALLBACK_TOKEN_ENV).ok()));
        let repository = non_blank(repository);

        match (token, repository) {
            (Some(token), Some(repository)) => Ok(Self {
                token,
                repository: repository.parse()?,
            }),
            (token, repository) => {
                let mut names = Vec::new();
                if token.is_none() {
                    names.push("GITHUB_TOKEN");
                }
                if repository.is_none() {
                    names.push("GITHUB_REPOSITORY");
                }
                Err(ConfigError::MissingValue {
                    names: names.join(" and/or "),
                })
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_win() {
        temp_env::with_var(FALLBACK_TOKEN_ENV, Some("from-env"), || {
            let creds =
                Credentials::resolve(Some("explicit".into()), Some("acme/backlog".into())).unwrap();
            assert_eq!(creds.token, "explicit");
            assert_eq!(creds.repository.full_name(), "acme/backlog");
        });
    }

    #[test]
    fn falls_back_to_gh_token() {
        temp_env::with_var(FALLBACK_TOKEN_ENV, Some("from-env"), || {
            let creds = Credentials::resolve(None, Some("acme/backlog".into())).unwrap();
            assert_eq!(creds.token, "from-env");
        });
    }

    #[test]
    fn reports_every_missing_value() {
        temp_env::with_var_unset(FALLBACK_TOKEN_ENV, || {
            let err = Credentials::resolve(Some("  ".into()), None).unwrap_err();
            match err {
                ConfigError::MissingValue { names } => {
                    assert_eq!(names, "GITHUB_TOKEN and/or GITHUB_REPOSITORY");
                }
                other => panic!("unexpected error: {other}"),
            }
        });
    }

    #[test]
    fn debug_output_hides_token() {
        let creds = Credentials {
            token: "secret".into(),
            repository: "acme/backlog".parse().unwrap(),
        };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
