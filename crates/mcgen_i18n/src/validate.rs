use std::collections::BTreeSet;

use thiserror::Error;

use crate::catalog::Catalogs;
use crate::keys::Key;
use crate::template::placeholders;

/// A problem found by [`Catalogs::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("{locale}: missing key `{key}`")]
    MissingKey { locale: String, key: String },

    #[error("{locale}: key `{key}` is not in the default catalog")]
    ExtraKey { locale: String, key: String },

    #[error("{locale}: key `{key}` uses placeholders {found:?}, expected {expected:?}")]
    PlaceholderMismatch {
        locale: String,
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{locale}: key `{key}` has no typed identifier")]
    UnknownKey { locale: String, key: String },

    #[error("{locale}: key `{key}` has a malformed placeholder: {reason}")]
    MalformedPlaceholder {
        locale: String,
        key: String,
        reason: String,
    },
}

impl Catalogs {
    /// Check every catalog against `default_locale` and the typed [`Key`] set.
    ///
    /// Lookups at runtime tolerate all of these; this is meant for tests and
    /// `mcgen check`.
    pub fn validate(&self, default_locale: &str) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let empty = crate::catalog::Catalog::new();
        let default = self.get(default_locale).unwrap_or(&empty);

        for &key in Key::ALL {
            if !default.contains_key(key.path()) {
                issues.push(CatalogIssue::MissingKey {
                    locale: default_locale.to_string(),
                    key: key.path().to_string(),
                });
            }
        }

        for locale in self.locales() {
            let Some(cat) = self.get(locale) else {
                continue;
            };

            if locale != default_locale {
                for (key, _) in default.iter() {
                    if !cat.contains_key(key) {
                        issues.push(CatalogIssue::MissingKey {
                            locale: locale.to_string(),
                            key: key.to_string(),
                        });
                    }
                }
                for (key, _) in cat.iter() {
                    if !default.contains_key(key) {
                        issues.push(CatalogIssue::ExtraKey {
                            locale: locale.to_string(),
                            key: key.to_string(),
                        });
                    }
                }
            }

            for (key, tmpl) in cat.iter() {
                let found = match placeholders(tmpl) {
                    Ok(found) => found,
                    Err(e) => {
                        issues.push(CatalogIssue::MalformedPlaceholder {
                            locale: locale.to_string(),
                            key: key.to_string(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                };

                let Some(typed) = Key::from_path(key) else {
                    issues.push(CatalogIssue::UnknownKey {
                        locale: locale.to_string(),
                        key: key.to_string(),
                    });
                    continue;
                };

                let expected: BTreeSet<&str> = typed.placeholders().iter().copied().collect();
                if expected != found {
                    issues.push(CatalogIssue::PlaceholderMismatch {
                        locale: locale.to_string(),
                        key: key.to_string(),
                        expected: expected.into_iter().map(String::from).collect(),
                        found: found.into_iter().map(String::from).collect(),
                    });
                }
            }
        }

        issues
    }
}
