use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

/// Locale consulted when the active locale has no entry for a key.
pub const DEFAULT_LOCALE: &str = "zh_CN";

/// Locale picked when the host language matches none of the supported ones.
pub const BASELINE_LOCALE: &str = "en_US";

/// The locales shipped with built-in catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    ZhCn,
    EnUs,
    JaJp,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::ZhCn, Locale::EnUs, Locale::JaJp];

    /// Catalog identifier, e.g. `ja_JP`.
    pub fn id(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh_CN",
            Locale::EnUs => "en_US",
            Locale::JaJp => "ja_JP",
        }
    }

    /// Map a host language tag (`zh-CN`, `ja`, `en-US`, `ja_JP.UTF-8`, ...) to a
    /// supported locale by its primary language subtag.
    ///
    /// Anything that is neither Chinese nor Japanese maps to `en_US`.
    pub fn from_language_tag(tag: &str) -> Locale {
        let tag = tag.trim();
        let primary = match normalize_locale(tag).parse::<LanguageIdentifier>() {
            Ok(id) => id.language.as_str().to_ascii_lowercase(),
            // POSIX forms like `ja_JP.UTF-8` don't parse as BCP 47; prefix match instead.
            Err(_) => tag.to_ascii_lowercase(),
        };

        if primary.starts_with("zh") {
            Locale::ZhCn
        } else if primary.starts_with("ja") {
            Locale::JaJp
        } else {
            Locale::EnUs
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Exact catalog identifier match. Use [`Locale::from_language_tag`] for host tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.id() == s)
            .ok_or_else(|| format!("unsupported locale `{s}`"))
    }
}

/// Normalize locale identifiers to BCP 47 separators.
///
/// - Converts `_` to `-` (catalog ids and POSIX locales use `en_US`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Create the fallback chain for translation lookup.
///
/// Example:
/// - `ja_JP` -> `["ja_JP", "zh_CN"]`
/// - `zh_CN` -> `["zh_CN"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<&str> {
    if locale == DEFAULT_LOCALE {
        vec![DEFAULT_LOCALE]
    } else {
        vec![locale, DEFAULT_LOCALE]
    }
}
