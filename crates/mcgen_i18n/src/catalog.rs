use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::locale::Locale;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

const BUILTIN_ZH_CN: &str = include_str!("../locales/zh_CN.yaml");
const BUILTIN_EN_US: &str = include_str!("../locales/en_US.yaml");
const BUILTIN_JA_JP: &str = include_str!("../locales/ja_JP.yaml");

#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("invalid key segment `{segment}` in `{path}` (allowed: [A-Za-z0-9][A-Za-z0-9_-]*)")]
    InvalidKey { path: String, segment: String },

    #[error("value for key `{0}` must be a string or a mapping")]
    NotAString(String),

    #[error("{0}")]
    Limit(String),
}

fn is_valid_segment(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// A single locale's translations, flattened from a nested YAML mapping to
/// dotted key paths.
///
/// ```yaml
/// toolbar:
///   screenshot: "Screenshot"
/// perspective: "Perspective ({angle}°)"
/// ```
///
/// yields the keys `toolbar.screenshot` and `perspective`. Only leaves are
/// stored, so looking up an interior node (`toolbar`) or walking through a
/// leaf (`perspective.x`) is simply a miss.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let sorted: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        sorted.into_iter()
    }

    /// Parse a (possibly nested) YAML mapping of string leaves.
    pub fn from_yaml(src: &str) -> Result<Self, CatalogParseError> {
        let value: serde_yaml::Value = serde_yaml::from_str(src)
            .map_err(|e| CatalogParseError::Yaml(format!("yaml parse error: {e}")))?;

        let mut cat = Self::new();
        match value {
            serde_yaml::Value::Mapping(map) => cat.flatten_into("", map)?,
            // An empty document is an empty catalog.
            serde_yaml::Value::Null => {}
            _ => {
                return Err(CatalogParseError::Yaml(
                    "catalog root must be a mapping".to_string(),
                ))
            }
        }
        Ok(cat)
    }

    fn flatten_into(
        &mut self,
        prefix: &str,
        map: serde_yaml::Mapping,
    ) -> Result<(), CatalogParseError> {
        for (k, v) in map {
            let Some(segment) = k.as_str() else {
                return Err(CatalogParseError::Yaml(format!(
                    "keys under `{prefix}` must be strings"
                )));
            };
            let path = join_path(prefix, segment);
            if !is_valid_segment(segment) {
                return Err(CatalogParseError::InvalidKey {
                    path,
                    segment: segment.to_string(),
                });
            }
            if path.len() > MAX_KEY_BYTES {
                return Err(CatalogParseError::Limit(format!(
                    "key `{path}` is too long (max {MAX_KEY_BYTES} bytes)"
                )));
            }

            match v {
                serde_yaml::Value::String(s) => {
                    if s.len() > MAX_VALUE_BYTES {
                        return Err(CatalogParseError::Limit(format!(
                            "value for key `{path}` is too long (max {MAX_VALUE_BYTES} bytes)"
                        )));
                    }
                    if self.entries.len() >= MAX_CATALOG_ENTRIES {
                        return Err(CatalogParseError::Limit(format!(
                            "too many entries (max {MAX_CATALOG_ENTRIES})"
                        )));
                    }
                    self.insert(path, s);
                }
                serde_yaml::Value::Mapping(inner) => self.flatten_into(&path, inner)?,
                _ => return Err(CatalogParseError::NotAString(path)),
            }
        }
        Ok(())
    }
}

/// Catalogs keyed by locale identifier (`zh_CN`, `en_US`, ...).
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    by_locale: HashMap<String, Catalog>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalogs compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogParseError> {
        let mut cats = Self::new();
        for (locale, src) in [
            (Locale::ZhCn, BUILTIN_ZH_CN),
            (Locale::EnUs, BUILTIN_EN_US),
            (Locale::JaJp, BUILTIN_JA_JP),
        ] {
            cats.insert(locale.id(), Catalog::from_yaml(src)?);
        }
        Ok(cats)
    }

    pub fn insert(&mut self, locale: impl Into<String>, catalog: Catalog) {
        self.by_locale.insert(locale.into(), catalog);
    }

    pub fn get(&self, locale: &str) -> Option<&Catalog> {
        self.by_locale.get(locale)
    }

    /// Template for `key` in `locale`, without interpolation.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.get(locale)?.get(key)
    }

    /// Locale identifiers, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.by_locale.keys().map(|s| s.as_str()).collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_yaml_flattens_to_dotted_keys() {
        let src = r#"
toolbar:
  screenshot: "Screenshot"
  camera:
    reset: "Reset Camera"
perspective: "Perspective ({angle}°)"
"#;
        let cat = Catalog::from_yaml(src).unwrap();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.get("toolbar.screenshot"), Some("Screenshot"));
        assert_eq!(cat.get("toolbar.camera.reset"), Some("Reset Camera"));
        assert_eq!(cat.get("perspective"), Some("Perspective ({angle}°)"));
    }

    #[test]
    fn interior_nodes_and_paths_through_leaves_miss() {
        let src = r#"
toolbar:
  screenshot: "Screenshot"
font: "Font"
"#;
        let cat = Catalog::from_yaml(src).unwrap();
        assert_eq!(cat.get("toolbar"), None);
        assert_eq!(cat.get("font.size"), None);
        assert_eq!(cat.get("toolbar.missing"), None);
    }

    #[test]
    fn yaml_requires_string_leaves() {
        let err = Catalog::from_yaml("size: 123\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::NotAString(ref k) if k == "size"));

        let err = Catalog::from_yaml("sides: [front, back]\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::NotAString(_)));
    }

    #[test]
    fn key_validation() {
        let err = Catalog::from_yaml("bad key: \"nope\"\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::InvalidKey { .. }));

        let err = Catalog::from_yaml("\"a.b\": \"dots belong to nesting\"\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::InvalidKey { .. }));
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(Catalog::from_yaml("- a\n- b\n").is_err());
        assert!(Catalog::from_yaml("").unwrap().is_empty());
    }

    #[test]
    fn builtin_catalogs_load() {
        let cats = Catalogs::builtin().unwrap();
        assert_eq!(cats.locales(), vec!["en_US", "ja_JP", "zh_CN"]);
        assert_eq!(cats.lookup("en_US", "screenshot"), Some("Screenshot"));
        assert_eq!(cats.lookup("zh_CN", "Upload"), Some("上传"));
        assert_eq!(cats.lookup("ja_JP", "fontLoading"), Some("フォントを読み込み中..."));
    }
}
