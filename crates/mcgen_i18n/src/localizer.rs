use tracing::{debug, warn};

use crate::catalog::Catalogs;
use crate::env::EnvLanguage;
use crate::keys::Key;
use crate::label::{ArgValue, Message};
use crate::locale::{locale_fallback_chain, Locale, BASELINE_LOCALE};
use crate::store::{LocaleStore, STORAGE_KEY};
use crate::template::apply_placeholders;
use crate::I18nError;

/// Translation context: catalogs, the active locale, and the store that
/// persists it.
///
/// Build one at startup with [`Localizer::init`] and pass it by reference to
/// anything that renders text.
pub struct Localizer {
    catalogs: Catalogs,
    locale: String,
    store: Box<dyn LocaleStore>,
}

impl Localizer {
    /// Pick the starting locale and persist it.
    ///
    /// Order: stored `language` value -> host language tag -> `en_US`.
    /// Storage failures are logged and never prevent startup.
    pub fn init(catalogs: Catalogs, store: Box<dyn LocaleStore>, env: &dyn EnvLanguage) -> Self {
        let stored = match store.get(STORAGE_KEY) {
            Ok(v) => v.filter(|s| !s.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read stored locale");
                None
            }
        };

        let locale = match stored {
            Some(l) => l,
            None => {
                let tag = env.language_tag();
                let detected = tag.as_deref().map(Locale::from_language_tag);
                debug!(tag = ?tag, detected = ?detected, "No stored locale, using host language");
                detected.map_or(BASELINE_LOCALE, Locale::id).to_string()
            }
        };

        let mut this = Self {
            catalogs,
            locale,
            store,
        };
        this.persist();
        this
    }

    /// [`Localizer::init`] with the built-in catalogs.
    pub fn with_builtin(
        store: Box<dyn LocaleStore>,
        env: &dyn EnvLanguage,
    ) -> Result<Self, I18nError> {
        Ok(Self::init(Catalogs::builtin()?, store, env))
    }

    pub fn active_locale(&self) -> &str {
        &self.locale
    }

    /// Switch the active locale. Any string is accepted; an unknown locale
    /// resolves every key through the default locale.
    ///
    /// The in-memory switch always happens; the error only reports that the
    /// choice could not be persisted.
    pub fn set_active_locale(&mut self, locale: impl Into<String>) -> Result<(), I18nError> {
        let locale = locale.into();
        if self.locale != locale {
            debug!("Localizer::set_active_locale: {} -> {}", self.locale, locale);
            self.locale = locale;
        }
        if let Err(e) = self.store.set(STORAGE_KEY, &self.locale) {
            warn!(locale = %self.locale, error = %e, "Failed to persist locale");
            return Err(e.into());
        }
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(STORAGE_KEY, &self.locale) {
            warn!(locale = %self.locale, error = %e, "Failed to persist locale");
        }
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// The raw template for `path`, following the fallback chain.
    ///
    /// An empty template counts as missing and falls through to the next
    /// locale.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        locale_fallback_chain(&self.locale)
            .into_iter()
            .find_map(|l| self.catalogs.lookup(l, path).filter(|s| !s.is_empty()))
    }

    /// Translate `path`, substituting `{name}` tokens from `args`.
    ///
    /// Falls back to the default locale, then to `path` itself, which is
    /// returned without interpolation.
    pub fn resolve(&self, path: &str, args: &[(&str, ArgValue)]) -> String {
        let Some(tmpl) = self.lookup(path) else {
            debug!(locale = %self.locale, path, "Missing translation");
            return path.to_string();
        };
        let args: Vec<(&str, &ArgValue)> = args.iter().map(|(k, v)| (*k, v)).collect();
        apply_placeholders(tmpl, &args)
    }

    pub fn resolve_key(&self, key: Key, args: &[(&str, ArgValue)]) -> String {
        self.resolve(key.path(), args)
    }

    /// Translate a [`Message`].
    pub fn tr(&self, msg: &Message) -> String {
        let args: Vec<(&str, ArgValue)> = msg
            .args
            .iter()
            .map(|(k, v)| (k.as_ref(), v.clone()))
            .collect();
        self.resolve(&msg.id, &args)
    }

    /// Supported locales with their names as shown in the language selector.
    pub fn known_locales(&self) -> Vec<(Locale, String)> {
        Locale::ALL
            .into_iter()
            .map(|l| (l, self.resolve(l.id(), &[])))
            .collect()
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("locale", &self.locale)
            .field("locales", &self.catalogs.locales())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::env::FixedLanguage;
    use crate::store::{MemoryStore, StoreError};
    use crate::t;
    use pretty_assertions::assert_eq;

    fn localizer(locale: &str) -> Localizer {
        let store = MemoryStore::new().with_entry(STORAGE_KEY, locale);
        Localizer::with_builtin(Box::new(store), &FixedLanguage::none()).unwrap()
    }

    struct FailingStore;

    impl LocaleStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::NoConfigDir)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::NoConfigDir)
        }
    }

    #[test]
    fn resolves_in_active_locale() {
        assert_eq!(localizer("en_US").resolve("screenshot", &[]), "Screenshot");
        assert_eq!(localizer("ja_JP").resolve("screenshot", &[]), "スクリーンショット");
        assert_eq!(localizer("zh_CN").resolve("screenshot", &[]), "截图");
    }

    #[test]
    fn interpolates_parameters() {
        let en = localizer("en_US");
        assert_eq!(
            en.resolve("perspective", &[("angle", 90.into())]),
            "Perspective (90°)"
        );
        assert_eq!(
            en.resolve("selectColor", &[("side", "Front".into())]),
            "Select Color: Front Side"
        );
        assert_eq!(
            en.resolve("perspective", &[("angle", 33.3f32.into())]),
            "Perspective (33.3°)"
        );
    }

    #[test]
    fn missing_in_active_falls_back_to_default_locale() {
        let mut cats = Catalogs::builtin().unwrap();
        let mut en = Catalog::new();
        for (k, v) in cats.get("en_US").unwrap().iter() {
            if k != "texture" {
                en.insert(k, v);
            }
        }
        cats.insert("en_US", en);

        let store = MemoryStore::new().with_entry(STORAGE_KEY, "en_US");
        let loc = Localizer::init(cats, Box::new(store), &FixedLanguage::none());
        assert_eq!(loc.resolve("texture", &[]), "纹理");
        assert_eq!(loc.resolve("content", &[]), "Content");
    }

    #[test]
    fn empty_template_falls_through() {
        let mut cats = Catalogs::builtin().unwrap();
        let mut en = Catalog::from_yaml("font: \"\"\nscreenshot: \"Screenshot\"\n").unwrap();
        en.insert("blank", "");
        cats.insert("en_US", en);
        let mut zh = cats.get("zh_CN").unwrap().clone();
        zh.insert("blank", "");
        cats.insert("zh_CN", zh);

        let store = MemoryStore::new().with_entry(STORAGE_KEY, "en_US");
        let loc = Localizer::init(cats, Box::new(store), &FixedLanguage::none());
        assert_eq!(loc.resolve("font", &[]), "字体");
        assert_eq!(loc.resolve("screenshot", &[]), "Screenshot");
        assert_eq!(loc.lookup("blank"), None);
        assert_eq!(loc.resolve("blank", &[]), "blank");
    }

    #[test]
    fn unknown_path_is_returned_verbatim() {
        let en = localizer("en_US");
        assert_eq!(en.resolve("menu.file.open", &[]), "menu.file.open");
        assert_eq!(
            en.resolve("missing.{angle}", &[("angle", 90.into())]),
            "missing.{angle}"
        );
    }

    #[test]
    fn typed_keys_and_messages_match_paths() {
        let ja = localizer("ja_JP");
        assert_eq!(
            ja.resolve_key(Key::SelectColorStart, &[("side", "上".into())]),
            "上面の開始色を選択"
        );
        assert_eq!(ja.tr(&t!("perspective", { angle: 60 })), "視野角 (60°)");
        assert_eq!(ja.tr(&t!("resetCamera")), "カメラリセット");
    }

    #[test]
    fn known_locales_use_selector_names() {
        let names: Vec<String> = localizer("en_US")
            .known_locales()
            .into_iter()
            .map(|(_, n)| n)
            .collect();
        assert_eq!(names, vec!["中文", "EN", "日本語"]);
    }

    #[test]
    fn host_language_picks_initial_locale() {
        let loc = Localizer::with_builtin(
            Box::new(MemoryStore::new()),
            &FixedLanguage::new("ja-JP"),
        )
        .unwrap();
        assert_eq!(loc.active_locale(), "ja_JP");

        let loc = Localizer::with_builtin(
            Box::new(MemoryStore::new()),
            &FixedLanguage::new("de-DE"),
        )
        .unwrap();
        assert_eq!(loc.active_locale(), "en_US");

        let loc =
            Localizer::with_builtin(Box::new(MemoryStore::new()), &FixedLanguage::none()).unwrap();
        assert_eq!(loc.active_locale(), BASELINE_LOCALE);
    }

    #[test]
    fn stored_locale_beats_host_language() {
        let store = MemoryStore::new().with_entry(STORAGE_KEY, "zh_CN");
        let loc = Localizer::with_builtin(Box::new(store), &FixedLanguage::new("ja")).unwrap();
        assert_eq!(loc.active_locale(), "zh_CN");
    }

    #[test]
    fn empty_stored_locale_is_ignored() {
        let store = MemoryStore::new().with_entry(STORAGE_KEY, "");
        let loc = Localizer::with_builtin(Box::new(store), &FixedLanguage::new("zh-CN")).unwrap();
        assert_eq!(loc.active_locale(), "zh_CN");
    }

    #[test]
    fn store_failures_do_not_block_switching() {
        let mut loc =
            Localizer::with_builtin(Box::new(FailingStore), &FixedLanguage::new("en")).unwrap();
        assert_eq!(loc.active_locale(), "en_US");

        let err = loc.set_active_locale("ja_JP").unwrap_err();
        assert!(matches!(err, I18nError::Store(StoreError::NoConfigDir)));
        assert_eq!(loc.active_locale(), "ja_JP");
        assert_eq!(loc.resolve("font", &[]), "フォント");
    }
}
