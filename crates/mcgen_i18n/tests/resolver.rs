use mcgen_i18n::{
    FileStore, FixedLanguage, Key, Locale, Localizer, MemoryStore, DEFAULT_LOCALE, STORAGE_KEY,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn localizer(locale: &str) -> Localizer {
    let store = MemoryStore::new().with_entry(STORAGE_KEY, locale);
    Localizer::with_builtin(Box::new(store), &FixedLanguage::none()).unwrap()
}

#[test]
fn every_default_key_resolves_in_every_locale() {
    for locale in Locale::ALL {
        let loc = localizer(locale.id());
        let cats = loc.catalogs();
        for (key, fallback) in cats.get(DEFAULT_LOCALE).unwrap().iter() {
            // "Upload" translates to "Upload" in English, so compare against
            // the catalogs rather than the key itself.
            let expected = cats.lookup(locale.id(), key).unwrap_or(fallback);
            assert_eq!(loc.resolve(key, &[]), expected, "{key} under {locale}");
        }
    }
}

#[test]
fn every_typed_key_resolves_in_every_locale() {
    for locale in Locale::ALL {
        let loc = localizer(locale.id());
        for &key in Key::ALL {
            assert!(
                loc.lookup(key.path()).is_some(),
                "{key:?} has no template under {locale}"
            );
        }
    }
}

#[test]
fn english_examples() {
    let en = localizer("en_US");
    assert_eq!(
        en.resolve("perspective", &[("angle", 90.into())]),
        "Perspective (90°)"
    );
    assert_eq!(
        en.resolve("selectColor", &[("side", "Front".into())]),
        "Select Color: Front Side"
    );
}

#[test]
fn unknown_path_comes_back_unchanged() {
    for locale in ["en_US", "zh_CN", "ja_JP", "xx_XX"] {
        assert_eq!(localizer(locale).resolve("no.such.key", &[]), "no.such.key");
    }
}

#[test]
fn unsupported_locale_uses_default_translation() {
    let mut loc = localizer("en_US");
    loc.set_active_locale("fr_FR").unwrap();
    assert_eq!(loc.active_locale(), "fr_FR");
    assert_eq!(loc.resolve("screenshot", &[]), "截图");
    assert_eq!(
        loc.resolve("perspective", &[("angle", 45.into())]),
        "透视角度 (45°)"
    );
}

#[test]
fn locale_choice_survives_restart() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().to_path_buf();

    let store = FileStore::open(Some(config_dir.clone())).unwrap();
    let mut loc = Localizer::with_builtin(Box::new(store), &FixedLanguage::new("en-US")).unwrap();
    assert_eq!(loc.active_locale(), "en_US");
    loc.set_active_locale("ja_JP").unwrap();
    drop(loc);

    let store = FileStore::open(Some(config_dir)).unwrap();
    let loc = Localizer::with_builtin(Box::new(store), &FixedLanguage::new("en-US")).unwrap();
    assert_eq!(loc.active_locale(), "ja_JP");
    assert_eq!(loc.resolve("screenshot", &[]), "スクリーンショット");
}

#[test]
fn initial_locale_is_written_back() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(Some(dir.path().to_path_buf())).unwrap();
    let path = store.path().to_path_buf();

    let _loc = Localizer::with_builtin(Box::new(store), &FixedLanguage::new("zh-CN")).unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("language = \"zh_CN\""), "{content}");
}

#[test]
fn resolution_is_idempotent() {
    let loc = localizer("ja_JP");
    let args = [("side", "前".into())];
    let first = loc.resolve("selectColorEnd", &args);
    let second = loc.resolve("selectColorEnd", &args);
    assert_eq!(first, second);
    assert_eq!(first, "前面の終了色を選択");
}
