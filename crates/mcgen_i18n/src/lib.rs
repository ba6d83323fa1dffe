//! mcgen localization (i18n)
//!
//! - Built-in YAML catalogs for `zh_CN`, `en_US` and `ja_JP`, flattened to dotted keys
//! - A [`Localizer`] context object owning the active locale and its persisted copy
//! - Fallback chain: active locale -> default locale (`zh_CN`) -> the raw key path
//! - `{name}` placeholder interpolation, validated against [`Key::placeholders`]
//!   by [`Catalogs::validate`]

mod catalog;
mod env;
mod error;
mod keys;
mod label;
mod locale;
mod localizer;
mod store;
mod template;
mod validate;

pub use catalog::{Catalog, CatalogParseError, Catalogs};
pub use env::{EnvLanguage, FixedLanguage, SystemLanguage};
pub use error::I18nError;
pub use keys::Key;
pub use label::{ArgValue, Message};
pub use locale::{locale_fallback_chain, normalize_locale, Locale, BASELINE_LOCALE, DEFAULT_LOCALE};
pub use localizer::Localizer;
pub use store::{
    config_dir, config_dir_with_override, FileStore, LocaleStore, MemoryStore, StoreError,
    ENV_CONFIG_DIR, STORAGE_KEY,
};
pub use template::{apply_placeholders, placeholders, TemplateError};
pub use validate::CatalogIssue;

/// Convenience macro for building a translation key + args as a [`Message`].
///
/// Examples:
/// - `t!("screenshot")`
/// - `t!("perspective", { angle: 90 })`
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::Message::new($id)
    };
    ($id:literal, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($id);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        m
    }};
}
