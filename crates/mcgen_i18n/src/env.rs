/// Source of the host environment's preferred language tag.
pub trait EnvLanguage {
    fn language_tag(&self) -> Option<String>;
}

/// Asks the operating system, then the POSIX locale variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLanguage;

impl EnvLanguage for SystemLanguage {
    fn language_tag(&self) -> Option<String> {
        if let Some(tag) = sys_locale::get_locale() {
            return Some(tag);
        }
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty())
    }
}

/// A fixed tag, for tests and explicit overrides.
#[derive(Clone, Debug, Default)]
pub struct FixedLanguage(pub Option<String>);

impl FixedLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl EnvLanguage for FixedLanguage {
    fn language_tag(&self) -> Option<String> {
        self.0.clone()
    }
}
