//! mcgen command line
//!
//! Owns the application's single [`Localizer`] and exposes its operations.

mod commands;
mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mcgen_i18n::{EnvLanguage, FileStore, FixedLanguage, Localizer, SystemLanguage};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mcgen",
    version,
    about = "Blockcraft 3D text generator - localization and scene options"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding storage.toml and scene.toml.
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Host language tag to assume instead of asking the OS (e.g. `ja-JP`).
    #[arg(long, global = true)]
    lang_tag: Option<String>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active locale, or change it.
    Locale {
        #[command(subcommand)]
        action: Option<LocaleAction>,
    },
    /// List supported locales.
    Locales {
        #[arg(long)]
        json: bool,
    },
    /// Translate a dotted key path.
    Tr {
        path: String,
        /// Placeholder value, `name=value`. Repeatable.
        #[arg(short, long = "param", value_parser = commands::parse_param)]
        params: Vec<(String, String)>,
    },
    /// Validate the built-in catalogs.
    Check,
    /// Show the text and camera options with localized labels.
    Scene {
        /// Scene file (defaults to scene.toml in the config directory).
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum LocaleAction {
    /// Set and persist the active locale.
    Set { locale: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = config::resolve_config_dir(cli.config_dir)?;
    let store = FileStore::open(Some(config_dir.clone()))?;
    let env: Box<dyn EnvLanguage> = match cli.lang_tag {
        Some(tag) => Box::new(FixedLanguage::new(tag)),
        None => Box::new(SystemLanguage),
    };
    let mut loc = Localizer::with_builtin(Box::new(store), env.as_ref())
        .context("Failed to load built-in catalogs")?;
    tracing::debug!(
        config_dir = %config_dir.display(),
        locale = loc.active_locale(),
        "Localizer ready"
    );

    let out = match cli.command {
        Commands::Locale { action: None } => commands::locale(&loc),
        Commands::Locale {
            action: Some(LocaleAction::Set { locale }),
        } => commands::set_locale(&mut loc, &locale)
            .with_context(|| format!("Failed to persist locale `{locale}`"))?,
        Commands::Locales { json } => commands::locales(&loc, json)?,
        Commands::Tr { path, params } => commands::tr(&loc, &path, &params),
        Commands::Check => {
            let issues = commands::check(&loc);
            if !issues.is_empty() {
                for issue in &issues {
                    eprintln!("{issue}");
                }
                anyhow::bail!("{} catalog issue(s) found", issues.len());
            }
            "ok\n".to_string()
        }
        Commands::Scene {
            config: scene_path,
            json,
        } => {
            let scene = config::load_scene(scene_path.as_deref(), &config_dir)?;
            commands::scene(&loc, &scene, json)?
        }
    };

    std::io::stdout().write_all(out.as_bytes())?;
    Ok(())
}
