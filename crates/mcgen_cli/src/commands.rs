//! Command implementations. Each returns its stdout text so it can be tested
//! against an in-memory [`Localizer`].

use std::fmt::Write as _;

use anyhow::Result;
use mcgen_i18n::{ArgValue, CatalogIssue, Key, Localizer, DEFAULT_LOCALE};
use mcgen_scene::SceneConfig;
use serde::Serialize;

#[derive(Serialize)]
struct LocaleEntry<'a> {
    id: &'a str,
    name: String,
    active: bool,
}

pub fn locale(loc: &Localizer) -> String {
    format!("{}\n", loc.active_locale())
}

pub fn set_locale(loc: &mut Localizer, id: &str) -> Result<String> {
    loc.set_active_locale(id)?;
    Ok(format!("{}\n", loc.active_locale()))
}

pub fn locales(loc: &Localizer, json: bool) -> Result<String> {
    let entries: Vec<LocaleEntry> = loc
        .known_locales()
        .into_iter()
        .map(|(l, name)| LocaleEntry {
            id: l.id(),
            name,
            active: l.id() == loc.active_locale(),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&entries)? + "\n");
    }

    let mut out = String::new();
    for e in &entries {
        let marker = if e.active { '*' } else { ' ' };
        writeln!(out, "{marker} {:<6} {}", e.id, e.name)?;
    }
    Ok(out)
}

pub fn tr(loc: &Localizer, path: &str, params: &[(String, String)]) -> String {
    let args: Vec<(&str, ArgValue)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), ArgValue::from(v.as_str())))
        .collect();
    format!("{}\n", loc.resolve(path, &args))
}

/// Parse a `name=value` parameter.
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected `name=value`, got `{s}`")),
    }
}

pub fn check(loc: &Localizer) -> Vec<CatalogIssue> {
    loc.catalogs().validate(DEFAULT_LOCALE)
}

pub fn scene(loc: &Localizer, config: &SceneConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(config)? + "\n");
    }

    let t = |k: Key| loc.resolve_key(k, &[]);
    let text = &config.text;
    let mut out = String::new();

    writeln!(out, "{}", t(Key::CameraSettings))?;
    writeln!(
        out,
        "  {}",
        loc.resolve_key(Key::Perspective, &[("angle", config.camera.fov.into())])
    )?;

    writeln!(out, "{}", t(Key::Font))?;
    writeln!(out, "  {}: {}", t(Key::FontSize), text.size)?;
    writeln!(out, "  {}: {}", t(Key::Thickness), text.depth)?;
    writeln!(out, "  {}: {}", t(Key::Spacing), text.letter_spacing)?;
    writeln!(out, "  {}: {}", t(Key::UpDownPosition), text.y)?;

    writeln!(out, "{}", t(Key::Color))?;
    writeln!(
        out,
        "  {} ({}): {} -> {}",
        t(Key::Gradient),
        t(Key::Front),
        text.color_gradual_start,
        text.color_gradual_end
    )?;
    writeln!(
        out,
        "  {}/{}: {}",
        t(Key::Left),
        t(Key::Right),
        text.color_side
    )?;
    writeln!(
        out,
        "  {} ({}): {} -> {}",
        t(Key::Gradient),
        t(Key::Down),
        text.color_bottom_start,
        text.color_bottom_end
    )?;
    writeln!(out, "  {}: {}", t(Key::Outline), text.outline_color)?;
    writeln!(out, "  {}: {}", t(Key::OutlineSize), text.outline_width)?;

    Ok(out)
}
