use std::collections::BTreeSet;

use thiserror::Error;

use crate::label::ArgValue;

const MAX_EXPANDED_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed placeholder at byte {offset}")]
    Unclosed { offset: usize },

    #[error("invalid placeholder name `{name}`")]
    InvalidName { name: String },
}

fn is_placeholder_name(name: &str) -> bool {
    let mut it = name.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Collect the `{name}` placeholder names used by a template.
///
/// Stricter than [`apply_placeholders`]: a `{` that is never closed, or a
/// token that is not an identifier, is reported so catalogs can be checked
/// before they ship.
pub fn placeholders(tmpl: &str) -> Result<BTreeSet<&str>, TemplateError> {
    let mut names = BTreeSet::new();
    let mut offset = 0;
    let mut rest = tmpl;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(TemplateError::Unclosed {
                offset: offset + open,
            });
        };
        let name = &after[..close];
        if !is_placeholder_name(name) {
            return Err(TemplateError::InvalidName {
                name: name.to_string(),
            });
        }
        names.insert(name);
        let consumed = open + 1 + close + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }
    Ok(names)
}

fn take_prefix_by_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn push_str_limited(out: &mut String, s: &str) -> bool {
    if out.len() >= MAX_EXPANDED_BYTES {
        return true;
    }
    let remaining = MAX_EXPANDED_BYTES - out.len();
    out.push_str(take_prefix_by_bytes(s, remaining));
    out.len() >= MAX_EXPANDED_BYTES
}

fn replace_limited(src: &str, token: &str, value: &str) -> String {
    let mut out = String::with_capacity(std::cmp::min(src.len(), MAX_EXPANDED_BYTES));
    let mut last = 0;
    for (at, _) in src.match_indices(token) {
        if push_str_limited(&mut out, &src[last..at]) || push_str_limited(&mut out, value) {
            return out;
        }
        last = at + token.len();
    }
    push_str_limited(&mut out, &src[last..]);
    out
}

/// Replace `{name}` tokens with the stringified argument values.
///
/// Arguments are applied one after another in the order given, each pass
/// replacing every occurrence of its own token in the text produced so far.
/// A name given twice takes its last value. Tokens without a matching
/// argument and stray braces are copied through verbatim.
pub fn apply_placeholders(tmpl: &str, args: &[(&str, &ArgValue)]) -> String {
    if args.is_empty() || !tmpl.contains('{') {
        return tmpl.to_string();
    }

    let mut out = take_prefix_by_bytes(tmpl, MAX_EXPANDED_BYTES).to_string();
    for (i, &(name, _)) in args.iter().enumerate() {
        if args[..i].iter().any(|&(k, _)| k == name) {
            continue;
        }
        let Some(&(_, value)) = args.iter().rev().find(|&&(k, _)| k == name) else {
            continue;
        };
        let token = format!("{{{name}}}");
        if out.contains(&token) {
            out = replace_limited(&out, &token, &value.to_string());
        }
    }
    out
}
