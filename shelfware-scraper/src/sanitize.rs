//! Derives safe, extension-correct local filenames from remote asset URLs.

/// File extensions accepted for downloaded media.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".ico", ".webp", ".gif", ".tga", ".mp4", ".webm",
];

/// Characters that are illegal in filenames on at least one supported OS.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Characters trimmed from the ends of a sanitized name.
const TRIM_CHARS: [char; 3] = [' ', '_', '.'];

/// Longest filename we will produce, extension included.
const MAX_FILENAME_LEN: usize = 120;

/// Name used when sanitization leaves nothing usable.
const FALLBACK_NAME: &str = "downloaded_asset";

/// Extract the percent-decoded base name of a URL's path component.
/// Returns `None` when the URL has no usable path segment.
pub fn filename_from_url(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = &without_scheme[without_scheme.find('/')?..];
    let path = path.split(['?', '#']).next().unwrap_or("");
    let decoded = percent_decode(path);
    let base = decoded.trim_end_matches('/').rsplit('/').next()?;
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

/// Make a string safe to use as a filename.
///
/// Percent-decodes, strips query/fragment remnants, replaces illegal
/// characters with `_`, collapses `_` runs, trims leading/trailing junk,
/// prefixes reserved device names, and caps the length while preserving the
/// extension. Idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_filename(name: &str) -> String {
    if name.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    // Decode to a fixpoint so double-encoded input cannot survive one pass
    // and then change under a second.
    let mut decoded = name.to_string();
    loop {
        let next = percent_decode(&decoded);
        if next == decoded {
            break;
        }
        decoded = next;
    }

    let stripped = decoded.split(['?', '#']).next().unwrap_or("");
    let replaced: String = stripped
        .chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let mut collapsed = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        if c == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(c);
    }

    let trimmed = collapsed.trim_matches(TRIM_CHARS);

    let mut result = if is_reserved_name(trimmed) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    };

    if result.chars().count() > MAX_FILENAME_LEN {
        result = truncate_preserving_extension(&result, MAX_FILENAME_LEN);
        // Truncation can leave trailing junk the earlier trim already handled
        result = result.trim_end_matches(TRIM_CHARS).to_string();
    }

    if result.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        result
    }
}

/// Ensure `name` carries an allowed media extension, inferring one from the
/// URL when it is missing or unrecognized. Returns the name unchanged when
/// no valid extension can be established; the caller must then skip the
/// download.
pub fn ensure_extension(name: &str, url: &str, allowed: &[&str]) -> String {
    if has_allowed_extension(name, allowed) {
        return name.to_string();
    }
    match extension_from_url(url, allowed) {
        Some(ext) => {
            let stem = match name.rfind('.') {
                Some(idx) if idx > 0 => &name[..idx],
                _ => name,
            };
            format!("{stem}{ext}")
        }
        None => name.to_string(),
    }
}

/// Whether `name` ends in one of the allowed media extensions.
pub fn has_allowed_extension(name: &str, allowed: &[&str]) -> bool {
    extension_of(name).is_some_and(|ext| allowed.contains(&ext.as_str()))
}

/// The lowercased `.ext` suffix of a filename, if it has one.
fn extension_of(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(name[idx..].to_ascii_lowercase())
}

/// Infer an allowed extension from a URL: first from the path suffix, then
/// from the first `.ext` run that ends at `?`, `#`, or the end of the
/// string. Only that first terminated run is considered; if it is not an
/// allowed extension, no inference is made.
fn extension_from_url(url: &str, allowed: &[&str]) -> Option<String> {
    let cleaned = url.split(['?', '#']).next().unwrap_or("");
    if let Some(ext) = extension_of(cleaned.rsplit('/').next().unwrap_or(cleaned))
        && allowed.contains(&ext.as_str())
    {
        return Some(ext);
    }

    for (idx, _) in url.match_indices('.') {
        let rest = &url[idx + 1..];
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        if end == 0 {
            continue;
        }
        let after = &rest[end..];
        if after.is_empty() || after.starts_with('?') || after.starts_with('#') {
            let ext = format!(".{}", rest[..end].to_ascii_lowercase());
            return allowed.contains(&ext.as_str()).then_some(ext);
        }
    }
    None
}

/// Windows reserved device names that cannot be used as bare filenames.
fn is_reserved_name(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    match upper.as_str() {
        "CON" | "PRN" | "AUX" | "NUL" => true,
        _ => upper
            .strip_prefix("COM")
            .or_else(|| upper.strip_prefix("LPT"))
            .is_some_and(|rest| matches!(rest.as_bytes(), [d] if (b'1'..=b'9').contains(d))),
    }
}

fn truncate_preserving_extension(name: &str, max_len: usize) -> String {
    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => name.split_at(idx),
        _ => (name, ""),
    };
    let ext_len = ext.chars().count();
    if ext_len >= max_len {
        return name.chars().take(max_len).collect();
    }
    let kept: String = stem.chars().take(max_len - ext_len).collect();
    format!("{kept}{ext}")
}

fn percent_decode(input: &str) -> String {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => input.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/sanitize_tests.rs"]
mod tests;
