//! Strips markup from the store's rich-text fields into plain text.

/// Remove HTML markup from a string, converting `<br>` elements to newlines
/// and collapsing runs of blank lines. Never fails: malformed markup is kept
/// as literal text.
pub fn clean_html(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(lt) = rest.find('<') {
        text.push_str(&rest[..lt]);
        let tail = &rest[lt + 1..];
        match tail.find('>') {
            Some(gt) => {
                if is_line_break(&tail[..gt]) {
                    text.push('\n');
                }
                rest = &tail[gt + 1..];
            }
            None => {
                // Unterminated tag: keep the remainder as literal text
                text.push_str(&rest[lt..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);

    collapse_blank_lines(&decode_entities(&text))
        .trim()
        .to_string()
}

/// Whether a tag body (the text between `<` and `>`) is a line break.
fn is_line_break(tag: &str) -> bool {
    tag.trim()
        .trim_end_matches('/')
        .trim_end()
        .eq_ignore_ascii_case("br")
}

/// Decode the HTML entities that show up in store descriptions.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail[1..].find(';').map(|i| &tail[1..1 + i]) {
            Some(entity) if entity.len() <= 8 => match decode_entity(entity) {
                Some(decoded) => {
                    out.push(decoded);
                    rest = &tail[entity.len() + 2..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            },
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = entity.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Collapse runs of whitespace-only lines into a single blank line.
fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_pending = false;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            blank_pending = true;
        } else {
            if blank_pending && !lines.is_empty() {
                lines.push("");
            }
            lines.push(line);
            blank_pending = false;
        }
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
