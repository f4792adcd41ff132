//! Bundle manifest (`META-INF/MANIFEST.MF`) parsing.
//!
//! Only the main-attributes section matters: headers up to the first
//! blank line, with long values folded onto continuation lines that
//! start with a single space. `Require-Bundle` holds a comma-separated
//! list of bundle names, each optionally followed by semicolon-delimited
//! qualifiers (`;bundle-version="..."` and friends) that are dropped.

const REQUIRE_BUNDLE: &str = "Require-Bundle";

/// Extract the `Require-Bundle` dependency names from manifest content.
///
/// An absent or empty header yields no dependencies. Parsing is
/// tolerant: anything that does not look like a header line is skipped.
pub(crate) fn require_bundle(content: &str) -> Vec<String> {
    let Some(value) = main_attribute(content, REQUIRE_BUNDLE) else {
        return Vec::new();
    };

    value
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find a header value in the main-attributes section, unfolding
/// continuation lines.
fn main_attribute(content: &str, name: &str) -> Option<String> {
    let mut headers: Vec<String> = Vec::new();

    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            // End of the main-attributes section.
            break;
        }
        if let Some(rest) = line.strip_prefix(' ') {
            if let Some(last) = headers.last_mut() {
                last.push_str(rest);
            }
        } else {
            headers.push(line.to_string());
        }
    }

    headers.iter().find_map(|header| {
        let (key, value) = header.split_once(':')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}
