use std::collections::HashMap;

use time::{Date, macros::format_description};

/// HTML-escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML-escape attribute values (same rules as text for this codebase).
pub fn escape_attr(s: &str) -> String {
    escape_text(s)
}

/// Compute a GitHub-style slug suitable for heading ids.
///
/// Letters and digits are lowercased, whitespace and `-` become `-`, `_` is
/// kept and everything else is dropped. Runs are not collapsed, matching what
/// readers expect from anchors copied off other markdown hosts.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.trim().chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            out.push('-');
        } else if ch == '_' {
            out.push('_');
        }
    }

    out
}

/// Hands out unique slugs within one document.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug `input`, appending `-1`, `-2`… on repeats. Empty slugs fall back
    /// to `section`.
    pub fn slug(&mut self, input: &str) -> String {
        let base = match slugify(input) {
            s if s.is_empty() => "section".to_string(),
            s => s,
        };

        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }

    /// Register an id that is already taken (e.g. an explicit `{#id}`).
    pub fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_string()).or_insert(0);
    }
}

/// Render a date the way post listings show it, e.g. `January 5, 2025`.
pub fn format_date(date: Date) -> String {
    let fmt = format_description!("[month repr:long] [day padding:none], [year]");
    date.format(&fmt).unwrap_or_default()
}

/// Indentation class for a table-of-contents entry at heading `depth`.
pub fn heading_margin(depth: u8) -> &'static str {
    match depth {
        3 => "ml-4",
        4 => "ml-8",
        5 => "ml-12",
        6 => "ml-16",
        _ => "",
    }
}
