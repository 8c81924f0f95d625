//! Reading statistics for rendered post HTML.
//!
//! Chinese text is measured in characters and everything else in
//! whitespace-delimited words, so a mixed-language post gets one comparable
//! "content size" and a reading-time estimate that respects both scripts.

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Characters per minute for CJK text.
pub const CJK_CHARS_PER_MINUTE: f64 = 350.0;
/// Words per minute for space-delimited text.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Counts derived from one piece of HTML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContentStats {
    pub chinese_chars: usize,
    pub english_words: usize,
    /// Always `chinese_chars + english_words`.
    pub total_count: usize,
}

impl ContentStats {
    fn new(chinese_chars: usize, english_words: usize) -> Self {
        Self {
            chinese_chars,
            english_words,
            total_count: chinese_chars + english_words,
        }
    }

    /// Estimated reading time in whole minutes, never below one.
    pub fn minutes(&self) -> u64 {
        let chinese = self.chinese_chars as f64 / CJK_CHARS_PER_MINUTE;
        let english = self.english_words as f64 / WORDS_PER_MINUTE;
        ((chinese + english).ceil() as u64).max(1)
    }

    /// `"N min read"` label for [`Self::minutes`].
    pub fn reading_time(&self) -> String {
        format!("{} min read", self.minutes())
    }
}

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
fn tag_pattern() -> &'static Regex {
    // Deliberately naive: `a < b > c` loses `< b >` too.
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("static tag pattern is valid"))
}

/// Strip anything that looks like a tag. Entities are left untouched.
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    tag_pattern().replace_all(html, "")
}

/// Whether `ch` falls in one of the counted CJK ideograph blocks.
pub fn is_cjk(ch: char) -> bool {
    matches!(
        ch as u32,
        0x4E00..=0x9FFF // Unified Ideographs
            | 0x3400..=0x4DBF // Extension A
            | 0x20000..=0x2A6DF // Extension B
            | 0x2A700..=0x2B73F // Extension C
            | 0x2B740..=0x2B81F // Extension D
            | 0x2B820..=0x2CEAF // Extensions E and F
            | 0xF900..=0xFAFF // Compatibility Ideographs
            | 0x3300..=0x33FF // Compatibility
    )
}

/// Whitespace as ECMAScript's `\s` defines it: Unicode `White_Space`
/// without NEL (U+0085), plus the byte order mark (U+FEFF).
pub fn is_word_separator(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Count CJK characters and alphanumeric words in `html`.
pub fn content_stats(html: Option<&str>) -> ContentStats {
    let Some(html) = html.filter(|h| !h.is_empty()) else {
        return ContentStats::default();
    };

    let text = strip_tags(html);

    let mut chinese_chars = 0;
    let residual: String = text
        .chars()
        .map(|ch| {
            if is_cjk(ch) {
                chinese_chars += 1;
                ' '
            } else {
                ch
            }
        })
        .collect();

    let english_words = residual
        .split(is_word_separator)
        .filter(|word| word.chars().any(|c| c.is_ascii_alphanumeric()))
        .count();

    ContentStats::new(chinese_chars, english_words)
}

/// Human-readable reading time, e.g. `"3 min read"`.
pub fn reading_time(html: Option<&str>) -> String {
    content_stats(html).reading_time()
}

/// Total content units (CJK characters plus words).
pub fn word_count(html: Option<&str>) -> usize {
    content_stats(html).total_count
}

#[cfg(test)]
mod tests;
