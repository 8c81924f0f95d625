use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

use crate::transformer::Transformer;

/// Replace gemoji shortcodes such as `:tada:` in prose. Code is left alone,
/// as are shortcodes that do not name an emoji.
pub struct EmojiTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: I,
    in_code_block: bool,
}

impl<'a, I> Iterator for EmojiTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.inner.next()?;
        Some(match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                self.in_code_block = true;
                Event::Start(Tag::CodeBlock(kind))
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                Event::End(TagEnd::CodeBlock)
            }
            Event::Text(text) if !self.in_code_block => Event::Text(replace_shortcodes(text)),
            other => other,
        })
    }
}

fn is_shortcode_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '+' | '-')
}

/// Swap every known `:name:` in `text` for its emoji.
pub fn replace_shortcodes(text: CowStr<'_>) -> CowStr<'_> {
    if !text.contains(':') {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut replaced = false;
    let mut rest: &str = &text;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let name_len = after
            .find(|c: char| !is_shortcode_char(c))
            .unwrap_or(after.len());
        let closes = after[name_len..].starts_with(':');

        match emojis::get_by_shortcode(&after[..name_len]) {
            Some(emoji) if name_len > 0 && closes => {
                out.push_str(emoji.as_str());
                rest = &after[name_len + 1..];
                replaced = true;
            }
            _ => {
                out.push(':');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if replaced {
        CowStr::from(out)
    } else {
        text
    }
}

impl<'a, I> Transformer<'a, I> for EmojiTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self {
            inner,
            in_code_block: false,
        }
    }
}
