use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

use crate::{
    config::{EXTERNAL_LINK_REL, EXTERNAL_LINK_TARGET},
    transformer::Transformer,
    utils::escape_attr,
};

/// Open off-site links in a new tab without leaking the referrer.
///
/// Matching links are re-emitted as raw `<a>` HTML because pulldown-cmark
/// has no way to attach extra attributes to a link tag.
pub struct ExternalLinkTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: I,
    /// One entry per open link: whether it was rewritten.
    open: Vec<bool>,
}

impl<'a, I> Iterator for ExternalLinkTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                if is_external(&dest_url) {
                    self.open.push(true);
                    Some(Event::InlineHtml(CowStr::from(open_tag(&dest_url, &title))))
                } else {
                    self.open.push(false);
                    Some(Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    }))
                }
            }
            Event::End(TagEnd::Link) => {
                if self.open.pop().unwrap_or(false) {
                    Some(Event::InlineHtml(CowStr::Borrowed("</a>")))
                } else {
                    Some(Event::End(TagEnd::Link))
                }
            }
            other => Some(other),
        }
    }
}

/// Absolute `http(s)` or protocol-relative URLs leave the site.
pub fn is_external(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

fn open_tag(href: &str, title: &str) -> String {
    let mut out = String::with_capacity(href.len() + 96);
    out.push_str(r#"<a href=""#);
    out.push_str(&escape_attr(href));
    out.push('"');
    if !title.is_empty() {
        out.push_str(r#" title=""#);
        out.push_str(&escape_attr(title));
        out.push('"');
    }
    out.push_str(r#" target=""#);
    out.push_str(EXTERNAL_LINK_TARGET);
    out.push_str(r#"" rel=""#);
    out.push_str(&EXTERNAL_LINK_REL.join(" "));
    out.push_str(r#"">"#);
    out
}

impl<'a, I> Transformer<'a, I> for ExternalLinkTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self {
            inner,
            open: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
