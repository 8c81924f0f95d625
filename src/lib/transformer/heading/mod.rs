use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

use crate::{transformer::Transformer, utils::Slugger};

/// Give every heading an `id` so it can be linked to. Explicit ids
/// (`# Title {#id}`) are kept and never reused for generated slugs.
pub struct HeadingIdTransformer<'a> {
    inner: std::vec::IntoIter<Event<'a>>,
}

impl<'a> Iterator for HeadingIdTransformer<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, I> Transformer<'a, I> for HeadingIdTransformer<'a>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        let events: Vec<Event<'a>> = inner.collect();
        Self {
            inner: assign_heading_ids(events).into_iter(),
        }
    }
}

/// Fill in missing heading ids with unique slugs of the heading text.
pub fn assign_heading_ids<'a>(mut events: Vec<Event<'a>>) -> Vec<Event<'a>> {
    let mut slugger = Slugger::new();
    for event in &events {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            slugger.reserve(id);
        }
    }

    // (index of the Start event, text seen so far)
    let mut open: Option<(usize, String)> = None;

    for i in 0..events.len() {
        match &events[i] {
            Event::Start(Tag::Heading { id: None, .. }) => open = Some((i, String::new())),
            Event::Text(text) | Event::Code(text) | Event::InlineMath(text) => {
                if let Some((_, buf)) = open.as_mut() {
                    buf.push_str(text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((start, buf)) = open.take() {
                    let slug = slugger.slug(&buf);
                    if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
                        *id = Some(CowStr::from(slug));
                    }
                }
            }
            _ => {}
        }
    }

    events
}
