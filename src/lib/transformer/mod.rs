//! Adapters over pulldown-cmark `Event` iterators.
//!
//! Each transformer wraps the previous one and rewrites only the events it
//! cares about: code blocks collapse into one highlighted `Event::Html`, math
//! becomes KaTeX markup, headings gain ids, external links gain `target` and
//! `rel`, and emoji shortcodes in prose are expanded. Chain them with
//! [`WithTransformer::with_transformer`].
use pulldown_cmark::Event;

pub mod code_block;
pub mod emoji;
pub mod external_link;
pub mod heading;
pub mod math;

/// A transformer over events, that takes in an inner iterator and returns
/// another iterator of events, which returns transformed events.
pub trait Transformer<'a, I>: Iterator<Item = Event<'a>> + Sized
where
    I: Iterator<Item = Event<'a>>,
{
    /// Wrap an inner iterator with the transformer
    fn transform(inner: I) -> Self;
}

/// Wrap an event iterator with another transformer, allowing for chaining.
pub trait WithTransformer<'a>: Iterator<Item = Event<'a>> + Sized {
    /// Wrap ourselves with some transformer
    fn with_transformer<T: Transformer<'a, Self>>(self) -> T {
        T::transform(self)
    }
}

/// Blanket implementation over any event iterator
impl<'a, I: Iterator<Item = Event<'a>>> WithTransformer<'a> for I {}
