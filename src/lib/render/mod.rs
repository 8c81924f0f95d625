//! In-memory markdown rendering for posts.

use color_eyre::Section;
use pulldown_cmark::{Event, Parser, TextMergeStream, html::push_html};
use tracing::debug;

use crate::{
    config::parser_options,
    header::Header,
    reading::{ContentStats, content_stats},
    transformer::{
        WithTransformer, code_block::CodeHighlightTransformer, emoji::EmojiTransformer,
        external_link::ExternalLinkTransformer, heading::HeadingIdTransformer,
        math::MathTransformer,
    },
};

/// A rendered post with the figures listings show next to it.
#[derive(Clone, Debug)]
pub struct Post {
    pub header: Header,
    pub html: String,
    pub has_math: bool,
    pub stats: ContentStats,
    pub reading_time: String,
}

/// Render a markdown body to HTML. A leading YAML front matter block is
/// skipped.
pub fn render_markdown(source: &str) -> String {
    let events: Vec<Event<'_>> =
        TextMergeStream::new(Parser::new_ext(source, parser_options())).collect();
    render_events(events)
}

fn render_events(events: Vec<Event<'_>>) -> String {
    let transformed = events
        .into_iter()
        .with_transformer::<CodeHighlightTransformer<'_, _>>()
        .with_transformer::<EmojiTransformer<'_, _>>()
        // Ids are slugged while headings still carry their math source.
        .with_transformer::<HeadingIdTransformer<'_>>()
        .with_transformer::<MathTransformer<'_, _>>()
        .with_transformer::<ExternalLinkTransformer<'_, _>>();

    let mut rendered = String::new();
    push_html(&mut rendered, transformed);
    rendered
}

/// Parse front matter, render the body and measure it.
pub fn render_post(source: &str) -> color_eyre::Result<Post> {
    let header = Header::try_from(source).with_note(|| "While rendering a post.")?;

    let events: Vec<Event<'_>> =
        TextMergeStream::new(Parser::new_ext(source, parser_options())).collect();
    let has_math = events
        .iter()
        .any(|e| matches!(e, Event::InlineMath(_) | Event::DisplayMath(_)));

    let html = render_events(events);
    let stats = content_stats(Some(&html));
    let reading_time = stats.reading_time();

    debug!(
        title = header.title(),
        chinese_chars = stats.chinese_chars,
        english_words = stats.english_words,
        minutes = stats.minutes(),
        "rendered post"
    );

    Ok(Post {
        header,
        html,
        has_math,
        stats,
        reading_time,
    })
}
