//! `$...$` and `$$...$$` rendered to KaTeX markup at build time, so pages only
//! need the KaTeX stylesheet.

use katex::Opts;
use pulldown_cmark::Event;
use tracing::warn;

use crate::{transformer::Transformer, utils::escape_text};

/// Replaces `InlineMath` with inline KaTeX HTML and `DisplayMath` with a
/// block-level `Html` event. Runs after heading ids are assigned, since the
/// slugger reads the raw math source.
pub struct MathTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: I,
}

impl<'a, I> Iterator for MathTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match self.inner.next()? {
            Event::InlineMath(source) => Event::InlineHtml(render_math(&source, false).into()),
            Event::DisplayMath(source) => Event::Html(render_math(&source, true).into()),
            other => other,
        })
    }
}

/// Render `source` with KaTeX. Expressions KaTeX rejects are shown as
/// escaped source in a `katex-error` span.
pub fn render_math(source: &str, display_mode: bool) -> String {
    let mut builder = Opts::builder();
    builder.display_mode(display_mode);

    let opts = builder.build().unwrap_or_default();

    match katex::render_with_opts(source, &opts) {
        Ok(res) => res,
        Err(e) => {
            warn!(%e, source, "KaTeX rejected expression");
            format!(
                r#"<span class="katex-error" title="{}">{}</span>"#,
                escape_text(&e.to_string()),
                escape_text(source)
            )
        }
    }
}

impl<'a, I> Transformer<'a, I> for MathTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self { inner }
    }
}
