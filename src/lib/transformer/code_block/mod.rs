use std::sync::OnceLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::{
    highlighting::{Theme, ThemeSet},
    html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};
use tracing::warn;

use crate::{
    config::{
        CODE_FONT_FAMILY, CODE_FONT_SIZE, CODE_THEME, CODE_UI_FONT_FAMILY, CODE_WRAP,
        COPY_ICON_SVG,
    },
    transformer::Transformer,
    utils::{escape_attr, escape_text},
};

/// An enum to keep track of the state of the highlighter in the code block.
pub enum CodeBlockState<'a> {
    /// Not in code block, pass through the event as-is.
    Passthrough,
    /// Currently inside a code block of language `lang`, so we accumulate all
    /// events until an `Event::End(TagEnd::CodeBlock)` is reached.
    Accumulating { lang: CodeBlockKind<'a> },
}

/// Highlights code blocks and wraps them in a frame with a copy button.
pub struct CodeHighlightTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: I,
    /// Raw code of the block being accumulated.
    buffer: String,
    state: CodeBlockState<'a>,
}

impl<'a, I> Iterator for CodeHighlightTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Everything between Start(CodeBlock) and End(CodeBlock) becomes a
        // single Html event, so we loop until the block closes.
        loop {
            let event = self.inner.next()?;
            match &self.state {
                CodeBlockState::Passthrough => match event {
                    Event::Start(Tag::CodeBlock(lang)) => {
                        self.state = CodeBlockState::Accumulating { lang };
                        self.buffer.clear();
                        continue;
                    }
                    other => return Some(other),
                },
                CodeBlockState::Accumulating { .. } => match event {
                    Event::End(TagEnd::CodeBlock) => {
                        let CodeBlockState::Accumulating { lang } =
                            std::mem::replace(&mut self.state, CodeBlockState::Passthrough)
                        else {
                            unreachable!()
                        };

                        let language = match lang {
                            CodeBlockKind::Fenced(ref info) => info_language(info),
                            CodeBlockKind::Indented => None,
                        };

                        return Some(Event::Html(CowStr::from(render_frame(
                            &self.buffer,
                            language,
                        ))));
                    }
                    Event::Text(text) | Event::Code(text) => {
                        self.buffer.push_str(text.as_ref());
                        continue;
                    }
                    Event::SoftBreak | Event::HardBreak => {
                        self.buffer.push('\n');
                        continue;
                    }
                    Event::Html(html) | Event::InlineHtml(html) => {
                        self.buffer.push_str(html.as_ref());
                        continue;
                    }
                    Event::InlineMath(math) | Event::DisplayMath(math) => {
                        self.buffer.push_str(math.as_ref());
                        continue;
                    }
                    _ => continue,
                },
            }
        }
    }
}

/// First word of a fence info string (```` ```rs title="x" ```` gives `rs`).
fn info_language(info: &str) -> Option<&str> {
    info.split_whitespace().next().filter(|l| !l.is_empty())
}

/// Render one code block, including its frame.
pub fn render_frame(source: &str, language: Option<&str>) -> String {
    let syntax_set = syntax_set();
    let syntax: &SyntaxReference = language
        .and_then(|lang| syntax_set.find_syntax_by_token(lang))
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let pre = render_classed_html(source, syntax_set, syntax, language).unwrap_or_else(|| {
        warn!(language, "syntax highlighting failed, using plain code");
        fallback_plain(source, language)
    });

    let mut out = String::with_capacity(pre.len() + source.len() + 160);
    out.push_str(r#"<figure class="code-frame"#);
    if CODE_WRAP {
        out.push_str(" wrap");
    }
    out.push_str(r#""><figcaption class="header">"#);
    if let Some(lang) = language {
        out.push_str(r#"<span class="lang">"#);
        out.push_str(&escape_text(lang));
        out.push_str("</span>");
    }
    out.push_str(r#"<button class="copy" type="button" title="Copy to clipboard" data-code=""#);
    out.push_str(&escape_attr(source));
    out.push_str(r#""></button></figcaption>"#);
    out.push_str(&pre);
    out.push_str("</figure>\n");
    out
}

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

static THEME: OnceLock<Theme> = OnceLock::new();
fn theme() -> &'static Theme {
    THEME.get_or_init(|| {
        ThemeSet::load_defaults()
            .themes
            .remove(CODE_THEME)
            .unwrap_or_default()
    })
}

static HIGHLIGHT_CSS: OnceLock<String> = OnceLock::new();
/// CSS for class-based highlighting plus the code frame chrome.
pub fn highlight_css() -> &'static str {
    HIGHLIGHT_CSS.get_or_init(|| {
        let mut css =
            css_for_theme_with_class_style(theme(), ClassStyle::Spaced).unwrap_or_default();
        css.push_str(&format!(
            ".code-frame pre{{font-size:{CODE_FONT_SIZE};font-family:{CODE_FONT_FAMILY}}}\n\
             .code-frame.wrap pre{{white-space:pre-wrap;overflow-wrap:anywhere}}\n\
             .code-frame .header{{font-family:{CODE_UI_FONT_FAMILY}}}\n\
             .code-frame .copy{{background-image:url(\"{}\")}}\n",
            inline_svg_url(COPY_ICON_SVG)
        ));
        css
    })
}

/// Encode an SVG document as a `data:` URL usable from CSS.
pub fn inline_svg_url(svg: &str) -> String {
    const KEEP: &[u8] = b"-_.!~*'()";
    let mut out = String::from("data:image/svg+xml,");
    for byte in svg.bytes() {
        if byte.is_ascii_alphanumeric() || KEEP.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn render_classed_html(
    source: &str,
    syntax_set: &SyntaxSet,
    syntax: &SyntaxReference,
    language: Option<&str>,
) -> Option<String> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, ClassStyle::Spaced);

    for line in LinesWithEndings::from(source) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .ok()?;
    }

    let mut out = String::with_capacity(source.len() + 48);
    out.push_str("<pre class=\"code");
    if let Some(lang) = language {
        out.push_str(" language-");
        out.push_str(&escape_attr(lang));
    }
    out.push_str("\"><code>");
    out.push_str(&generator.finalize());
    out.push_str("</code></pre>");
    Some(out)
}

/// Backup renderer in case syntect fails for whatever reason
pub fn fallback_plain(source: &str, language: Option<&str>) -> String {
    let mut out = String::with_capacity(source.len() + 32);
    out.push_str("<pre class=\"code\"><code");
    if let Some(lang) = language {
        out.push_str(" class=\"language-");
        out.push_str(&escape_attr(lang));
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape_text(source));
    out.push_str("</code></pre>");
    out
}

impl<'a, I> Transformer<'a, I> for CodeHighlightTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self {
            inner,
            buffer: String::new(),
            state: CodeBlockState::Passthrough,
        }
    }
}
