use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use pulldown_cmark::{Event, Parser, html::push_html};

use crate::{
    config::parser_options,
    transformer::{
        WithTransformer,
        external_link::{ExternalLinkTransformer, is_external},
    },
};

fn render(markdown: &str) -> String {
    let events = Parser::new_ext(markdown, parser_options())
        .with_transformer::<ExternalLinkTransformer<'_, _>>();
    let mut out = String::new();
    push_html(&mut out, events);
    out
}

#[test]
fn external_links_open_in_new_tab() {
    let html = render(r#"See [docs](https://doc.rust-lang.org "The Book")."#);
    assert!(html.contains(
        r#"<a href="https://doc.rust-lang.org" title="The Book" target="_blank" rel="nofollow noreferrer noopener">docs</a>"#
    ));
}

#[test]
fn internal_links_are_untouched() {
    let html = render("[about](/about) and [top](#intro)");
    assert!(html.contains(r#"<a href="/about">about</a>"#));
    assert!(html.contains(r##"<a href="#intro">top</a>"##));
    assert!(!html.contains("target="));
}

#[test]
fn autolinks_are_external_too() {
    let html = render("<https://example.com>");
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(">https://example.com</a>"));
}

#[test]
fn classification() {
    assert!(is_external("https://x.com/CarberryChai"));
    assert!(is_external("HTTP://EXAMPLE.COM"));
    assert!(is_external("//cdn.example.com/a.js"));
    assert!(!is_external("/rss.xml"));
    assert!(!is_external("mailto:a@b.c"));
    assert!(!is_external("#section"));
}

#[test]
fn link_events_stay_balanced() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &proptest::collection::vec(
                prop_oneof![Just("https://a.example"), Just("/local"), Just("#frag")],
                0..6,
            ),
            |urls| {
                let markdown: String = urls.iter().map(|u| format!("[x]({u}) ")).collect();
                let events: Vec<_> = Parser::new_ext(&markdown, parser_options())
                    .with_transformer::<ExternalLinkTransformer<'_, _>>()
                    .collect();
                let opens = events
                    .iter()
                    .filter(|e| matches!(e, Event::InlineHtml(h) if h.starts_with("<a ")))
                    .count();
                let closes = events
                    .iter()
                    .filter(|e| matches!(e, Event::InlineHtml(h) if h.as_ref() == "</a>"))
                    .count();
                let external = urls.iter().filter(|u| u.starts_with("https")).count();
                prop_assert_eq!(opens, external);
                prop_assert_eq!(closes, external);
                Ok(())
            },
        )
        .unwrap();
}
