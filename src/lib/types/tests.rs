use proptest::{
    prelude::*,
    string::string_regex,
    test_runner::{Config, TestRunner},
};

use super::{IsoDate, Tag, Tags};

#[test]
fn iso_date_roundtrips() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(1970i32..=2100, 1u32..=12, 1u32..=28), |(year, month, day)| {
            let s = format!("{year:04}-{month:02}-{day:02}");
            let parsed = IsoDate::parse(&s).expect("valid date");
            prop_assert_eq!(parsed.as_str(), s);
            prop_assert_eq!(parsed.year(), year);
            Ok(())
        })
        .unwrap();
}

#[test]
fn iso_date_rejects_out_of_range() {
    let mut runner = TestRunner::new(Config {
        cases: 16,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(1970i32..=2100, 13u32..=99, 32u32..=99), |(year, month, day)| {
            let s = format!("{year:04}-{month:02}-{day:02}");
            prop_assert!(IsoDate::parse(&s).is_none());
            Ok(())
        })
        .unwrap();
}

#[test]
fn iso_date_long_form() {
    let date = IsoDate::parse("2024-03-09").unwrap();
    assert_eq!(date.long_form(), "March 9, 2024");
    assert_eq!(date.to_string(), "2024-03-09");
}

#[test]
fn tag_parse_accepts_valid() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&string_regex("[A-Za-z0-9_-]{1,16}").unwrap(), |s| {
            let tag = Tag::parse(&s).expect("should parse");
            prop_assert_eq!(tag.as_str(), s);
            Ok(())
        })
        .unwrap();
}

#[test]
fn tag_parse_accepts_chinese() {
    assert_eq!(Tag::parse("生活").unwrap().as_str(), "生活");
    assert_eq!(Tag::parse("  rust ").unwrap().as_str(), "rust");
}

#[test]
fn tag_parse_rejects_invalid() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    let bad_chars = prop_oneof![
        Just("!"), Just("@"), Just("#"), Just("$"), Just("%"), Just("^"), Just("&"),
        Just("*"), Just("+"), Just("="), Just("?"), Just(","), Just(";"), Just(":"), Just("/"), Just(".")
    ];
    runner
        .run(
            &(string_regex("[\\p{Alphabetic}\\p{Number}_-]{0,6}").unwrap(), bad_chars, string_regex("[\\p{Alphabetic}\\p{Number}_-]{0,6}").unwrap()),
            |(prefix, bad, suffix)| {
                let s = format!("{prefix}{bad}{suffix}");
                prop_assert!(Tag::parse(&s).is_none());
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn tags_iterate_in_order() {
    let tags = Tags::new(vec![Tag::parse("a").unwrap(), Tag::parse("b").unwrap()]);
    let names: Vec<&str> = (&tags).into_iter().map(Tag::as_str).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(tags.len(), 2);
    assert!(Tags::default().is_empty());
}
