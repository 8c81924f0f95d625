use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{
    ContentStats, content_stats, is_cjk, is_word_separator, reading_time, strip_tags, word_count,
};

#[test]
fn absent_and_empty_are_zero() {
    assert_eq!(content_stats(None), ContentStats::default());
    assert_eq!(content_stats(Some("")), ContentStats::default());
    assert_eq!(reading_time(None), "1 min read");
    assert_eq!(reading_time(Some("")), "1 min read");
    assert_eq!(word_count(None), 0);
}

#[test]
fn counts_chinese_only() {
    let stats = content_stats(Some("<p>你好世界</p>"));
    assert_eq!(stats.chinese_chars, 4);
    assert_eq!(stats.english_words, 0);
    assert_eq!(stats.total_count, 4);
}

#[test]
fn counts_english_only() {
    let stats = content_stats(Some("<p>Hello world</p>"));
    assert_eq!(stats.chinese_chars, 0);
    assert_eq!(stats.english_words, 2);
    assert_eq!(stats.total_count, 2);
}

#[test]
fn counts_mixed() {
    let stats = content_stats(Some("<p>你好 world 123</p>"));
    assert_eq!(stats.chinese_chars, 2);
    assert_eq!(stats.english_words, 2);
    assert_eq!(stats.total_count, 4);
}

#[test]
fn cjk_adjacent_to_latin_splits_the_word() {
    // Each ideograph becomes a space, so "abc中def" is two words.
    let stats = content_stats(Some("abc中def"));
    assert_eq!(stats.chinese_chars, 1);
    assert_eq!(stats.english_words, 2);
}

#[test]
fn punctuation_only_tokens_are_ignored() {
    let stats = content_stats(Some("<p>one two three ... — !!</p>"));
    assert_eq!(stats.english_words, 3);
}

#[test]
fn byte_order_mark_separates_words_but_next_line_does_not() {
    assert_eq!(content_stats(Some("foo\u{FEFF}bar")).english_words, 2);
    assert_eq!(content_stats(Some("foo\u{85}bar")).english_words, 1);
    assert!(is_word_separator('\u{3000}'));
    assert!(is_word_separator('\u{A0}'));
    assert!(!is_word_separator('\u{200B}'));
}

#[test]
fn mixed_tokens_count_once() {
    let stats = content_stats(Some("v2.0 a1b2 foo-bar"));
    assert_eq!(stats.english_words, 3);
}

#[test]
fn seven_hundred_cjk_chars_take_two_minutes() {
    let html = format!("<p>{}</p>", "字".repeat(700));
    assert_eq!(content_stats(Some(&html)).chinese_chars, 700);
    assert_eq!(reading_time(Some(&html)), "2 min read");
}

#[test]
fn minutes_round_up_across_scripts() {
    // 175 chars (0.5 min) + 150 words (0.75 min) = 1.25 -> 2
    let html = format!("{} {}", "文".repeat(175), "word ".repeat(150));
    assert_eq!(reading_time(Some(&html)), "2 min read");
}

#[test]
fn naive_stripper_eats_angle_pairs_in_text() {
    assert_eq!(strip_tags("a < b > c"), "a  c");
    assert_eq!(content_stats(Some("a < b > c")).english_words, 2);
    assert_eq!(strip_tags("1 <> 2"), "1 <> 2");
    assert_eq!(strip_tags("x < y"), "x < y");
}

#[test]
fn entities_are_not_decoded() {
    let stats = content_stats(Some("<p>Tom &amp; Jerry</p>"));
    assert_eq!(stats.english_words, 3);
}

#[test]
fn attributes_do_not_leak_into_counts() {
    let html = r#"<a href="https://example.com" title="你好">link</a>"#;
    let stats = content_stats(Some(html));
    assert_eq!(stats.chinese_chars, 0);
    assert_eq!(stats.english_words, 1);
}

#[test]
fn supplementary_plane_ideographs_count() {
    assert!(is_cjk('\u{20000}'));
    assert!(is_cjk('\u{2CEAF}'));
    assert!(is_cjk('\u{F900}'));
    assert!(is_cjk('\u{3300}'));
    assert!(!is_cjk('あ'));
    assert!(!is_cjk('a'));
    assert_eq!(content_stats(Some("𠀀𠀁")).chinese_chars, 2);
}

#[test]
fn total_is_sum_of_parts() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"\\PC*", |s| {
            let stats = content_stats(Some(&s));
            prop_assert_eq!(stats.total_count, stats.chinese_chars + stats.english_words);
            prop_assert_eq!(word_count(Some(&s)), stats.total_count);
            Ok(())
        })
        .unwrap();
}

#[test]
fn stats_are_deterministic() {
    let mut runner = TestRunner::new(Config {
        cases: 64,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[a-z 你好<>/.]{0,64}", |s| {
            prop_assert_eq!(content_stats(Some(&s)), content_stats(Some(&s)));
            prop_assert_eq!(reading_time(Some(&s)), reading_time(Some(&s)));
            Ok(())
        })
        .unwrap();
}

#[test]
fn reading_time_is_at_least_one_minute() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let minutes = content_stats(Some(&s)).minutes();
            prop_assert!(minutes >= 1);
            prop_assert_eq!(reading_time(Some(&s)), format!("{minutes} min read"));
            Ok(())
        })
        .unwrap();
}

#[test]
fn chinese_count_matches_ideograph_count_without_tags() {
    let mut runner = TestRunner::new(Config {
        cases: 64,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[\u{4e00}-\u{9fff}a-z ]{0,40}", |s| {
            let expected = s.chars().filter(|c| is_cjk(*c)).count();
            prop_assert_eq!(content_stats(Some(&s)).chinese_chars, expected);
            Ok(())
        })
        .unwrap();
}
