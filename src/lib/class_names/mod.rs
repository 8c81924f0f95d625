//! Class attribute helpers for templates.
//!
//! [`clsx`] flattens conditional fragments into one class string and
//! [`merge`] drops utility classes overridden by a later class of the same
//! group, so `cn!("px-2 py-1", ("p-4", big))` yields `p-4` when `big` holds.

use std::{borrow::Cow, collections::HashSet};

use itertools::Itertools;

/// One argument to [`cn`]: a class string, a list, or nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassValue<'a> {
    Text(Cow<'a, str>),
    List(Vec<ClassValue<'a>>),
    Empty,
}

impl ClassValue<'_> {
    fn flatten_into(&self, out: &mut String) {
        match self {
            ClassValue::Text(text) => {
                for token in text.split_whitespace() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(token);
                }
            }
            ClassValue::List(items) => items.iter().for_each(|item| item.flatten_into(out)),
            ClassValue::Empty => {}
        }
    }
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        ClassValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        ClassValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(value: String) -> Self {
        ClassValue::Text(Cow::Owned(value))
    }
}

/// `(class, condition)`: the class is used only when the condition holds.
impl<'a> From<(&'a str, bool)> for ClassValue<'a> {
    fn from((value, enabled): (&'a str, bool)) -> Self {
        if enabled {
            ClassValue::from(value)
        } else {
            ClassValue::Empty
        }
    }
}

impl<'a, V: Into<ClassValue<'a>>> From<Option<V>> for ClassValue<'a> {
    fn from(value: Option<V>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

impl<'a, V: Into<ClassValue<'a>>> From<Vec<V>> for ClassValue<'a> {
    fn from(values: Vec<V>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Join class fragments, skipping disabled and empty ones.
pub fn clsx<'a, I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    let mut out = String::new();
    for value in values {
        value.into().flatten_into(&mut out);
    }
    out
}

/// Join class fragments and resolve utility conflicts, last one wins.
pub fn cn<'a, I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    merge(&clsx(values))
}

/// Build a class string from mixed arguments, see [`ClassValue`].
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::class_names::cn([$($crate::class_names::ClassValue::from($value)),+])
    };
}

/// Drop classes overridden by a later class in the same utility group.
///
/// Classes only conflict under the same variants (`hover:`, `md:`…) and the
/// same importance. Classes outside the known groups are always kept.
pub fn merge(classes: &str) -> String {
    let mut taken: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for class in classes.split_whitespace().rev() {
        let parsed = ParsedClass::parse(class);
        let Some(group) = class_group(parsed.base) else {
            kept.push(class);
            continue;
        };

        let scope = parsed.scope();
        if !taken.insert(format!("{scope}{group}")) {
            continue;
        }
        for other in conflicting_groups(group) {
            taken.insert(format!("{scope}{other}"));
        }
        kept.push(class);
    }

    kept.iter().rev().join(" ")
}

struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(class: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (i, ch) in class.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&class[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut base = &class[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        // Negative values share the group of their positive form.
        base = base.strip_prefix('-').unwrap_or(base);

        Self {
            modifiers,
            important,
            base,
        }
    }

    fn scope(&self) -> String {
        let mut scope: String = self
            .modifiers
            .iter()
            .sorted()
            .map(|m| format!("{m}:"))
            .collect();
        if self.important {
            scope.push('!');
        }
        scope
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "flow-root",
    "contents",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// Utility prefixes whose value is free-form; longest prefixes first.
const PREFIXED: &[(&str, &str)] = &[
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("size", "size"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("opacity", "opacity"),
    ("cursor", "cursor"),
    ("justify", "justify-content"),
    ("items", "align-items"),
    ("self", "align-self"),
    ("z", "z"),
    ("w", "w"),
    ("h", "h"),
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("p", "p"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("ms", "ms"),
    ("me", "me"),
    ("m", "m"),
];

/// The utility group of `base`, or `None` for classes we do not know.
fn class_group(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    if VISIBILITY.contains(&base) {
        return Some("visibility");
    }

    if let Some(value) = utility_value(base, "text") {
        return Some(text_group(value));
    }
    if let Some(value) = utility_value(base, "font") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = utility_value(base, "bg") {
        return Some(bg_group(value));
    }
    if base == "border" || base.starts_with("border-") {
        return Some(border_group(base));
    }
    if base == "rounded" || base.starts_with("rounded-") {
        return Some(rounded_group(base));
    }
    if base == "shadow" {
        return Some("shadow");
    }
    if let Some(value) = utility_value(base, "shadow") {
        return Some(if SHADOW_SIZES.contains(&value) || value.starts_with('[') {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(value) = utility_value(base, "flex") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }

    PREFIXED
        .iter()
        .find(|(prefix, _)| utility_value(base, prefix).is_some())
        .map(|(_, group)| *group)
}

/// `"px-4"` with prefix `"px"` gives `Some("4")`.
fn utility_value<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    base.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|value| !value.is_empty())
}

fn is_arbitrary_color(value: &str) -> bool {
    value.starts_with("[#")
        || value.starts_with("[rgb")
        || value.starts_with("[hsl")
        || value.starts_with("[color:")
}

fn text_group(value: &str) -> &'static str {
    let value = value.split('/').next().unwrap_or(value);
    if FONT_SIZES.contains(&value) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if TEXT_WRAP.contains(&value) {
        "text-wrap"
    } else if value == "ellipsis" || value == "clip" {
        "text-overflow"
    } else if value.starts_with('[') && !is_arbitrary_color(value) {
        "font-size"
    } else {
        "text-color"
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "auto" | "cover" | "contain" => "bg-size",
        "fixed" | "local" | "scroll" => "bg-attachment",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "none" => "bg-image",
        v if v.starts_with("gradient-") || v.starts_with("linear-") => "bg-image",
        _ => "bg-color",
    }
}

fn is_border_width(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
        || (value.starts_with('[') && !is_arbitrary_color(value))
}

fn border_group(base: &str) -> &'static str {
    if base == "border" {
        return "border-w";
    }
    for (side, width, color) in [
        ("x", "border-w-x", "border-color-x"),
        ("y", "border-w-y", "border-color-y"),
        ("s", "border-w-s", "border-color-s"),
        ("e", "border-w-e", "border-color-e"),
        ("t", "border-w-t", "border-color-t"),
        ("r", "border-w-r", "border-color-r"),
        ("b", "border-w-b", "border-color-b"),
        ("l", "border-w-l", "border-color-l"),
    ] {
        let prefix = format!("border-{side}");
        if base == prefix {
            return width;
        }
        match utility_value(base, &prefix) {
            Some(value) if is_border_width(value) => return width,
            Some(_) => return color,
            None => {}
        }
    }

    match utility_value(base, "border") {
        Some(value) if is_border_width(value) => "border-w",
        Some(value) if BORDER_STYLES.contains(&value) => "border-style",
        _ => "border-color",
    }
}

fn rounded_group(base: &str) -> &'static str {
    let Some(value) = utility_value(base, "rounded") else {
        return "rounded";
    };
    let side = value.split('-').next().unwrap_or(value);
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

/// Groups a class of `group` also overrides.
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "size" => &["w", "h"],
        "font-size" => &["leading"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        _ => &[],
    }
}
