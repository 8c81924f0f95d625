//! Shared data types for post metadata.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use time::{Date, macros::format_description};

use crate::utils::format_date;

/// Calendar date written as `YYYY-MM-DD` in front matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoDate(Date);

impl IsoDate {
    pub fn parse(s: &str) -> Option<Self> {
        let fmt = format_description!("[year]-[month]-[day]");
        Date::parse(s.trim(), &fmt).ok().map(Self)
    }

    pub fn as_str(&self) -> String {
        let fmt = format_description!("[year]-[month]-[day]");
        self.0.format(&fmt).unwrap_or_default()
    }

    /// Long display form, e.g. `January 5, 2025`.
    pub fn long_form(&self) -> String {
        format_date(self.0)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn as_date(&self) -> Date {
        self.0
    }
}

impl From<Date> for IsoDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Tags used to categorise posts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_')
        {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The collection of tags for each post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests;
