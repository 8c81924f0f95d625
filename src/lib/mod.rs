//! Building blocks for a bilingual (Chinese/English) static blog: reading
//! statistics, markdown rendering, site constants and template helpers.

pub mod class_names;
pub mod config;
pub mod document;
pub mod header;
pub mod reading;
pub mod render;
pub mod transformer;
pub mod types;
pub mod utils;

pub use reading::{ContentStats, content_stats, reading_time, word_count};
