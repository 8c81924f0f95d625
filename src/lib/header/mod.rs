use color_eyre::Section;
use gray_matter::{Matter, engine::YAML};
use serde::Deserialize;

use crate::{
    config::{KATEX_CSS_HREF, Site},
    types::{IsoDate, Tag, Tags},
    utils::{escape_attr, escape_text},
};

/// Post front matter.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Header {
    title: Option<String>,
    description: Option<String>,
    #[serde(alias = "pubDate")]
    date: Option<String>,
    #[serde(alias = "updatedDate")]
    updated: Option<String>,
    order: Option<i64>,
    image: Option<String>,
    tags: Option<Vec<String>>,
    authors: Option<Vec<String>>,
    #[serde(default)]
    draft: bool,
}

impl TryFrom<&str> for Header {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let matter = Matter::<YAML>::new();
        matter
            .parse::<Header>(value)
            .with_note(|| "While parsing frontmatter.")
            .map(|res| res.data.unwrap_or_default())
    }
}

impl Header {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date(&self) -> Option<IsoDate> {
        self.date.as_deref().and_then(IsoDate::parse)
    }

    pub fn updated(&self) -> Option<IsoDate> {
        self.updated.as_deref().and_then(IsoDate::parse)
    }

    pub fn order(&self) -> Option<i64> {
        self.order
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn authors(&self) -> &[String] {
        self.authors.as_deref().unwrap_or(&[])
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn tags(&self) -> Tags {
        let parsed = self
            .tags
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .filter_map(|t| Tag::parse(t))
            .collect();
        Tags::new(parsed)
    }

    /// `<head>` additions for a post page: title, description, canonical
    /// link, social image and, when the body has math, the KaTeX stylesheet.
    pub fn to_html(&self, site: &Site, page_url: &str, has_math: bool) -> String {
        let mut result = String::new();

        let title = match self.title.as_ref() {
            Some(title) => format!("{title} | {}", site.title),
            None => site.title.clone(),
        };
        result.push_str(&format!(
            r#"
<title>{}</title>"#,
            escape_text(&title)
        ));

        let description = self.description.as_deref().unwrap_or(&site.description);
        result.push_str(&format!(
            r#"
<meta name="description" content="{}">"#,
            escape_attr(description)
        ));

        result.push_str(&format!(
            r#"
<link rel="canonical" href="{}">"#,
            escape_attr(&absolute_url(&site.href, page_url))
        ));

        if let Some(image) = self.image.as_deref() {
            result.push_str(&format!(
                r#"
<meta property="og:image" content="{}">"#,
                escape_attr(&absolute_url(&site.href, image))
            ));
        }

        if has_math {
            result.push_str(&format!(
                r#"
<link rel="stylesheet" href="{}">"#,
                escape_attr(KATEX_CSS_HREF)
            ));
        }

        result
    }
}

fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
