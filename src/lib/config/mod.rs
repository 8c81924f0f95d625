use pulldown_cmark::Options;

// Site-wide metadata used for page heads and absolute links.
pub const SITE_TITLE: &str = "XiaoChai";
pub const SITE_DESCRIPTION: &str = "个人博客，记录生活中的点滴，分享编程和技术的经验。";
pub const SITE_HREF: &str = "https://astro-erudite.vercel.app";
pub const SITE_AUTHOR: &str = "Chai";
pub const SITE_LOCALE: &str = "zh-CN";
pub const FEATURED_POST_COUNT: usize = 2;
pub const POSTS_PER_PAGE: usize = 5;

/// Convenience container for site metadata used across rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub href: String,
    pub author: String,
    pub locale: String,
    pub featured_post_count: usize,
    pub posts_per_page: usize,
}

pub fn site() -> Site {
    Site {
        title: SITE_TITLE.to_string(),
        description: SITE_DESCRIPTION.to_string(),
        href: SITE_HREF.trim_end_matches('/').to_string(),
        author: SITE_AUTHOR.to_string(),
        locale: SITE_LOCALE.to_string(),
        featured_post_count: FEATURED_POST_COUNT,
        posts_per_page: POSTS_PER_PAGE,
    }
}

/// A labelled link in the header navigation or footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl SocialLink {
    /// Icon id for this link, if the label has one.
    pub fn icon(&self) -> Option<&'static str> {
        icon_for(self.label)
    }
}

pub const NAV_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "/blog",
        label: "blog",
    },
    SocialLink {
        href: "/about",
        label: "about",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://github.com/carberrychai",
        label: "GitHub",
    },
    SocialLink {
        href: "https://x.com/CarberryChai",
        label: "Twitter",
    },
    SocialLink {
        href: "/rss.xml",
        label: "RSS",
    },
];

/// Link label to icon id.
pub const ICON_MAP: &[(&str, &str)] = &[
    ("Website", "lucide:globe"),
    ("GitHub", "lucide:github"),
    ("LinkedIn", "lucide:linkedin"),
    ("Twitter", "lucide:twitter"),
    ("Email", "lucide:mail"),
    ("RSS", "lucide:rss"),
];

pub fn icon_for(label: &str) -> Option<&'static str> {
    ICON_MAP
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, icon)| *icon)
}

// Markdown rendering.
pub const KATEX_CSS_HREF: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.21/dist/katex.min.css";
pub const EXTERNAL_LINK_TARGET: &str = "_blank";
pub const EXTERNAL_LINK_REL: &[&str] = &["nofollow", "noreferrer", "noopener"];

// Code frames.
pub const CODE_THEME: &str = "base16-ocean.dark";
pub const CODE_WRAP: bool = true;
pub const CODE_FONT_SIZE: &str = "0.75rem";
pub const CODE_FONT_FAMILY: &str = "var(--font-mono)";
pub const CODE_UI_FONT_FAMILY: &str = "var(--font-sans)";
pub const COPY_ICON_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' fill='none' stroke='rgba(128,128,128,1)' stroke-linecap='round' stroke-linejoin='round' stroke-width='2' viewBox='0 0 24 24'><rect width='8' height='4' x='8' y='2' rx='1' ry='1'/><path d='M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2'/></svg>";

/// Parser options for post bodies.
pub fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_GFM);
    options.insert(Options::ENABLE_MATH);
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}
