use crate::{
    config::Site,
    render::Post,
    utils::{escape_attr, escape_text},
};

/// Basic HTML shell shared by pages.
pub fn page_shell(lang: &str, head: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="{}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">{head}
</head>
<body>
{body}
</body>
</html>
"#,
        escape_attr(lang)
    )
}

/// Title, date, reading time and tags shown above a post body.
pub fn post_heading(post: &Post) -> String {
    let header = &post.header;
    let mut out = String::new();

    if let Some(title) = header.title() {
        out.push_str("<h1>");
        out.push_str(&escape_text(title));
        out.push_str("</h1>\n");
    }

    let mut meta: Vec<String> = Vec::new();
    if let Some(date) = header.date() {
        meta.push(format!(
            r#"<time datetime="{}">{}</time>"#,
            escape_attr(&date.as_str()),
            escape_text(&date.long_form())
        ));
    }
    meta.push(format!(
        r#"<span class="reading-time">{}</span>"#,
        escape_text(&post.reading_time)
    ));
    out.push_str(r#"<p class="meta">"#);
    out.push_str(&meta.join(r#"<span class="meta-sep">·</span>"#));
    out.push_str("</p>\n");

    let tags = header.tags();
    if !tags.is_empty() {
        out.push_str(r#"<p class="tags">"#);
        let rendered = tags
            .0
            .iter()
            .map(|t| {
                format!(
                    r#"<a class="tag" href="/tags/{}">{}</a>"#,
                    escape_attr(t.as_str()),
                    escape_text(t.as_str())
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&rendered);
        out.push_str("</p>\n");
    }

    out
}

/// A complete page for `post`, served at `page_url` under `site`.
pub fn post_page(post: &Post, site: &Site, page_url: &str) -> String {
    let head = post.header.to_html(site, page_url, post.has_math);
    let body = format!(
        "<article>\n{}{}</article>",
        post_heading(post),
        post.html
    );
    page_shell(&site.locale, &head, &body)
}
