use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use erudite::{content_stats, render::render_markdown};

/// Rendered-looking HTML with a mix of Chinese and English paragraphs.
fn mixed_html(paragraphs: usize) -> String {
    let mut html = String::new();
    for i in 0..paragraphs {
        if i % 2 == 0 {
            html.push_str("<p>静态站点生成器把 Markdown 渲染成 HTML，阅读时间按字数估算。</p>\n");
        } else {
            html.push_str(
                "<p>The quick <em>brown</em> fox jumps over the <a href=\"/x\">lazy</a> dog.</p>\n",
            );
        }
    }
    html
}

fn bench_content_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_stats");
    for paragraphs in [10usize, 100, 1_000] {
        let html = mixed_html(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| black_box(content_stats(Some(html))))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_markdown");
    let source = "## Heading\n\n你好 world :tada: [link](https://example.com)\n\n```rust\nfn main() {}\n```\n"
        .repeat(20);
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("mixed_post", |b| {
        b.iter(|| black_box(render_markdown(&source)))
    });
    group.finish();
}

criterion_group!(benches, bench_content_stats, bench_render);
criterion_main!(benches);
