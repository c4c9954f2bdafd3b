//! Benchmarks for the document parser.
//!
//! These benchmarks measure parse throughput on synthetic documents of
//! various sizes to keep parsing in the microseconds-to-low-milliseconds
//! range for realistic documents.

use apibook::parser::parse;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate a synthetic document with the specified number of requests.
fn generate_document(num_requests: usize) -> String {
    let mut content = String::from("Global:\n  host=api.example.com\n  token=secret\n\n");

    for i in 0..num_requests {
        content.push_str(&format!(
            "### Request {i}\n\
             GET https://{{{{host}}}}/items/{i}\n\
             Header:\n  \
             Authorization: Bearer {{{{token}}}}\n  \
             Accept: application/json\n\
             Params:\n  \
             page={i}&limit=25\n\n"
        ));
    }

    content
}

/// Generate a document mixing bodies, forms, and recorded responses.
fn generate_complex_document(num_requests: usize) -> String {
    let mut content = String::new();

    for i in 0..num_requests {
        match i % 3 {
            0 => content.push_str(&format!(
                "### Create {i}\n\
                 POST https://api.example.com/items\n\
                 Body:\n\
                 {{\n  \"index\": {i},\n  \"name\": \"item-{i}\"\n}}\n\n"
            )),
            1 => content.push_str(&format!(
                "### Login {i}\n\
                 POST https://api.example.com/login\n\
                 Form:\n  \
                 user=u{i}&pass=p{i}\n\n"
            )),
            _ => content.push_str(&format!(
                "### Fetch {i}\n\
                 GET https://api.example.com/items/{i}\n\n\
                 #### Response 200 OK\n\
                 {{\"id\": {i}}}\n\
                 ####\n\n"
            )),
        }
    }

    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for num_requests in [10, 100, 1000] {
        let content = generate_document(num_requests);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("uniform", num_requests),
            &content,
            |b, content| b.iter(|| parse(black_box(content)).unwrap()),
        );
    }

    for num_requests in [10, 100, 1000] {
        let content = generate_complex_document(num_requests);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("mixed", num_requests),
            &content,
            |b, content| b.iter(|| parse(black_box(content)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
