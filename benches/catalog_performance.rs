//! Benchmarks for carrier construction, catalog lookup, and reporting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use e57_errors::{describe_raw, Context, E57Exception, ErrorCode};

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_with_literal_context", |b| {
        b.iter(|| {
            E57Exception::new(
                black_box(ErrorCode::BadChecksum),
                "checksum=0xDEAD expected=0xBEEF",
            )
        })
    });

    c.bench_function("construct_with_builder_context", |b| {
        b.iter(|| {
            E57Exception::new(
                black_box(ErrorCode::BadChecksum),
                Context::new()
                    .field("checksum", "0xDEAD")
                    .field("expected", "0xBEEF"),
            )
        })
    });
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("describe_all_codes", |b| {
        b.iter(|| {
            for code in ErrorCode::ALL {
                black_box(code.describe());
            }
        })
    });

    c.bench_function("describe_raw_unknown_value", |b| {
        b.iter(|| describe_raw(black_box(9999)))
    });
}

fn bench_report(c: &mut Criterion) {
    let err = E57Exception::at(
        ErrorCode::BadChecksum,
        "checksum=0xDEAD expected=0xBEEF",
        "/src/Reader.cpp",
        204,
        "readPacket",
    );

    c.bench_function("report_to_buffer", |b| {
        let mut out = Vec::with_capacity(512);
        b.iter(|| {
            out.clear();
            err.report(Some("Catcher.cpp"), 99, Some("handle"), &mut out);
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_construction, bench_catalog, bench_report);
criterion_main!(benches);
