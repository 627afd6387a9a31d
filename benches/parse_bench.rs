use criterion::{Criterion, criterion_group, criterion_main};
use devtext::{ParseOptions, find_error_pos, parse_lenient};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_lenient");
    let cases = vec![
        r#"{"a": 1, "b": [true, null], "c": "text"}"#,
        "// header\n{\"a\": 1, /* mid */ \"b\": 2,}",
        "\u{FEFF}{\u{201C}a\u{201D}: 1}\u{200B}",
        r#"{"deep": {"list": [1, 2, 3, {"k": "v"},]},}"#,
    ];
    let opts = ParseOptions::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = parse_lenient(std::hint::black_box(s), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_error_pos");
    // A long valid array and one with an error near the end.
    let mut valid = String::from("[");
    for i in 0..5_000 {
        if i > 0 {
            valid.push(',');
        }
        valid.push_str(&format!("{{\"k{}\": {}}}", i, i));
    }
    valid.push(']');
    let mut broken = valid.clone();
    broken.pop();
    broken.push_str("  oops");
    group.bench_function("valid_5k", |b| {
        b.iter(|| std::hint::black_box(find_error_pos(std::hint::black_box(&valid))))
    });
    group.bench_function("broken_5k", |b| {
        b.iter(|| std::hint::black_box(find_error_pos(std::hint::black_box(&broken))))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_locate);
criterion_main!(benches);
