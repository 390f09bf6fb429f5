use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dandy::matcher::Regex;
use regex::Regex as LibRegex;

const PATTERN: &str = "a?(b|bc|[de]*)*f+";
const INPUT: &str = "abcdeeffabcdeeffabcdeeffabcdeeffabcdeeffabcdeeffabcdeeffabcdeeff";

pub fn compile(c: &mut Criterion) {
    c.bench_function("dandy compile", |b| {
        b.iter(|| Regex::compile(black_box(PATTERN)).unwrap())
    });

    c.bench_function("library compile", |b| {
        b.iter(|| LibRegex::new(black_box(&format!("^({PATTERN})"))).unwrap())
    });
}

pub fn check(c: &mut Criterion) {
    let re = Regex::compile(PATTERN).unwrap();
    c.bench_function("dandy check", |b| {
        b.iter(|| re.match_(black_box(INPUT)).is_some())
    });

    let lib_re = LibRegex::new(&format!("^({PATTERN})")).unwrap();
    c.bench_function("library check", |b| {
        b.iter(|| lib_re.is_match(black_box(INPUT)))
    });
}

pub fn pathological(c: &mut Criterion) {
    let pattern = "a?".repeat(20) + &"a".repeat(20);
    let re = Regex::compile(&pattern).unwrap();
    let input = "a".repeat(20);
    c.bench_function("dandy pathological prefix", |b| {
        b.iter(|| re.match_(black_box(&input)).is_some())
    });
}

criterion_group!(benches, compile, check, pathological);
criterion_main!(benches);
