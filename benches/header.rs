use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glslembed_codegen::{generate_header, text_to_literal};
use std::fmt::Write;

const SHADER_COUNT: usize = 64;
const SHADER_LINES: usize = 400;

fn synthetic_shader(index: usize) -> String {
    let mut text = String::from("#version 330 core\n\n");
    for line in 0..SHADER_LINES {
        if line % 8 == 0 {
            text.push('\n');
        }
        writeln!(text, "    float v{line} = {index}.0; // \"comment\" {line}").unwrap();
    }
    text
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let dir = tempfile::TempDir::new().unwrap();
    for index in 0..SHADER_COUNT {
        std::fs::write(
            dir.path().join(format!("shader{index}.frag.glsl")),
            synthetic_shader(index),
        )
        .unwrap();
    }
    let out = dir.path().join("shader_strings.h");
    let shader = synthetic_shader(0);

    let mut group = c.benchmark_group("shader header generation");
    group.bench_function("literal", |b| {
        b.iter(|| black_box(text_to_literal(black_box(&shader))))
    });
    group.bench_function("directory", |b| {
        b.iter(|| generate_header(dir.path(), &out).unwrap())
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
