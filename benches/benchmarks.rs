//! Performance benchmarks for grove

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grove::test_utils::TestDir;
use grove::{LineCollector, TraversalConfig, TreeRenderer};

/// Build a tree of `dirs` directories with `files` files each, plus some
/// excluded noise that must be pruned.
fn create_project(dirs: usize, files: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files {
            dir.add_file(&format!("src/mod{}/file{}.rs", d, f), "");
        }
        dir.add_file(&format!("node_modules/pkg{}/index.js", d), "");
    }
    dir.add_file("README.md", "");
    dir
}

fn bench_render(c: &mut Criterion) {
    let project = create_project(50, 20);
    let renderer = TreeRenderer::new(TraversalConfig::default());

    c.bench_function("render_1000_files", |b| {
        b.iter(|| {
            let mut lines = LineCollector::new();
            renderer
                .render_to(black_box(project.path()), &mut lines)
                .unwrap();
            lines.into_lines()
        })
    });

    let shallow = TreeRenderer::new(
        TraversalConfig::builder()
            .max_depth(Some(2))
            .build()
            .unwrap(),
    );
    c.bench_function("render_depth_2", |b| {
        b.iter(|| shallow.render(black_box(project.path())))
    });
}

fn bench_build(c: &mut Criterion) {
    let project = create_project(50, 20);
    let renderer = TreeRenderer::new(TraversalConfig::default());

    c.bench_function("build_json_tree", |b| {
        b.iter(|| renderer.build(black_box(project.path())))
    });
}

criterion_group!(benches, bench_render, bench_build);
criterion_main!(benches);
