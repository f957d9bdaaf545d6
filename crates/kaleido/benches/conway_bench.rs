//! Criterion benches for mesh construction and Conway chains.
//!
//! Input meshes are built once outside the timed loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kaleido::api::{apply_chain, build_faces, parse_chain, solid_mesh, Mesh, MeshCfg, Polyhedron};

fn base(symbol: &str) -> Mesh {
    let p = Polyhedron::from_symbol(symbol).unwrap();
    solid_mesh(&p, &MeshCfg::default()).unwrap()
}

fn bench_mesh_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh");
    let p = Polyhedron::from_symbol("2 3 5|").unwrap();
    let faces = build_faces(&p).unwrap();
    group.bench_function("from_polygon_faces/2 3 5|", |b| {
        b.iter(|| Mesh::from_polygon_faces(&p.geometry.vertices, &faces, &MeshCfg::default()).unwrap())
    });
    group.finish();
}

fn bench_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    let cube = base("3|2 4");
    for chain in [
        "d", "a", "k", "g", "t", "c", "u", "p0.1", "r0.1:0:0.2", "x0.1", "j", "o", "e", "b", "m", "n",
        "z", "d,a,k,t",
    ] {
        let ops = parse_chain(chain).unwrap();
        group.bench_with_input(BenchmarkId::new("cube", chain), &ops, |b, ops| {
            b.iter(|| apply_chain(black_box(&cube), ops).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mesh_build, bench_chains);
criterion_main!(benches);
