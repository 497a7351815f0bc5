use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyrec::{
    _test_util::{gen_int_dense_poly, gen_pts},
    algebra::{int_form::IntForm, poly::dense::DensePoly, rat::Rat},
    radix::decode,
    rec::{
        newton::{newton_coeffs, rec_from_pts},
        point::Point,
    },
};
use rand_xoshiro::rand_core::SeedableRng;

const NPOLYS: usize = 10;

fn gen_sample(nterms: usize) -> Vec<Vec<Point>> {
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
    (0..NPOLYS)
        .map(|_| {
            let poly = gen_int_dense_poly(nterms, &mut rng);
            gen_pts(&poly, nterms, &mut rng)
        })
        .collect()
}

fn rec_all(sample: &[Vec<Point>]) -> Vec<DensePoly<Rat>> {
    sample
        .iter()
        .map(|pts| rec_from_pts(pts).unwrap())
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    for nterms in [4, 16, 64] {
        let sample = gen_sample(nterms);
        c.bench_function(&format!("newton coefficients {nterms}"), |b| {
            b.iter(|| {
                for pts in &sample {
                    black_box(newton_coeffs(pts).unwrap());
                }
            })
        });
        c.bench_function(&format!("rec poly {nterms}"), |b| {
            b.iter(|| rec_all(black_box(&sample)))
        });
        let polys = rec_all(&sample);
        c.bench_function(&format!("integer form {nterms}"), |b| {
            b.iter(|| {
                for p in &polys {
                    black_box(IntForm::from(p));
                }
            })
        });
    }

    let digits = "1234567890abcdefghijklmnopqrstuvwxyz".repeat(100);
    c.bench_function("decode base 36", |b| {
        b.iter(|| decode(black_box(&digits), 36).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
