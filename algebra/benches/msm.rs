use ark_std::time::Instant;
use honk_algebra::{
    bn254::{BN254Scalar, BN254G1},
    prelude::*,
};

fn main() {
    let mut prng = test_rng();
    let count = 1 << 16;

    let generator = BN254G1::generator();
    let points = (0..count)
        .map(|_| generator * &BN254Scalar::random(&mut prng))
        .collect::<Vec<_>>();
    let scalars = (0..count)
        .map(|_| BN254Scalar::random(&mut prng))
        .collect::<Vec<_>>();

    let start = Instant::now();
    let _ = BN254G1::multi_exp(&scalars, &points);
    let elapsed = start.elapsed();

    println!("{} points: {:.3} s", count, elapsed.as_secs_f32());
    println!("per point: {} us", elapsed.as_micros() / count as u128);
}
