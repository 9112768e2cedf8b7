use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tiny_nn::{
    matrix::{Matrix2, MatrixRef},
    neural::{dataset::Dataset, optimizer::Optimizer, NeuralNet},
};

fn seeded(arch: &[usize]) -> NeuralNet {
    let mut net = NeuralNet::new(arch).unwrap();
    net.randomize_with(&mut StdRng::seed_from_u64(0), -1.0, 1.0)
        .unwrap();
    net
}

/// Two-bit inputs mapped to `[a & b, a | b]`.
fn two_output_data() -> Dataset {
    Dataset::new(
        Matrix2::from_array([[0, 0], [0, 1], [1, 0], [1, 1]]).into(),
        Matrix2::from_array([[0, 0], [0, 1], [0, 1], [1, 1]]).into(),
    )
    .unwrap()
}

fn forward(net: &mut NeuralNet, inputs: &Matrix2<f64>) {
    for i in 0..inputs.rows() {
        assert!(net.predict(&inputs.row(i).unwrap()).is_ok());
    }
}

fn train(arch: &[usize], data: &Dataset, epochs: usize) {
    let mut net = seeded(arch);
    let optim = Optimizer::new(epochs, 1e-1, 1e-3);
    assert!(optim.train(&mut net, data).is_ok());
}

fn bench_forward(c: &mut Criterion) {
    let mut small = seeded(&[2, 10, 10, 2]);
    let mut medium = seeded(&[2, 20, 20, 20, 2]);

    let input_small = Matrix2::new(10, 2).unwrap();
    let input_medium = Matrix2::new(1_000, 2).unwrap();

    c.bench_function("forward small 10 inputs", |b| {
        b.iter(|| forward(black_box(&mut small), black_box(&input_small)))
    });
    c.bench_function("forward small 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&mut small), black_box(&input_medium)))
    });

    c.bench_function("forward medium 10 inputs", |b| {
        b.iter(|| forward(black_box(&mut medium), black_box(&input_small)))
    });
    c.bench_function("forward medium 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&mut medium), black_box(&input_medium)))
    });
}

fn bench_cost(c: &mut Criterion) {
    let data = two_output_data();
    let mut medium = seeded(&[2, 20, 20, 20, 2]);

    c.bench_function("cost medium", |b| {
        b.iter(|| {
            medium
                .cost(black_box(data.inputs()), black_box(data.targets()))
                .unwrap()
        })
    });
}

fn bench_tiny(c: &mut Criterion) {
    let data = Dataset::xor_gate();
    c.bench_function("tiny 10 epochs", |b| {
        b.iter(|| train(&[2, 2, 1], &data, black_box(10)))
    });
    c.bench_function("tiny 1,000 epochs", |b| {
        b.iter(|| train(&[2, 2, 1], &data, black_box(1_000)))
    });
}

fn bench_small(c: &mut Criterion) {
    let data = two_output_data();
    c.bench_function("small 10 epochs", |b| {
        b.iter(|| train(&[2, 10, 10, 2], &data, black_box(10)))
    });
}

fn bench_medium(c: &mut Criterion) {
    let data = two_output_data();
    c.bench_function("medium 1 epoch", |b| {
        b.iter(|| train(&[2, 20, 20, 20, 2], &data, black_box(1)))
    });
}

criterion_group!(
    benches,
    bench_forward,
    bench_cost,
    bench_tiny,
    bench_small,
    bench_medium
);
criterion_main!(benches);
