use blochy_gates::matrices;
use blochy_gates::{pulse_unitary, rotation_unitary, Axis, PulseAxis, PulseParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;

fn benchmark_rotation_closed_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_closed_form");

    let angles = vec![0.01, 0.1, PI / 4.0, PI / 2.0, PI];

    for angle in angles {
        group.bench_with_input(
            BenchmarkId::new("RX", format!("{:.4}", angle)),
            &angle,
            |b, &angle| {
                b.iter(|| black_box(matrices::rotation_x(angle)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("exp(-iθX/2)", format!("{:.4}", angle)),
            &angle,
            |b, &angle| {
                b.iter(|| black_box(rotation_unitary(&matrices::GENERATOR_X, angle)));
            },
        );
    }

    group.finish();
}

fn benchmark_custom_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom_axis");

    let hadamard = Axis::hadamard().generator().unwrap();
    group.bench_function("hadamard", |b| {
        b.iter(|| black_box(rotation_unitary(&hadamard, black_box(PI))));
    });

    group.bench_function("spherical_axis_lookup", |b| {
        b.iter(|| black_box(Axis::from_spherical(black_box(35.0), black_box(120.0)).generator()));
    });

    group.finish();
}

fn benchmark_pulse(c: &mut Criterion) {
    let mut group = c.benchmark_group("pulse");
    let params = PulseParams::new().with_detuning(0.3).with_phase_degrees(45.0);

    for axis in [PulseAxis::X, PulseAxis::Y] {
        group.bench_with_input(BenchmarkId::new("propagator", axis), &axis, |b, &axis| {
            b.iter(|| black_box(pulse_unitary(axis, &params, black_box(0.5))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rotation_closed_form, benchmark_custom_axis, benchmark_pulse);
criterion_main!(benches);
