use blochy_core::QubitState;
use blochy_gates::{Axis, PulseAxis, PulseParams};
use blochy_state::{interpolate, project, PreparedGate, Session, SessionConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;

fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_gate");

    for enabled in [true, false] {
        let label = if enabled { "phosphor_on" } else { "phosphor_off" };
        let config = SessionConfig::new().with_phosphor_enabled(enabled);

        group.bench_function(BenchmarkId::new("rotate_x_pi", label), |b| {
            let mut session = Session::new(config.clone()).unwrap();
            b.iter(|| {
                session.rotate(&Axis::X, black_box(PI)).unwrap();
                session.undo();
            });
        });

        group.bench_function(BenchmarkId::new("pulse_default", label), |b| {
            let mut session = Session::new(config.clone()).unwrap();
            let params = PulseParams::default();
            b.iter(|| {
                session.pulse(PulseAxis::Y, black_box(&params)).unwrap();
                session.undo();
            });
        });
    }

    group.finish();
}

fn benchmark_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    let gate = PreparedGate::rotation(&Axis::hadamard(), PI).unwrap();

    for divider in [6, 20, 200, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(divider), &divider, |b, &divider| {
            b.iter(|| black_box(interpolate(&QubitState::zero(), &gate, divider)));
        });
    }

    group.finish();
}

fn benchmark_project(c: &mut Criterion) {
    let state = QubitState::basis(false);
    c.bench_function("project", |b| {
        b.iter(|| black_box(project(black_box(&state))));
    });
}

fn benchmark_command_round_trip(c: &mut Criterion) {
    let mut session = Session::default();
    let rotate = r#"{ "kind": "rotate", "axis": "y", "angleRadians": 0.5 }"#;
    let undo = r#"{ "kind": "undo" }"#;
    c.bench_function("execute_json_rotate_undo", |b| {
        b.iter(|| {
            black_box(session.execute_json(rotate).unwrap());
            black_box(session.execute_json(undo).unwrap());
        });
    });
}

criterion_group!(
    benches,
    benchmark_apply,
    benchmark_interpolate,
    benchmark_project,
    benchmark_command_round_trip
);
criterion_main!(benches);
