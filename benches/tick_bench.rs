// Benchmark for the countdown tick path
// Measures reconciliation plus display derivation per frame

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mypump::models::settings::Settings;
use mypump::models::timer::EpochSeconds;
use mypump::services::countdown::CountdownReconciler;
use mypump::services::session::{Session, SessionEvent};

const T0: EpochSeconds = 1_700_000_000.0;

fn bench_reconciler_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconciler_ticks");

    for count in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut reconciler = CountdownReconciler::new(300.0, 0.0);
                reconciler.signal_goal_imminent(T0);
                for i in 0..count {
                    let now = T0 + i as f64 * 0.1;
                    reconciler.tick(now);
                    black_box(reconciler.display(now));
                }
            })
        });
    }

    group.finish();
}

fn bench_session_frame(c: &mut Criterion) {
    let settings = Settings {
        activation_delay_seconds: 0.0,
        ..Settings::default()
    };
    let mut session = Session::new(&settings);
    session.handle(SessionEvent::SelectMeal(Some("Proteinshake".into())), T0);
    session.handle(SessionEvent::ConfirmMeal, T0);

    c.bench_function("session_frame", |b| {
        let mut now = T0;
        b.iter(|| {
            now += 0.016;
            session.handle(SessionEvent::Tick, black_box(now));
            black_box(session.display(now))
        })
    });
}

criterion_group!(benches, bench_reconciler_ticks, bench_session_frame);
criterion_main!(benches);
