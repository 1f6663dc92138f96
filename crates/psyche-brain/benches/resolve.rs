use criterion::{black_box, criterion_group, criterion_main, Criterion};
use psyche_brain::{
    AgentSnapshot, BrainConfig, Choice, DecisionEngine, LifeEvent, Personality, Temperament,
};

fn event(choices: usize) -> LifeEvent {
    let options = (0..choices)
        .map(|i| {
            Choice::new()
                .with_trait("openness", (i % 7) as f64 - 3.0)
                .with_trait("extraversion", (i % 5) as f64 - 2.0)
                .with_stat("energy", -(i as f64))
        })
        .collect();
    LifeEvent::new("bench_event", options).infant_eligible(true)
}

fn bench_resolve(c: &mut Criterion) {
    let engine = DecisionEngine::new(
        0xBE7C,
        BrainConfig {
            infant_model_enabled: true,
            ..BrainConfig::default()
        },
    );
    let event = event(8);

    let adult = AgentSnapshot::new(1, 360).with_personality(Personality {
        openness: 70.0,
        ..Personality::default()
    });
    let mut month: u32 = 0;
    c.bench_function("psyche-brain/engine.resolve(generic, choices=8)", |b| {
        b.iter(|| {
            let d = engine.resolve(black_box(&adult), &event, month);
            black_box(d.ok());
            month = month.wrapping_add(1);
        })
    });

    let baby = AgentSnapshot::new(2, 6).with_temperament(Temperament::default());
    let mut month: u32 = 0;
    c.bench_function("psyche-brain/engine.resolve(infant, choices=8)", |b| {
        b.iter(|| {
            let d = engine.resolve(black_box(&baby), &event, month);
            black_box(d.ok());
            month = month.wrapping_add(1);
        })
    });

    let multi = event.clone().with_selection(2, 4);
    c.bench_function("psyche-brain/engine.resolve(generic, multi=2..4)", |b| {
        b.iter(|| black_box(engine.resolve(black_box(&adult), &multi, 0).ok()))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
