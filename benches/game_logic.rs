use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_rps::core::{rules, GameEngine, ScriptedSource};
use tui_rps::term::{GameView, RoundHistory, RoundRecord, TableSnapshot, Viewport, FrameBuffer};
use tui_rps::types::Choice;

fn bench_judge(c: &mut Criterion) {
    let mut engine = GameEngine::new(ScriptedSource::constant(Choice::Rock));

    c.bench_function("judge", |b| {
        b.iter(|| engine.judge(black_box(Choice::Paper), black_box(Choice::Scissors)))
    });
}

fn bench_outcome_table(c: &mut Criterion) {
    c.bench_function("rules_outcome_all_pairs", |b| {
        b.iter(|| {
            for p in Choice::ALL {
                for q in Choice::ALL {
                    black_box(rules::outcome(black_box(p), black_box(q)));
                }
            }
        })
    });
}

fn bench_opponent_choice(c: &mut Criterion) {
    let mut engine = GameEngine::seeded(12345);

    c.bench_function("generate_opponent_choice", |b| {
        b.iter(|| engine.generate_opponent_choice())
    });
}

fn bench_play_round(c: &mut Criterion) {
    let mut engine = GameEngine::seeded(12345);

    c.bench_function("play_round", |b| {
        b.iter(|| engine.play_round(black_box(Choice::Rock)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut engine = GameEngine::seeded(12345);
    let mut history = RoundHistory::default();
    for choice in Choice::ALL {
        let round = engine.play_round(choice);
        history.push(RoundRecord {
            player: choice,
            computer: round.computer,
            outcome: round.outcome,
        });
    }
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_table_80x24", |b| {
        b.iter(|| {
            let snap = TableSnapshot::new(engine.current_score(), &history);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_judge,
    bench_outcome_table,
    bench_opponent_choice,
    bench_play_round,
    bench_render
);
criterion_main!(benches);
