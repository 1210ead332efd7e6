use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duel_counter::core::{Detached, ScoreState, Session};
use duel_counter::term::{encode_diff_into, FrameBuffer, ScoreView, Viewport};
use duel_counter::types::{CounterAction, Player};

fn bench_apply_score(c: &mut Criterion) {
    let mut state = ScoreState::new();
    state.start_game();

    c.bench_function("apply_score_plus_minus", |b| {
        b.iter(|| {
            state.apply_score(Player::Red, black_box(1));
            state.apply_score(Player::Red, black_box(-1));
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_20_steps", |b| {
        b.iter(|| {
            let mut session = Session::new(ScoreState::new(), Detached);
            session.apply_action(CounterAction::StartGame);
            for _ in 0..20 {
                session.apply_action(black_box(CounterAction::Minus(Player::Blue)));
            }
            session.snapshot()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = ScoreView::new();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut state = ScoreState::new();
    state.start_game();
    let snap = state.snapshot();

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

fn bench_diff_encode(c: &mut Criterion) {
    let view = ScoreView::new();
    let viewport = Viewport::new(80, 24);
    let mut state = ScoreState::new();
    state.start_game();
    let before = view.render(&state.snapshot(), viewport);
    state.apply_score(Player::Blue, -1);
    let after = view.render(&state.snapshot(), viewport);
    let mut out = Vec::with_capacity(4096);

    c.bench_function("encode_diff_one_score_change", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&before), black_box(&after), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_apply_score,
    bench_full_game,
    bench_render,
    bench_diff_encode
);
criterion_main!(benches);
