//! Integration tests for the input -> session -> view path

use crossterm::event::{KeyCode, KeyEvent};

use duel_counter::core::{Phase, ScoreObserver, ScoreSnapshot, ScoreState, Session};
use duel_counter::input::handle_key_event;
use duel_counter::term::{ScoreView, Viewport};
use duel_counter::types::Player;

#[derive(Default)]
struct Renders {
    frames: usize,
    last: Option<ScoreSnapshot>,
}

impl ScoreObserver for Renders {
    fn state_changed(&mut self, snap: &ScoreSnapshot) {
        self.frames += 1;
        self.last = Some(*snap);
    }
}

fn press(session: &mut Session<Renders>, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => session.apply_action(action),
        None => false,
    }
}

#[test]
fn keyboard_game_lifecycle() {
    let mut session = Session::new(ScoreState::new(), Renders::default());

    // Scoring keys do nothing before the game starts.
    assert!(!press(&mut session, KeyCode::Char('w')));
    assert!(!press(&mut session, KeyCode::Down));
    assert_eq!(session.observer().frames, 0);

    assert!(press(&mut session, KeyCode::Enter));
    assert_eq!(session.state().phase(), Phase::Playing);

    assert!(press(&mut session, KeyCode::Char('w')));
    assert_eq!(session.state().points(Player::Red), 21);

    for _ in 0..20 {
        press(&mut session, KeyCode::Down);
    }
    assert_eq!(session.state().points(Player::Blue), 0);
    assert_eq!(session.state().phase(), Phase::RedWon);

    // Frozen: no further notifications.
    let frames = session.observer().frames;
    assert!(!press(&mut session, KeyCode::Char('s')));
    assert!(!press(&mut session, KeyCode::Up));
    assert_eq!(session.observer().frames, frames);

    assert!(press(&mut session, KeyCode::Char('r')));
    let last = session.observer().last.unwrap();
    assert_eq!(last.phase(), Phase::Playing);
    assert_eq!((last.red_points, last.blue_points), (20, 20));
}

#[test]
fn mouse_clicks_drive_the_session() {
    let view = ScoreView::new();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(vp).unwrap();
    let mut session = Session::new(ScoreState::new(), Renders::default());

    let mut click = |x: u16, y: u16| {
        let action = view.hit_test(vp, x, y).expect("click should hit a button");
        session.apply_action(action)
    };

    let start = layout.start_button;
    assert!(click(start.x, start.y));

    let red_minus = layout.red.minus;
    for _ in 0..20 {
        assert!(click(red_minus.x, red_minus.y));
    }
    assert!(!click(red_minus.x, red_minus.y));

    let snap = session.snapshot();
    assert_eq!(snap.winner(), Some(Player::Blue));
    assert_eq!(snap.red_points, 0);
    assert_eq!(session.observer().frames, 21);

    let fb = view.render(&snap, vp);
    let mut text = String::new();
    for y in 0..fb.height() {
        text.push_str(&fb.row_text(y));
    }
    assert!(text.contains("Blue Wins"));
}
