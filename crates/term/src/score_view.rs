//! ScoreView: maps a `core::ScoreSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout is computed once per viewport and
//! shared by rendering and mouse hit testing, so a click always lands on the
//! button that was drawn there.

use crate::core::{Phase, ScoreSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CounterAction, Player};

/// Player panel size in terminal cells.
pub const PANEL_W: u16 = 20;
pub const PANEL_H: u16 = 9;
/// Horizontal gap between the two panels.
pub const PANEL_GAP: u16 = 4;

const BUTTON_W: u16 = 5;
const TITLE: &str = "Magic The Gather Game Counter";
const WINS_SUFFIX: &str = " Wins";
const START_LABEL: &str = "[ Start Game ]";
const HELP_TEXT: &str = "w/s red  ↑/↓ blue  enter start  q quit";

/// Smallest viewport that fits the whole counter.
pub const MIN_WIDTH: u16 = PANEL_W * 2 + PANEL_GAP;
pub const MIN_HEIGHT: u16 = PANEL_H + 6;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.w && y - self.y < self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub player: Player,
    pub frame: Rect,
    pub plus: Rect,
    pub minus: Rect,
}

impl PanelLayout {
    fn new(player: Player, x: u16, y: u16) -> Self {
        let button_y = y + 5;
        Self {
            player,
            frame: Rect::new(x, y, PANEL_W, PANEL_H),
            plus: Rect::new(x + 3, button_y, BUTTON_W, 1),
            minus: Rect::new(x + PANEL_W - 3 - BUTTON_W, button_y, BUTTON_W, 1),
        }
    }
}

/// Where everything goes for one viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLayout {
    pub title_y: u16,
    pub red: PanelLayout,
    pub blue: PanelLayout,
    pub start_button: Rect,
    pub status_y: u16,
    pub help_y: u16,
    pub origin_x: u16,
}

impl ScoreLayout {
    pub fn panel(&self, player: Player) -> &PanelLayout {
        match player {
            Player::Red => &self.red,
            Player::Blue => &self.blue,
        }
    }
}

/// Renders the two player panels and the shared controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreView;

impl ScoreView {
    pub fn new() -> Self {
        Self
    }

    /// Compute the layout for `viewport`, centered.
    ///
    /// Returns `None` when the viewport is smaller than [`MIN_WIDTH`] x [`MIN_HEIGHT`].
    pub fn layout(&self, viewport: Viewport) -> Option<ScoreLayout> {
        if viewport.width < MIN_WIDTH || viewport.height < MIN_HEIGHT {
            return None;
        }

        let x = (viewport.width - MIN_WIDTH) / 2;
        let y = (viewport.height - MIN_HEIGHT) / 2;

        let panels_y = y + 1;

        let start_w = START_LABEL.chars().count() as u16;
        Some(ScoreLayout {
            title_y: y,
            red: PanelLayout::new(Player::Red, x, panels_y),
            blue: PanelLayout::new(Player::Blue, x + PANEL_W + PANEL_GAP, panels_y),
            start_button: Rect::new(
                x + (MIN_WIDTH - start_w) / 2,
                panels_y + PANEL_H + 1,
                start_w,
                1,
            ),
            status_y: panels_y + PANEL_H + 3,
            help_y: panels_y + PANEL_H + 4,
            origin_x: x,
        })
    }

    /// Map a click at `(x, y)` to the action of the button under it.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<CounterAction> {
        let layout = self.layout(viewport)?;
        if layout.start_button.contains(x, y) {
            return Some(CounterAction::StartGame);
        }
        Player::ALL.into_iter().find_map(|player| {
            let panel = layout.panel(player);
            if panel.plus.contains(x, y) {
                Some(CounterAction::Plus(player))
            } else if panel.minus.contains(x, y) {
                Some(CounterAction::Minus(player))
            } else {
                None
            }
        })
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, snap: &ScoreSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let Some(layout) = self.layout(viewport) else {
            self.draw_too_small(fb, viewport);
            return;
        };

        fb.put_str_centered(
            layout.origin_x,
            layout.title_y,
            MIN_WIDTH,
            TITLE,
            CellStyle::default().bold(),
        );

        for player in Player::ALL {
            self.draw_panel(fb, snap, layout.panel(player));
        }

        let start = layout.start_button;
        let start_style = if snap.phase() == Phase::Playing {
            CellStyle::default()
        } else {
            CellStyle::fg(Rgb::GOLD).bold()
        };
        fb.put_str(start.x, start.y, START_LABEL, start_style);

        let (status, status_style) = match snap.phase() {
            Phase::Idle => ("Press Start Game", CellStyle::default().dim()),
            Phase::Playing => ("Playing", CellStyle::default()),
            Phase::RedWon => ("Red Wins", CellStyle::fg(Rgb::RED).bold()),
            Phase::BlueWon => ("Blue Wins", CellStyle::fg(Rgb::BLUE).bold()),
        };
        fb.put_str_centered(
            layout.origin_x,
            layout.status_y,
            MIN_WIDTH,
            status,
            status_style,
        );
        fb.put_str_centered(
            layout.origin_x,
            layout.help_y,
            MIN_WIDTH,
            HELP_TEXT,
            CellStyle::default().dim(),
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ScoreSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &ScoreSnapshot, panel: &PanelLayout) {
        let player = panel.player;
        let color = player_color(player);
        let frame = panel.frame;

        fb.draw_box(frame.x, frame.y, frame.w, frame.h, CellStyle::fg(color));
        let name = CellStyle::fg(color).bold();
        fb.put_str_centered(frame.x, frame.y + 1, frame.w, player.name(), name);

        let points = snap.points(player);
        let points_w = FrameBuffer::i32_width(points);
        let points_x = frame.x + frame.w.saturating_sub(points_w) / 2;
        fb.put_i32(points_x, frame.y + 3, points, CellStyle::default().bold());

        let button = if snap.scoring_enabled() {
            CellStyle::fg(color)
        } else {
            CellStyle::fg(color).dim()
        };
        fb.put_str(panel.plus.x, panel.plus.y, "[ + ]", button);
        fb.put_str(panel.minus.x, panel.minus.y, "[ - ]", button);

        if snap.won(player) {
            // Gold bar across the panel interior.
            let banner = CellStyle::fg(Rgb::BLACK).on(Rgb::GOLD).bold();
            let banner_y = frame.y + 7;
            fb.fill_rect(frame.x + 1, banner_y, frame.w - 2, 1, ' ', banner);

            let name_w = player.name().chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(name_w + WINS_SUFFIX.len() as u16) / 2;
            fb.put_str(x, banner_y, player.name(), banner);
            fb.put_str(x + name_w, banner_y, WINS_SUFFIX, banner);
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let y = viewport.height / 2;
        let style = CellStyle::default().bold();
        fb.put_str_centered(0, y, viewport.width, "terminal too small", style);
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::Red => Rgb::RED,
        Player::Blue => Rgb::BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 5, 1);
        assert!(r.contains(2, 3));
        assert!(r.contains(6, 3));
        assert!(!r.contains(7, 3));
        assert!(!r.contains(1, 3));
        assert!(!r.contains(2, 4));
    }

    #[test]
    fn layout_is_centered() {
        let view = ScoreView::new();
        let layout = view.layout(Viewport::new(MIN_WIDTH + 10, MIN_HEIGHT + 4)).unwrap();
        assert_eq!(layout.red.frame.x, 5);
        assert_eq!(layout.title_y, 2);
        assert_eq!(layout.red.frame.y, 3);
        assert_eq!(layout.blue.frame.x, 5 + PANEL_W + PANEL_GAP);
    }

    #[test]
    fn rows_stack_inside_minimum_height() {
        let layout = ScoreView::new()
            .layout(Viewport::new(MIN_WIDTH, MIN_HEIGHT))
            .unwrap();
        assert_eq!(layout.title_y, 0);
        assert_eq!(layout.red.frame.y, layout.title_y + 1);
        assert!(layout.start_button.y >= layout.red.frame.y + PANEL_H);
        assert!(layout.status_y > layout.start_button.y);
        assert_eq!(layout.help_y, MIN_HEIGHT - 1);
    }

    #[test]
    fn layout_requires_minimum_size() {
        let view = ScoreView::new();
        assert!(view.layout(Viewport::new(MIN_WIDTH - 1, MIN_HEIGHT)).is_none());
        assert!(view.layout(Viewport::new(MIN_WIDTH, MIN_HEIGHT - 1)).is_none());
        assert!(view.layout(Viewport::new(MIN_WIDTH, MIN_HEIGHT)).is_some());
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = ScoreView::new()
            .layout(Viewport::new(MIN_WIDTH, MIN_HEIGHT))
            .unwrap();
        for player in Player::ALL {
            let p = layout.panel(player);
            assert!(p.plus.x + p.plus.w <= p.minus.x);
            assert!(p.frame.contains(p.plus.x, p.plus.y));
            assert!(p.frame.contains(p.minus.x + p.minus.w - 1, p.minus.y));
        }
    }
}
