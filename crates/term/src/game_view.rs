//! GameView: maps the score and round history into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Score;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::history::{RoundHistory, RoundRecord};
use crate::types::{Choice, Outcome};

const BG: Rgb = Rgb::new(38, 50, 56);
const TEXT: Rgb = Rgb::new(236, 239, 241);
const BORDER: Rgb = Rgb::new(120, 144, 156);
const HISTORY: Rgb = Rgb::new(207, 216, 220);
const MUTED: Rgb = Rgb::new(144, 164, 174);

const TITLE: &str = " Rock Paper Scissors ";
const HELP: &str = "1-3 / r s p  play   c reset   q quit";
const EMPTY_HISTORY: &str = "No rounds yet";

/// Rows drawn besides the history entries (borders, score, result, choices,
/// history label, help line, spacers).
const FIXED_ROWS: u16 = 12;

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

/// Everything the view needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct TableSnapshot<'a> {
    pub score: Score,
    pub history: &'a RoundHistory,
}

impl<'a> TableSnapshot<'a> {
    pub fn new(score: Score, history: &'a RoundHistory) -> Self {
        Self { score, history }
    }

    /// The round shown in the result panel.
    pub fn last(&self) -> Option<&'a RoundRecord> {
        self.history.latest()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game table.
pub struct GameView {
    /// Outer panel width in terminal columns, borders included.
    panel_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            panel_w: 44,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(panel_w: u16) -> Self {
        Self {
            panel_w: panel_w.max(HELP.len() as u16 + 2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn panel_width(&self) -> u16 {
        self.panel_w
    }

    /// Panel height for a history log of the given capacity.
    pub fn panel_height(&self, history_capacity: usize) -> u16 {
        FIXED_ROWS.saturating_add(u16::try_from(history_capacity).unwrap_or(u16::MAX))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &TableSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = self.panel_w;
        let frame_h = self.panel_height(snap.history.capacity());
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(BORDER, BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        fb.put_str_centered(start_x, start_y, frame_w, TITLE, border.with_fg(TEXT).bold());

        let inner_x = start_x + 1;
        let inner_w = frame_w.saturating_sub(2);
        let mut y = start_y + 1;

        self.draw_scoreboard(fb, inner_x, y, inner_w, snap.score);
        y += 2;

        self.draw_result(fb, inner_x, y, inner_w, snap.last());
        y += 3;

        self.draw_choices(fb, inner_x, y, inner_w, snap.last());
        y += 2;

        y = self.draw_history(fb, inner_x + 1, y, snap.history);
        y += 1;

        fb.put_str_centered(inner_x, y, inner_w, HELP, CellStyle::new(MUTED, BG).dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &TableSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_scoreboard(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, score: Score) {
        let label = CellStyle::new(MUTED, BG);
        let value = CellStyle::new(TEXT, BG).bold();

        let columns = [
            ("You ", score.player_wins),
            ("Computer ", score.computer_wins),
            ("Ties ", score.ties),
        ];
        let col_w = w / columns.len() as u16;
        for (i, (name, n)) in columns.iter().enumerate() {
            let len = name.len() as u16 + digit_count(*n);
            let cx = x + col_w * i as u16 + col_w.saturating_sub(len) / 2;
            let cx = fb.put_str(cx, y, name, label);
            fb.put_u64(cx, y, *n, value);
        }
    }

    fn draw_result(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, last: Option<&RoundRecord>) {
        let Some(round) = last else {
            let idle = CellStyle::new(TEXT, BG).bold();
            fb.put_str_centered(x, y, w, "VS", idle);
            fb.put_str_centered(x, y + 1, w, "Pick a move", CellStyle::new(MUTED, BG));
            return;
        };

        let moves = CellStyle::new(TEXT, BG).bold();
        let player = round.player.label();
        let computer = round.computer.label();
        let len = (player.len() + computer.len() + 6) as u16;
        let cx = x + w.saturating_sub(len) / 2;
        let cx = fb.put_str(cx, y, player, moves);
        let cx = fb.put_str(cx, y, "  vs  ", CellStyle::new(MUTED, BG));
        fb.put_str(cx, y, computer, moves);

        let verdict = CellStyle::new(outcome_color(round.outcome), BG).bold();
        fb.put_str_centered(x, y + 1, w, round.outcome.message(), verdict);
    }

    fn draw_choices(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, last: Option<&RoundRecord>) {
        const GAP: u16 = 2;

        // "[n] Label" per choice.
        let total: u16 = Choice::ALL
            .iter()
            .map(|c| c.label().len() as u16 + 4)
            .sum::<u16>()
            + GAP * (Choice::ALL.len() as u16 - 1);

        let normal = CellStyle::new(TEXT, BG);
        let key = CellStyle::new(MUTED, BG);
        let mut cx = x + w.saturating_sub(total) / 2;
        for (i, choice) in Choice::ALL.iter().enumerate() {
            let picked = last.filter(|r| r.player == *choice);
            let style = match picked {
                Some(r) => normal.with_fg(outcome_color(r.outcome)).bold(),
                None => normal,
            };
            fb.put_char(cx, y, '[', key);
            fb.put_char(cx + 1, y, (b'1' + i as u8) as char, key);
            fb.put_char(cx + 2, y, ']', key);
            cx = fb.put_str(cx + 4, y, choice.label(), style) + GAP;
        }
    }

    /// Returns the row after the last history line.
    fn draw_history(&self, fb: &mut FrameBuffer, x: u16, y: u16, history: &RoundHistory) -> u16 {
        fb.put_str(x, y, "HISTORY", CellStyle::new(TEXT, BG).bold());
        let top = y.saturating_add(1);

        if history.is_empty() {
            fb.put_str(x, top, EMPTY_HISTORY, CellStyle::new(MUTED, BG).dim());
        } else {
            let style = CellStyle::new(HISTORY, BG);
            for (i, round) in history.iter().enumerate() {
                let row = top.saturating_add(u16::try_from(i).unwrap_or(u16::MAX));
                fb.put_str(x, row, &round.describe(), style);
            }
        }

        top.saturating_add(u16::try_from(history.capacity()).unwrap_or(u16::MAX))
    }
}

/// Result banner colors: green, red, amber.
pub fn outcome_color(outcome: Outcome) -> Rgb {
    match outcome {
        Outcome::Win => Rgb::new(200, 230, 201),
        Outcome::Lose => Rgb::new(255, 205, 210),
        Outcome::Tie => Rgb::new(255, 224, 130),
    }
}

fn digit_count(mut n: u64) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_handles_edges() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn panel_height_grows_with_history() {
        let view = GameView::default();
        assert_eq!(view.panel_height(3), FIXED_ROWS + 3);
        assert_eq!(view.panel_height(5), FIXED_ROWS + 5);
        assert_eq!(view.panel_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn largest_history_renders_in_small_viewport() {
        let mut history = RoundHistory::new(usize::MAX);
        history.push(RoundRecord {
            player: Choice::Rock,
            computer: Choice::Scissors,
            outcome: Outcome::Win,
        });
        let snap = TableSnapshot::new(Score::default(), &history);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!((0..fb.height()).any(|y| fb.row_text(y).contains("You Rock - Scissors (win)")));
    }

    #[test]
    fn narrow_panels_still_fit_help_line() {
        assert!(GameView::new(10).panel_width() as usize >= HELP.len() + 2);
    }
}
