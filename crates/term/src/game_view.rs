//! GameView: maps the screen state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the game panel, then (when toggled on and there is
//! room) the leaderboard panel. On narrow terminals the leaderboard is drawn
//! over the game panel instead. The name prompt and confetti are overlays.

use crate::confetti::Confetti;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::screen::Screen;
use crate::types::{InputMode, MessageKind, GUESS_MAX, GUESS_MIN, LEADERBOARD_MAX};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    pub screen: &'a Screen,
    /// Text in the guess line.
    pub guess_input: &'a str,
    /// Text in the name prompt.
    pub name_input: &'a str,
    pub mode: InputMode,
    pub show_leaderboard: bool,
    pub confetti: Option<&'a Confetti>,
}

impl<'a> ViewModel<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self {
            screen,
            guess_input: "",
            name_input: "",
            mode: InputMode::Guess,
            show_leaderboard: false,
            confetti: None,
        }
    }
}

/// Game panel size (including border).
pub const PANEL_W: u16 = 40;
pub const PANEL_H: u16 = 18;
/// Leaderboard panel size (including border).
pub const BOARD_W: u16 = 38;
pub const BOARD_H: u16 = LEADERBOARD_MAX as u16 + 3;

/// Rows used for the guess history inside the game panel.
const HISTORY_ROWS: usize = 3;

const TEXT: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(20, 20, 30),
    bold: false,
    dim: false,
};
const BORDER: CellStyle = TEXT.with_fg(Rgb::new(200, 200, 200));
const LABEL: CellStyle = TEXT.with_fg(Rgb::new(140, 140, 160));
const TITLE: CellStyle = TEXT.with_fg(Rgb::new(80, 220, 220)).bold();
const INPUT: CellStyle = TEXT.with_fg(Rgb::new(255, 255, 255)).bold();
const CORRECT: CellStyle = TEXT.with_fg(Rgb::new(100, 220, 120)).bold();
const INCORRECT: CellStyle = TEXT.with_fg(Rgb::new(220, 80, 80));
const HIGHLIGHT: CellStyle = TEXT.with_fg(Rgb::new(240, 220, 80)).bold();

/// A lightweight terminal renderer for the guessing game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, model: &ViewModel<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let side_by_side =
            model.show_leaderboard && viewport.width >= PANEL_W + 1 + BOARD_W;
        let total_w = if side_by_side {
            PANEL_W + 1 + BOARD_W
        } else {
            PANEL_W
        };
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(PANEL_H) / 2,
            AnchorY::Top => 0,
        };

        self.draw_game_panel(fb, model, start_x, start_y);

        if model.show_leaderboard {
            let (bx, by) = if side_by_side {
                (start_x + PANEL_W + 1, start_y)
            } else {
                (
                    viewport.width.saturating_sub(BOARD_W) / 2,
                    start_y + PANEL_H.saturating_sub(BOARD_H) / 2,
                )
            };
            self.draw_leaderboard(fb, model.screen, bx, by);
        }

        if model.mode == InputMode::Name {
            self.draw_name_prompt(fb, model.name_input, start_x, start_y);
        }

        if let Some(confetti) = model.confetti {
            confetti.draw(fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, model: &ViewModel<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, viewport, &mut fb);
        fb
    }

    fn draw_game_panel(&self, fb: &mut FrameBuffer, model: &ViewModel<'_>, x: u16, y: u16) {
        let screen = model.screen;
        let inner_x = x + 2;
        let inner_w = PANEL_W - 4;

        fb.fill_rect(x, y, PANEL_W, PANEL_H, ' ', TEXT);
        fb.draw_box(x, y, PANEL_W, PANEL_H, BORDER);
        fb.put_str_centered(x, y, PANEL_W, " Guess the Number ", TITLE);

        let mut row = y + 2;
        fb.put_str_clipped(
            inner_x,
            row,
            &format!("Guess a number between {} and {}.", GUESS_MIN, GUESS_MAX),
            inner_w,
            TEXT,
        );

        row += 2;
        if screen.input_enabled() {
            let n = fb.put_str(inner_x, row, "Your guess: ", LABEL);
            let caret = if model.mode == InputMode::Guess { "_" } else { "" };
            fb.put_str(
                inner_x + n,
                row,
                &format!("{}{}", model.guess_input, caret),
                INPUT,
            );
        } else {
            fb.put_str_clipped(inner_x, row, "Press N to play again.", inner_w, LABEL);
        }

        row += 2;
        let (message, kind) = screen.message();
        let style = match kind {
            MessageKind::Neutral => TEXT,
            MessageKind::Correct => CORRECT,
            MessageKind::Incorrect => INCORRECT,
        };
        for (i, line) in wrap_words(message, inner_w as usize).iter().take(2).enumerate() {
            fb.put_str_clipped(inner_x, row + i as u16, line, inner_w, style);
        }

        row += 3;
        let n = fb.put_str(inner_x, row, "Attempts: ", LABEL);
        fb.put_str(inner_x + n, row, &screen.attempts().to_string(), TEXT);
        let best = match screen.best() {
            Some(best) => best.to_string(),
            None => "-".to_string(),
        };
        let best_label = format!("Best: {}", best);
        let bx = inner_x + inner_w.saturating_sub(best_label.chars().count() as u16);
        let n = fb.put_str(bx, row, "Best: ", LABEL);
        fb.put_str(bx + n, row, &best, TEXT);

        row += 2;
        fb.put_str(inner_x, row, "Previous guesses:", LABEL);
        row += 1;
        for (i, line) in history_lines(screen.history(), inner_w as usize, HISTORY_ROWS)
            .iter()
            .enumerate()
        {
            fb.put_str_clipped(inner_x, row + i as u16, line, inner_w, TEXT);
        }

        let help_row = y + PANEL_H - 2;
        match screen.notice() {
            Some(notice) => fb.put_str_clipped(inner_x, help_row, notice, inner_w, INCORRECT),
            None => fb.put_str_clipped(
                inner_x,
                help_row,
                "Enter guess  N new  Tab scores  Esc quit",
                inner_w,
                LABEL.dim(),
            ),
        }
    }

    fn draw_leaderboard(&self, fb: &mut FrameBuffer, screen: &Screen, x: u16, y: u16) {
        let inner_x = x + 2;
        let inner_w = BOARD_W - 4;

        fb.fill_rect(x, y, BOARD_W, BOARD_H, ' ', TEXT);
        fb.draw_box(x, y, BOARD_W, BOARD_H, BORDER);
        fb.put_str_centered(x, y, BOARD_W, " Leaderboard ", TITLE);

        fb.put_str_clipped(
            inner_x,
            y + 1,
            &format!("{:>2} {:<14} {:>5} {:<10}", "#", "Name", "Tries", "Date"),
            inner_w,
            LABEL,
        );

        let entries = screen.leaderboard();
        if entries.is_empty() {
            fb.put_str_clipped(inner_x, y + 2, "No scores yet.", inner_w, LABEL.dim());
            return;
        }

        for (i, entry) in entries.iter().take(LEADERBOARD_MAX).enumerate() {
            let name: String = entry.name.chars().take(14).collect();
            let line = format!(
                "{:>2} {:<14} {:>5} {}",
                i + 1,
                name,
                entry.score,
                entry.date.format("%Y-%m-%d")
            );
            let style = if screen.highlight() == Some(i) {
                HIGHLIGHT
            } else {
                TEXT
            };
            fb.put_str_clipped(inner_x, y + 2 + i as u16, &line, inner_w, style);
        }
    }

    fn draw_name_prompt(&self, fb: &mut FrameBuffer, name: &str, panel_x: u16, panel_y: u16) {
        let w = PANEL_W - 4;
        let h = 6;
        let x = panel_x + 2;
        let y = panel_y + (PANEL_H - h) / 2;

        fb.fill_rect(x, y, w, h, ' ', TEXT);
        fb.draw_box(x, y, w, h, HIGHLIGHT);
        fb.put_str_centered(x, y + 1, w, "New high score!", HIGHLIGHT);
        let n = fb.put_str(x + 2, y + 2, "Name: ", LABEL);
        fb.put_str(x + 2 + n, y + 2, &format!("{}_", name), INPUT);
        fb.put_str_centered(x, y + 4, w, "Enter save  Esc skip", LABEL.dim());
    }
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let line_len = line.chars().count();
        if !line.is_empty() && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Guess history laid out in at most `rows` lines, keeping the newest guesses
/// when they do not all fit.
fn history_lines(history: &[u8], width: usize, rows: usize) -> Vec<String> {
    let all = wrap_words(
        &history
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        width,
    );
    let skip = all.len().saturating_sub(rows);
    all.into_iter().skip(skip).collect()
}
