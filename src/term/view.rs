//! Scene rendering into styled spans.
//!
//! Pure layout code: the view turns a `Scene` plus cursor into lines of
//! `Span`s and the renderer flushes them. The main grid sits framed in the
//! middle, with the four side queues laid out along their edges.

use crossterm::style::Color;

use crate::core::Scene;
use crate::term::input::Cursor;
use crate::types::{GameStatus, Side, SquareKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Option<Color>,
    pub bold: bool,
    pub reversed: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
            reversed: false,
        }
    }

    fn square(kind: SquareKind, selected: bool) -> Self {
        Self {
            text: "■ ".to_string(),
            fg: Some(kind_color(kind)),
            bold: selected,
            reversed: selected,
        }
    }

    fn cell(kind: Option<SquareKind>, flash: bool) -> Self {
        match kind {
            Some(kind) => Self {
                text: "■ ".to_string(),
                fg: Some(kind_color(kind)),
                bold: flash,
                reversed: flash,
            },
            None => Self {
                text: "· ".to_string(),
                fg: Some(Color::DarkGrey),
                bold: false,
                reversed: false,
            },
        }
    }
}

pub fn kind_color(kind: SquareKind) -> Color {
    match kind {
        SquareKind::Red => Color::Red,
        SquareKind::Orange => Color::DarkYellow,
        SquareKind::Yellow => Color::Yellow,
        SquareKind::Green => Color::Green,
        SquareKind::Blue => Color::Blue,
        SquareKind::Violet => Color::Magenta,
    }
}

/// Render the whole screen as lines of spans.
pub fn render(scene: &Scene, cursor: &Cursor, message: &str) -> Vec<Vec<Span>> {
    let dim = scene.settings().horz_dimension;
    let side_len = scene.settings().side_dimension;
    let flash = scene.moving_square().map(|m| m.target);

    let mut lines: Vec<Vec<Span>> = Vec::new();

    lines.push(vec![
        Span::plain("tui-bricks   score "),
        Span {
            text: scene.score().to_string(),
            fg: Some(Color::Cyan),
            bold: true,
            reversed: false,
        },
        Span::plain(format!("   [{}]", status_label(scene.status()))),
    ]);
    lines.push(Vec::new());

    lines.push(queue_line(scene, cursor, Side::Top, side_len));
    lines.push(vec![Span::plain(frame_line(dim))]);

    for row in 0..dim {
        let mut line = Vec::new();
        line.push(edge_slot(scene, cursor, Side::Left, row, side_len));
        line.push(Span::plain("|"));
        for col in 0..dim {
            let kind = scene.main_field()[(row, col)];
            line.push(Span::cell(kind, flash == Some((row, col))));
        }
        line.push(Span::plain("|"));
        line.push(edge_slot(scene, cursor, Side::Right, row, side_len));
        lines.push(line);
    }

    lines.push(vec![Span::plain(frame_line(dim))]);
    lines.push(queue_line(scene, cursor, Side::Bottom, side_len));

    lines.push(Vec::new());
    lines.push(vec![Span::plain(message.to_string())]);
    lines.push(vec![Span::plain(
        "arrows: slot/side   enter: throw   u: undo   r: restart   q: quit",
    )]);

    lines
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "playing",
        GameStatus::GameOver => "GAME OVER - r to restart",
        GameStatus::Won => "YOU WON - r to restart",
    }
}

fn frame_line(dim: usize) -> String {
    format!("  +{}+", "-".repeat(dim * 2))
}

fn queue_line(scene: &Scene, cursor: &Cursor, side: Side, side_len: usize) -> Vec<Span> {
    let mut line = vec![Span::plain("   ")];
    for (slot, &kind) in scene.side_matrix(side).iter().enumerate().take(side_len) {
        let selected = cursor.side == side && cursor.slot == slot;
        line.push(Span::square(kind, selected));
    }
    line
}

fn edge_slot(scene: &Scene, cursor: &Cursor, side: Side, row: usize, side_len: usize) -> Span {
    if row >= side_len {
        return Span::plain("  ");
    }
    let kind = scene.side_matrix(side)[row];
    let selected = cursor.side == side && cursor.slot == row;
    Span::square(kind, selected)
}
