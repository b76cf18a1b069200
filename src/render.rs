use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::grid::Point;
use crate::session::Snapshot;

/// Terminal columns per grid cell; keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

const CONTROLS: &str = "arrows / wasd / hjkl move | space pause | q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

impl CellKind {
    fn ascii(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Head => '@',
            Self::Body => 'o',
            Self::Food => '*',
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Self::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
            Self::Head => Span::styled(
                "██",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Self::Body => Span::styled("▓▓", Style::default().fg(Color::Green)),
            Self::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        }
    }
}

/// Rasterize the snapshot into row-major cells. The head wins over food on
/// the frame it lands there.
pub fn rasterize(snap: &Snapshot) -> Vec<Vec<CellKind>> {
    let side = snap.grid_size.max(0) as usize;
    let mut cells = vec![vec![CellKind::Empty; side]; side];
    let mut put = |p: Point, kind| {
        if (0..snap.grid_size).contains(&p.x) && (0..snap.grid_size).contains(&p.y) {
            cells[p.y as usize][p.x as usize] = kind;
        }
    };
    if let Some(food) = snap.food {
        put(food, CellKind::Food);
    }
    for &p in snap.body.iter().skip(1) {
        put(p, CellKind::Body);
    }
    if let Some(head) = snap.head() {
        put(head, CellKind::Head);
    }
    cells
}

/// Print the board in simple ascii
pub fn board_to_str(snap: &Snapshot) -> String {
    rasterize(snap)
        .into_iter()
        .map(|row| row.into_iter().map(CellKind::ascii).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn status_text(snap: &Snapshot) -> &'static str {
    if snap.won {
        "YOU WIN! (r to restart, q to quit)"
    } else if snap.game_over {
        "GAME OVER (r to restart, q to quit)"
    } else if snap.paused {
        "PAUSED"
    } else {
        "running"
    }
}

/// Outer size of the bordered board in terminal cells, saturating at `u16::MAX`.
fn board_size(snap: &Snapshot) -> (u16, u16) {
    // Paragraph area is exactly the board; Block adds a 1-char border around it.
    let side = u16::try_from(snap.grid_size.max(0)).unwrap_or(u16::MAX);
    (
        side.saturating_mul(CELL_WIDTH).saturating_add(2),
        side.saturating_add(2),
    )
}

/// Draw the board centered in the frame, scores in the title and the status
/// (or the controls while running) underneath.
pub fn draw(f: &mut Frame, snap: &Snapshot) {
    let area = f.area();

    let title = format!(" score: {}  best: {} ", snap.score, snap.high_score);

    let lines: Vec<Line> = rasterize(snap)
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(CellKind::span).collect::<Vec<_>>()))
        .collect();

    let (outer_w, outer_h) = board_size(snap);

    let x = area.x.saturating_add(area.width.saturating_sub(outer_w) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(outer_h + 1) / 2);
    let board_area = Rect::new(x, y, outer_w.min(area.width), outer_h.min(area.height));

    let border = if snap.game_over {
        Color::Red
    } else if snap.paused {
        Color::Yellow
    } else {
        Color::White
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::from(title).bold());
    f.render_widget(Paragraph::new(lines).block(block), board_area);

    let footer_y = board_area.y.saturating_add(board_area.height);
    if footer_y < area.y.saturating_add(area.height) {
        let footer = Rect::new(area.x, footer_y, area.width, 1);
        let text = if snap.game_over || snap.paused {
            Line::from(status_text(snap).fg(border).bold())
        } else {
            Line::from(CONTROLS.fg(Color::Gray))
        };
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), footer);
    }
}
