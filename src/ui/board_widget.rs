use crate::game::{Cell, GameState, Position, BOARD_SIZE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 3;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 1;

const BOARD_BG: Color = Color::Rgb(240, 217, 181);

/// Outer rect of the bordered board, centered in `area` and clipped to it.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_SIZE as u16 * CELL_WIDTH + 2;
    let height = BOARD_SIZE as u16 * CELL_HEIGHT + 2;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Map a terminal coordinate to the board cell under it.
///
/// `inner` is the area the cells were drawn into. Points outside it give
/// `None`, so a clipped board never accepts a click on a hidden cell.
pub fn cell_at(inner: Rect, column: u16, row: u16) -> Option<Position> {
    if column < inner.x || row < inner.y || column >= inner.right() || row >= inner.bottom() {
        return None;
    }
    Some(Position::new(
        ((row - inner.y) / CELL_HEIGHT) as usize,
        ((column - inner.x) / CELL_WIDTH) as usize,
    ))
}

/// Draw the board with the cursor, last move and any winning line marked.
/// Returns the inner area the cells occupy, for mouse hit-testing.
pub fn render_board(
    frame: &mut Frame,
    state: &GameState,
    cursor: Option<Position>,
    area: Rect,
) -> Rect {
    let outer = board_rect(area);
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(outer);

    let winning_line = state
        .last_move()
        .filter(|_| state.status().winner().is_some())
        .and_then(|last| state.board().winning_line(last.row, last.col))
        .unwrap_or_default();
    let last_move = state.last_move();

    let mut lines = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let mut spans = Vec::with_capacity(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let (symbol, fg) = match state.cell(row, col) {
                Cell::Empty => (" \u{00b7} ", Color::DarkGray),
                Cell::Black => (" \u{25cf} ", Color::Black),
                Cell::White => (" \u{25cf} ", Color::White),
            };

            let mut style = Style::default().fg(fg).bg(BOARD_BG);
            if winning_line.contains(&pos) {
                style = style.bg(Color::LightRed).add_modifier(Modifier::BOLD);
            } else if last_move == Some(pos) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if cursor == Some(pos) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), outer);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rect_is_centered() {
        let rect = board_rect(Rect::new(0, 0, 100, 40));
        assert_eq!(rect.width, 47);
        assert_eq!(rect.height, 17);
        assert_eq!(rect.x, 26);
        assert_eq!(rect.y, 11);
    }

    #[test]
    fn test_board_rect_clipped_to_small_area() {
        let rect = board_rect(Rect::new(2, 3, 20, 10));
        assert_eq!(rect, Rect::new(2, 3, 20, 10));
    }

    #[test]
    fn test_cell_at_maps_cell_interior() {
        let inner = Rect::new(10, 5, 45, 15);
        assert_eq!(cell_at(inner, 10, 5), Some(Position::new(0, 0)));
        // Every column of a cell maps to the same cell
        assert_eq!(cell_at(inner, 22, 7), Some(Position::new(2, 4)));
        assert_eq!(cell_at(inner, 23, 7), Some(Position::new(2, 4)));
        assert_eq!(cell_at(inner, 24, 7), Some(Position::new(2, 4)));
        assert_eq!(cell_at(inner, 25, 7), Some(Position::new(2, 5)));
        assert_eq!(cell_at(inner, 54, 19), Some(Position::new(14, 14)));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let inner = Rect::new(10, 5, 45, 15);
        assert_eq!(cell_at(inner, 9, 7), None);
        assert_eq!(cell_at(inner, 12, 4), None);
        assert_eq!(cell_at(inner, 55, 7), None);
        assert_eq!(cell_at(inner, 12, 20), None);
    }

    #[test]
    fn test_cell_at_clipped_board_hides_cut_cells() {
        let outer = board_rect(Rect::new(0, 0, 20, 10));
        let inner = Block::default().borders(Borders::ALL).inner(outer);
        assert_eq!(inner, Rect::new(1, 1, 18, 8));

        // Last fully drawn cell
        assert_eq!(cell_at(inner, 18, 8), Some(Position::new(7, 5)));
        // Right and bottom borders of the clipped board
        assert_eq!(cell_at(inner, 19, 1), None);
        assert_eq!(cell_at(inner, 1, 9), None);
    }
}
