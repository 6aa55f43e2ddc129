use crate::config::Theme;
use crate::consts;
use crate::game::{Direction, Phase, Point, Snapshot};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// One frame's worth of drawing input: the simulation snapshot plus the
/// app-level bits shown in the score bar.  Strictly read-only; a widget can
/// render it into any buffer but can never reach back into the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameScreen<'a> {
    pub(crate) snapshot: &'a Snapshot,
    pub(crate) theme: &'a Theme,
    pub(crate) best: u32,
    pub(crate) muted: bool,
}

impl Widget for &GameScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        let mut score_bar = format!(
            " Score: {score}  Level: {level}  Best: {best}",
            score = self.snapshot.score,
            level = self.snapshot.level,
            best = self.best,
        );
        if self.muted {
            score_bar.push_str("  [muted]");
        }
        Line::styled(score_bar, self.theme.score_bar).render(score_area, buf);

        let side = u16::try_from(consts::BOARD_EXTENT / consts::CELL_SIZE)
            .expect("board side in cells should fit in u16");
        let block_size = Size {
            width: side.saturating_add(2),
            height: side.saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let grid_area = block_area.inner(Margin::new(1, 1));
        let mut grid = Canvas {
            area: grid_area,
            buf,
        };
        let mut segments = self.snapshot.snake.iter().copied();
        let head = segments.next();
        for pos in segments {
            grid.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, self.theme.snake);
        }
        grid.draw_cell(self.snapshot.food, consts::FOOD_SYMBOL, self.theme.food);
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(head) = head {
            if self.snapshot.phase == Phase::GameOver {
                grid.draw_cell(head, consts::COLLISION_SYMBOL, self.theme.collision);
            } else {
                grid.draw_cell(head, head_symbol(self.snapshot.heading), self.theme.snake);
            }
        }

        match self.snapshot.phase {
            Phase::Running => (),
            Phase::Idle => {
                Span::from(" Steer: ← ↓ ↑ → / h j k l").render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Start ("),
                    Span::styled("c", self.theme.key),
                    Span::raw(") — Reset ("),
                    Span::styled("r", self.theme.key),
                    Span::raw(") — Quit ("),
                    Span::styled("q", self.theme.key),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            Phase::Paused => {
                Span::from(" — PAUSED —").render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Resume ("),
                    Span::styled("space", self.theme.key),
                    Span::raw(") — Reset ("),
                    Span::styled("r", self.theme.key),
                    Span::raw(") — Quit ("),
                    Span::styled("q", self.theme.key),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            Phase::GameOver => {
                Span::from(" — GAME OVER —").render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Choose One: Reset ("),
                    Span::styled("r", self.theme.key),
                    Span::raw(") — Quit ("),
                    Span::styled("q", self.theme.key),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

fn head_symbol(heading: Option<Direction>) -> char {
    match heading {
        None => consts::SNAKE_HEAD_IDLE_SYMBOL,
        Some(Direction::Up) => consts::SNAKE_HEAD_UP_SYMBOL,
        Some(Direction::Down) => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Some(Direction::Left) => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Some(Direction::Right) => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Point, symbol: char, style: Style) {
        let Some((x, y)) = self.cell_at(pos) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    /// Convert a board position to a buffer cell.  Positions off the grid
    /// (e.g. a head one step past the wall) have no cell and are not drawn.
    fn cell_at(&self, pos: Point) -> Option<(u16, u16)> {
        let gx = u16::try_from(pos.x / consts::CELL_SIZE).ok()?;
        let gy = u16::try_from(pos.y / consts::CELL_SIZE).ok()?;
        (gx < self.area.width && gy < self.area.height).then_some((
            self.area.x.saturating_add(gx),
            self.area.y.saturating_add(gy),
        ))
    }
}
