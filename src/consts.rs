//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Extent of the (square) game board, in board units
pub(crate) const BOARD_EXTENT: i32 = 400;

/// Size of one grid cell, in board units.  All positions are multiples of
/// this, and the snake moves one cell per tick.
pub(crate) const CELL_SIZE: i32 = 20;

/// Time between movements of the snake at level 1
pub(crate) const BASE_TICK: Duration = Duration::from_millis(250);

/// How much the tick interval shrinks on each level-up
pub(crate) const SPEED_STEP: Duration = Duration::from_millis(10);

/// The tick interval never shrinks below this, no matter the level
pub(crate) const MIN_TICK: Duration = Duration::from_millis(60);

/// Eating this many food items advances the game by one level
pub(crate) const POINTS_PER_LEVEL: u32 = 20;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 25,
};

/// Glyph for the snake's head before the first move of a run
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = '@';

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with itself or a wall
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
