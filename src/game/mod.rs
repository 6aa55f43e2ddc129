mod board;
mod direction;
mod snake;
pub(crate) use self::board::{Board, Point};
pub(crate) use self::direction::Direction;
use self::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::time::Duration;

/// The simulation core: all game state, advanced one tick at a time.
///
/// Nothing in here touches the terminal, the clock, sound, or disk; those
/// collaborators feed intents in and consume the [`StepResult`] snapshots
/// that come back out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    heading: Option<Direction>,
    food: Point,
    score: u32,
    level: u32,
    speed: Duration,
    phase: Phase,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(rng: R) -> Game<R> {
        let board = Board::standard();
        let mut game = Game {
            rng,
            board,
            snake: Snake::new(board.center()),
            heading: None,
            food: board.center(),
            score: 0,
            level: 1,
            speed: consts::BASE_TICK,
            phase: Phase::Idle,
        };
        game.place_food();
        game
    }

    /// Throw away the current run and re-arm a fresh one: single segment at
    /// the board center, no heading, score 0, level 1, base speed, new food.
    /// The persisted best score is not touched by this.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(self.board.center());
        self.heading = None;
        self.score = 0;
        self.level = 1;
        self.speed = consts::BASE_TICK;
        self.phase = Phase::Idle;
        self.place_food();
    }

    /// Begin ticking.  Only meaningful from [`Phase::Idle`]; anywhere else
    /// this is a no-op.  If no direction was chosen yet, the snake heads
    /// right.
    pub(crate) fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        if self.heading.is_none() {
            self.heading = Some(Direction::Right);
        }
        self.phase = Phase::Running;
    }

    pub(crate) fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub(crate) fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Register a directional intent.  An intent along the current axis of
    /// motion (a reversal or a repeat) is dropped; a perpendicular turn, or
    /// any intent while the snake has not moved yet, is accepted.
    pub(crate) fn set_direction(&mut self, intent: Direction) {
        match self.heading {
            Some(current) if current.axis() == intent.axis() => (),
            _ => self.heading = Some(intent),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// While not [`Phase::Running`] this mutates nothing and reports no
    /// events.  Otherwise the head moves one cell: eating food grows the
    /// snake by one and may raise the level; leaving the board or re-entering
    /// the body ends the run, and nothing else mutates within that tick.
    pub(crate) fn step(&mut self) -> StepResult {
        let (Phase::Running, Some(heading)) = (self.phase, self.heading) else {
            return StepResult {
                snapshot: self.snapshot(),
                events: Vec::new(),
            };
        };
        let head = heading.step(self.snake.head());
        self.snake.push_head(head);
        let mut events = Vec::new();
        if head == self.food {
            self.score += 1;
            events.push(Event::Fed);
            self.place_food();
            if let Some(event) = self.evaluate_level_up() {
                events.push(event);
            }
        } else {
            self.snake.drop_tail();
        }
        if !self.board.contains(head) || self.snake.self_collision() {
            self.phase = Phase::GameOver;
            events.push(Event::Terminated);
        }
        StepResult {
            snapshot: self.snapshot(),
            events,
        }
    }

    /// Move the food to a uniformly random free cell.  Enumerating the free
    /// cells keeps this total: on a board with no free cell left the food
    /// simply stays put.
    fn place_food(&mut self) {
        let snake = &self.snake;
        if let Some(pos) = self
            .board
            .cells()
            .filter(|&p| !snake.occupies(p))
            .choose(&mut self.rng)
        {
            self.food = pos;
        }
    }

    /// Raise the level every [`consts::POINTS_PER_LEVEL`] points, shaving
    /// [`consts::SPEED_STEP`] off the tick interval down to
    /// [`consts::MIN_TICK`].
    fn evaluate_level_up(&mut self) -> Option<Event> {
        if self.score == 0 || self.score % consts::POINTS_PER_LEVEL != 0 {
            return None;
        }
        self.level += 1;
        self.speed = self
            .speed
            .saturating_sub(consts::SPEED_STEP)
            .max(consts::MIN_TICK);
        Some(Event::LeveledUp {
            level: self.level,
            speed: self.speed,
        })
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn speed(&self) -> Duration {
        self.speed
    }

    /// A rendering-ready copy of the current state
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().collect(),
            heading: self.heading,
            food: self.food,
            score: self.score,
            level: self.level,
            speed: self.speed,
            phase: self.phase,
        }
    }
}

/// Coarse lifecycle state of a run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Armed but not ticking yet; waiting for the start command
    Idle,
    Running,
    Paused,
    /// The run has ended; state is frozen until the next reset
    GameOver,
}

/// One-shot occurrences reported by a single [`Game::step()`] call
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    /// The head reached the food; score and length grew by one
    Fed,
    /// The score crossed a level threshold; ticks should now fire at `speed`
    LeveledUp { level: u32, speed: Duration },
    /// The run ended this tick
    Terminated,
}

/// What a tick hands to the outside world: a drawable snapshot plus whatever
/// one-shot events the tick triggered
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct StepResult {
    pub(crate) snapshot: Snapshot,
    pub(crate) events: Vec<Event>,
}

/// Immutable view of the game state, sufficient for rendering
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// Segment positions, head first
    pub(crate) snake: Vec<Point>,
    pub(crate) heading: Option<Direction>,
    pub(crate) food: Point,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) speed: Duration,
    pub(crate) phase: Phase,
}
