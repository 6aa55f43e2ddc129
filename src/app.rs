use crate::audio::{Bell, Cue};
use crate::clock::Clock;
use crate::command::Command;
use crate::config::{Config, Theme};
use crate::consts;
use crate::game::{Direction, Event, Game, Phase};
use crate::highscore::HighScore;
use crate::ui::GameScreen;
use crossterm::event::{poll, read, Event as InputEvent};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level wiring: one game, one clock, and the collaborators around them.
///
/// The clock's deadline is the only thing that ever drives a simulation
/// step; everything the user does lands here as a discrete command between
/// ticks.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    clock: Clock,
    bell: Bell,
    best: HighScore,
    best_path: Option<PathBuf>,
    theme: Theme,
    quitting: bool,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> App {
        App::new_with_rng(config, HighScore::default_path(), rand::rng())
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn new_with_rng(
        config: &Config,
        best_path: Option<PathBuf>,
        rng: R,
    ) -> App<R> {
        let best = best_path
            .as_deref()
            .and_then(|p| HighScore::load(p).ok())
            .unwrap_or_default();
        App {
            game: Game::new_with_rng(rng),
            clock: Clock::new(consts::BASE_TICK),
            bell: Bell::new(),
            best,
            best_path,
            theme: config.theme.to_theme(),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let snapshot = self.game.snapshot();
        let screen = GameScreen {
            snapshot: &snapshot,
            theme: &self.theme,
            best: self.best.get(),
            muted: self.bell.muted(),
        };
        terminal.draw(|frame| frame.render_widget(&screen, frame.area()))?;
        Ok(())
    }

    /// Wait for whichever comes first, the tick deadline or an input event,
    /// and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(deadline) = self.clock.deadline() {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    /// One simulation step plus the side effects its events call for
    fn tick(&mut self) {
        let result = self.game.step();
        for &event in &result.events {
            match event {
                Event::Fed => self.bell.play(Cue::Fed),
                Event::LeveledUp { speed, .. } => {
                    self.clock.reconfigure(speed);
                    self.bell.play(Cue::LeveledUp);
                }
                Event::Terminated => {
                    self.clock.stop();
                    self.bell.play(Cue::Terminated);
                    if self.best.record(result.snapshot.score) {
                        self.save_best();
                    }
                }
            }
        }
        self.clock.advance(Instant::now());
    }

    fn handle_event(&mut self, event: InputEvent) {
        if event == InputEvent::FocusLost {
            self.pause();
            return;
        }
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Up => self.game.set_direction(Direction::Up),
            Command::Down => self.game.set_direction(Direction::Down),
            Command::Left => self.game.set_direction(Direction::Left),
            Command::Right => self.game.set_direction(Direction::Right),
            Command::Start => self.start(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::DeleteBest => {
                self.best.clear();
                self.save_best();
            }
            Command::ToggleMute => self.bell.toggle_mute(),
        }
    }

    fn start(&mut self) {
        if self.game.phase() != Phase::Idle {
            return;
        }
        self.game.start();
        self.clock.reconfigure(self.game.speed());
        self.clock.start(Instant::now());
    }

    fn toggle_pause(&mut self) {
        match self.game.phase() {
            Phase::Running => self.pause(),
            Phase::Paused => {
                self.game.resume();
                self.clock.resume(Instant::now());
            }
            Phase::Idle | Phase::GameOver => (),
        }
    }

    fn pause(&mut self) {
        if self.game.phase() == Phase::Running {
            self.game.pause();
            self.clock.pause();
        }
    }

    fn reset(&mut self) {
        self.clock.stop();
        self.game.reset();
    }

    fn save_best(&mut self) {
        if let Some(path) = self.best_path.as_deref() {
            let _ = self.best.save(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        App::new_with_rng(
            &Config::default(),
            None,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(KeyCode::Char(c).into())
    }

    #[test]
    fn start_command_arms_the_clock() {
        let mut app = new_app();
        assert!(!app.clock.is_running());
        app.handle_event(key('c'));
        assert_eq!(app.game.phase(), Phase::Running);
        assert!(app.clock.is_running());
    }

    #[test]
    fn space_toggles_pause() {
        let mut app = new_app();
        app.handle_event(key('c'));
        app.handle_event(key(' '));
        assert_eq!(app.game.phase(), Phase::Paused);
        assert!(!app.clock.is_running());
        app.handle_event(key(' '));
        assert_eq!(app.game.phase(), Phase::Running);
        assert!(app.clock.is_running());
    }

    #[test]
    fn space_does_nothing_before_start() {
        let mut app = new_app();
        app.handle_event(key(' '));
        assert_eq!(app.game.phase(), Phase::Idle);
        assert!(!app.clock.is_running());
    }

    #[test]
    fn focus_loss_pauses_a_running_game() {
        let mut app = new_app();
        app.handle_event(key('c'));
        app.handle_event(InputEvent::FocusLost);
        assert_eq!(app.game.phase(), Phase::Paused);
        assert!(!app.clock.is_running());
    }

    #[test]
    fn reset_command_disarms_the_clock() {
        let mut app = new_app();
        assert!(app.best.record(9));
        app.handle_event(key('c'));
        app.handle_event(key('r'));
        assert_eq!(app.game.phase(), Phase::Idle);
        assert!(!app.clock.is_running());
        assert_eq!(app.best.get(), 9);
    }

    #[test]
    fn delete_best_command_zeroes_the_best_score() {
        let mut app = new_app();
        assert!(app.best.record(9));
        app.handle_event(key('d'));
        assert_eq!(app.best.get(), 0);
    }

    #[test]
    fn mute_command_toggles_the_bell() {
        let mut app = new_app();
        app.handle_event(key('m'));
        assert!(app.bell.muted());
        app.handle_event(key('m'));
        assert!(!app.bell.muted());
    }

    #[test]
    fn quit_command_ends_the_loop() {
        let mut app = new_app();
        app.handle_event(key('q'));
        assert!(app.quitting);
    }

    #[test]
    fn run_terminates_at_the_wall() {
        let mut app = new_app();
        app.handle_event(key('c'));
        app.handle_event(key('k'));
        // Ten cells from the center to the top edge, then one step out
        for _ in 0..11 {
            app.tick();
        }
        assert_eq!(app.game.phase(), Phase::GameOver);
        assert!(!app.clock.is_running());
    }
}
