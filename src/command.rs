use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Start,
    TogglePause,
    Reset,
    DeleteBest,
    ToggleMute,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('c')) => Some(Command::Start),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::TogglePause),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Reset),
            (KeyModifiers::NONE, KeyCode::Char('d')) => Some(Command::DeleteBest),
            (KeyModifiers::NONE, KeyCode::Char('m')) => Some(Command::ToggleMute),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}
