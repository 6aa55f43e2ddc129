use std::io::{self, Write};

/// Discrete audio cue signals produced by the simulation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    Fed,
    LeveledUp,
    Terminated,
}

/// Maps cues to terminal-bell chimes.  Mute state lives here, on the
/// playback side; the simulation neither knows nor cares.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Bell {
    muted: bool,
}

impl Bell {
    pub(crate) fn new() -> Bell {
        Bell::default()
    }

    pub(crate) fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub(crate) fn muted(&self) -> bool {
        self.muted
    }

    /// Fire-and-forget playback.  A terminal that refuses the bell must not
    /// take the game down with it, so the write result is discarded.
    pub(crate) fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        let chimes = match cue {
            Cue::Fed => 1,
            Cue::LeveledUp => 2,
            Cue::Terminated => 3,
        };
        let mut out = io::stdout();
        let _ = out
            .write_all(&b"\x07".repeat(chimes))
            .and_then(|()| out.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_is_a_toggle() {
        let mut bell = Bell::new();
        assert!(!bell.muted());
        bell.toggle_mute();
        assert!(bell.muted());
        bell.play(Cue::Fed);
        assert!(bell.muted());
        bell.toggle_mute();
        assert!(!bell.muted());
    }
}
