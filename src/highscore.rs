use std::path::{Path, PathBuf};
use thiserror::Error;

/// The player's best score: one non-negative integer, persisted on its own
/// and living independently of any single run.  Game resets never touch it;
/// only beating it or explicitly deleting it do.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScore(u32);

impl HighScore {
    /// Return the default best-score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("best-score.json"))
    }

    /// Read the best score from disk.  A missing file reads as zero.
    pub(crate) fn load(path: &Path) -> Result<HighScore, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HighScore::default()),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src)
            .map(HighScore)
            .map_err(LoadError::deserialize)
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&self.0).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }

    pub(crate) fn get(&self) -> u32 {
        self.0
    }

    /// Take a terminated run's score into account.  Returns `true` iff
    /// `score` strictly beats the stored best.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }

    /// Explicit user-requested deletion: back to zero, whatever was stored
    pub(crate) fn clear(&mut self) {
        self.0 = 0;
    }
}

#[derive(Debug, Error)]
#[error("Failed to save best score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize best score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write best score to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read best score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read best score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize best score")]
    Deserialize(#[source] serde_json::Error),
}
