/// Playback state as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing is playing; elapsed time is zero.
    #[default]
    Stopped,
    /// The timeline advances on every update.
    Playing,
    /// Playing, but the timeline is frozen until resumed.
    Paused,
}

impl PlaybackState {
    /// Derive the state from the controller's flags.
    #[must_use]
    pub fn from_flags(is_playing: bool, is_paused: bool) -> Self {
        match (is_playing, is_paused) {
            (true, true) => Self::Paused,
            (true, false) => Self::Playing,
            (false, _) => Self::Stopped,
        }
    }

    /// Short lowercase label for logs and status bars.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}
