use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Animation playback defaults.
pub struct PlaybackOptions {
    /// Loop the autoplay animation.
    #[schemars(title = "Loop")]
    pub looping: bool,
    /// Animation to start once a backend is attached.
    #[schemars(skip)]
    pub autoplay: Option<String>,
}
