//! Skeletal animation capability supplied by the rendering backend.

/// What the playback controller needs from a renderer's animator.
///
/// Implementations wrap the backend's own animator object. The controller
/// only ever borrows one; the owner decides its lifetime.
pub trait AnimationBackend {
    /// Number of animations in the loaded asset.
    fn count(&self) -> usize;

    /// Name of the animation at `index`, or `None` for an invalid index or
    /// an unnamed animation.
    fn name(&self, index: usize) -> Option<&str>;

    /// Length of the animation at `index` in seconds (zero when invalid).
    fn duration(&self, index: usize) -> f32;

    /// Evaluate the skeletal pose of animation `index` at `time` seconds.
    fn apply_pose(&mut self, index: usize, time: f32);

    /// Propagate the last evaluated pose to render-ready bone transforms.
    fn sync_skeleton(&mut self);
}

/// A named clip with a fixed length.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    /// Clip name as exported by the asset.
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
}

/// In-memory [`AnimationBackend`] for headless hosts and tests.
///
/// Records every posed sample and counts skeleton syncs instead of
/// evaluating a real skeleton.
#[derive(Debug, Clone, Default)]
pub struct ClipTable {
    clips: Vec<Clip>,
    applied: Vec<(usize, f32)>,
    skeleton_syncs: usize,
}

impl ClipTable {
    /// Build a table from `(name, duration)` pairs.
    pub fn new<S: Into<String>>(clips: impl IntoIterator<Item = (S, f32)>) -> Self {
        Self {
            clips: clips
                .into_iter()
                .map(|(name, duration)| Clip {
                    name: name.into(),
                    duration,
                })
                .collect(),
            applied: Vec::new(),
            skeleton_syncs: 0,
        }
    }

    /// Every `(index, time)` pose applied so far, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[(usize, f32)] {
        &self.applied
    }

    /// The most recently applied pose.
    #[must_use]
    pub fn last_applied(&self) -> Option<(usize, f32)> {
        self.applied.last().copied()
    }

    /// Number of skeleton syncs requested.
    #[must_use]
    pub fn skeleton_syncs(&self) -> usize {
        self.skeleton_syncs
    }
}

impl AnimationBackend for ClipTable {
    fn count(&self) -> usize {
        self.clips.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.clips
            .get(index)
            .map(|clip| clip.name.as_str())
            .filter(|name| !name.is_empty())
    }

    fn duration(&self, index: usize) -> f32 {
        self.clips.get(index).map_or(0.0, |clip| clip.duration)
    }

    fn apply_pose(&mut self, index: usize, time: f32) {
        self.applied.push((index, time));
    }

    fn sync_skeleton(&mut self) {
        self.skeleton_syncs += 1;
    }
}
