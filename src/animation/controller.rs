use std::fmt;

use super::backend::AnimationBackend;
use super::state::PlaybackState;

/// Timeline driver for skeletal animations.
///
/// Selects an animation, advances its elapsed time once per frame, wraps or
/// stops at the end, and asks the backend to pose the skeleton at the new
/// time. The backend is borrowed, never owned: it must outlive the
/// controller, which the `'a` lifetime enforces.
pub struct PlaybackController<'a> {
    backend: Option<&'a mut dyn AnimationBackend>,

    is_playing: bool,
    is_paused: bool,
    should_loop: bool,

    current_index: usize,
    elapsed: f32,
    duration: f32,
}

impl<'a> PlaybackController<'a> {
    /// Create a stopped controller driving `backend`.
    pub fn new(backend: &'a mut dyn AnimationBackend) -> Self {
        let mut controller = Self::detached();
        controller.backend = Some(backend);
        controller
    }

    /// Create a stopped controller with no backend attached. Every command
    /// is a no-op until [`attach`](Self::attach) is called.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            backend: None,
            is_playing: false,
            is_paused: false,
            should_loop: false,
            current_index: 0,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    /// Attach (or replace) the backend. Any running playback is stopped,
    /// since its index refers to the previous backend's animations.
    pub fn attach(&mut self, backend: &'a mut dyn AnimationBackend) {
        self.stop();
        self.current_index = 0;
        self.duration = 0.0;
        self.backend = Some(backend);
    }

    /// Release the backend and stop playback.
    pub fn detach(&mut self) {
        self.stop();
        self.backend = None;
    }

    /// Whether a backend is attached.
    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    // ── Playback commands ────────────────────────────────────────────────

    /// Start animation `index` from the beginning.
    ///
    /// Returns `false` and leaves all state untouched if no backend is
    /// attached or `index` is out of range.
    pub fn play(&mut self, index: usize, looping: bool) -> bool {
        let Some(backend) = self.backend.as_deref() else {
            log::warn!("Cannot play animation {index}: no backend attached");
            return false;
        };
        if index >= backend.count() {
            log::warn!(
                "Animation index {index} out of range ({} available)",
                backend.count()
            );
            return false;
        }

        self.current_index = index;
        self.duration = backend.duration(index);
        self.elapsed = 0.0;
        self.is_playing = true;
        self.is_paused = false;
        self.should_loop = looping;
        log::debug!(
            "Playing animation {index} ({:.3}s, loop: {looping})",
            self.duration
        );
        true
    }

    /// Start the animation with exactly this name (case-sensitive).
    ///
    /// Returns `false` and leaves all state untouched if no animation has
    /// that name.
    pub fn play_by_name(&mut self, name: &str, looping: bool) -> bool {
        let Some(index) = self.find_animation_by_name(name) else {
            log::warn!("Unknown animation '{name}'");
            return false;
        };
        self.play(index, looping)
    }

    /// Stop playback and rewind. The last selected index is kept.
    pub fn stop(&mut self) {
        self.halt();
        self.elapsed = 0.0;
    }

    /// Freeze the timeline. Only effective while playing.
    pub fn pause(&mut self) {
        if self.is_playing {
            self.is_paused = true;
        }
    }

    /// Unfreeze a paused timeline.
    pub fn resume(&mut self) {
        if self.is_paused {
            self.is_paused = false;
        }
    }

    // ── Frame update ─────────────────────────────────────────────────────

    /// Advance the timeline by `delta_time` seconds and pose the skeleton.
    ///
    /// Looping animations fold the elapsed time back into
    /// `[0, duration)`, however many cycles one update spans. A
    /// non-looping animation that reaches its end stops with the elapsed
    /// time pinned at the duration, and no pose is applied for that tick.
    pub fn update(&mut self, delta_time: f32) {
        if !self.is_playing || self.is_paused || self.backend.is_none() {
            return;
        }

        self.elapsed += delta_time;

        if self.elapsed >= self.duration {
            if self.should_loop {
                self.elapsed = if self.duration > 0.0 {
                    self.elapsed % self.duration
                } else {
                    0.0
                };
            } else {
                self.halt();
                self.elapsed = self.duration;
                log::debug!(
                    "Animation {} finished at {:.3}s",
                    self.current_index,
                    self.duration
                );
                return;
            }
        }

        let (index, time) = (self.current_index, self.elapsed);
        if let Some(backend) = self.backend.as_deref_mut() {
            backend.apply_pose(index, time);
            backend.sync_skeleton();
        }
    }

    // ── Animation info ───────────────────────────────────────────────────

    /// Number of animations the backend offers (zero when detached).
    #[must_use]
    pub fn animation_count(&self) -> usize {
        self.backend.as_deref().map_or(0, AnimationBackend::count)
    }

    /// Name of animation `index`, or an empty string when invalid.
    #[must_use]
    pub fn animation_name(&self, index: usize) -> String {
        self.backend
            .as_deref()
            .filter(|backend| index < backend.count())
            .and_then(|backend| backend.name(index))
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// Names of all animations, in index order.
    #[must_use]
    pub fn animation_names(&self) -> Vec<String> {
        (0..self.animation_count())
            .map(|index| self.animation_name(index))
            .collect()
    }

    /// Length of animation `index` in seconds, or zero when invalid.
    #[must_use]
    pub fn animation_duration(&self, index: usize) -> f32 {
        self.backend
            .as_deref()
            .filter(|backend| index < backend.count())
            .map_or(0.0, |backend| backend.duration(index))
    }

    /// Index of the first animation named exactly `name`.
    #[must_use]
    pub fn find_animation_by_name(&self, name: &str) -> Option<usize> {
        (0..self.animation_count()).find(|&index| self.animation_name(index) == name)
    }

    // ── State queries ────────────────────────────────────────────────────

    /// Whether an animation is selected and not stopped (paused counts).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether playback is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Whether the current animation wraps at its end.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.should_loop
    }

    /// Last selected animation index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Seconds into the current animation.
    #[must_use]
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    /// Length of the current animation, captured when it started.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Elapsed time as a fraction of the duration (zero for an empty
    /// animation).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            0.0
        }
    }

    /// Stopped / playing / paused.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        PlaybackState::from_flags(self.is_playing, self.is_paused)
    }

    fn halt(&mut self) {
        self.is_playing = false;
        self.is_paused = false;
        self.should_loop = false;
    }
}

impl Default for PlaybackController<'_> {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for PlaybackController<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("has_backend", &self.has_backend())
            .field("state", &self.state())
            .field("looping", &self.should_loop)
            .field("current_index", &self.current_index)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::backend::ClipTable;

    fn idle_and_run() -> ClipTable {
        ClipTable::new([("Idle", 1.0), ("Run", 2.0)])
    }

    #[test]
    fn play_by_name_wraps_long_update() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play_by_name("Run", true));
        assert_eq!(playback.duration(), 2.0);
        assert_eq!(playback.current_index(), 1);

        playback.update(5.0);
        assert!((playback.elapsed_time() - 1.0).abs() < 1e-6);
        assert!(playback.is_playing());
        assert!((playback.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn play_then_zero_update_stays_at_start() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        for index in 0..2 {
            assert!(playback.play(index, false));
            playback.update(0.0);
            assert_eq!(playback.elapsed_time(), 0.0);
            assert_eq!(playback.progress(), 0.0);
        }
    }

    #[test]
    fn out_of_range_play_changes_nothing() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(0, true));
        playback.update(0.4);
        playback.pause();
        assert!(!playback.play(2, false));
        assert!(!playback.play(usize::MAX, false));
        assert!(playback.is_playing());
        assert!(playback.is_paused());
        assert!(playback.is_looping());
        assert_eq!(playback.current_index(), 0);
        assert!((playback.elapsed_time() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn replacing_backend_stops_playback() {
        let mut clips = idle_and_run();
        let mut small = ClipTable::new([("Idle", 1.0)]);
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(1, false));
        playback.update(0.1);

        playback.attach(&mut small);
        assert_eq!(playback.state(), PlaybackState::Stopped);
        assert_eq!(playback.elapsed_time(), 0.0);
        assert_eq!(playback.animation_count(), 1);
        assert_eq!(playback.current_index(), 0);
        assert_eq!(playback.duration(), 0.0);
        playback.update(0.3);
        assert_eq!(playback.elapsed_time(), 0.0);
        drop(playback);
        assert!(small.applied().is_empty());
    }

    #[test]
    fn unknown_name_changes_nothing() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        assert!(!playback.play_by_name("run", false));
        assert_eq!(playback.state(), PlaybackState::Stopped);
        assert_eq!(playback.find_animation_by_name("Walk"), None);
        assert_eq!(playback.find_animation_by_name("Idle"), Some(0));
    }

    #[test]
    fn looping_elapsed_matches_total_mod_duration() {
        let mut clips = ClipTable::new([("Spin", 0.75)]);
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(0, true));

        let steps = [0.1, 0.33, 1.9, 0.016, 0.5, 3.2, 0.05];
        let mut total = 0.0f32;
        for dt in steps {
            playback.update(dt);
            total += dt;
            let expected = total % 0.75;
            let got = playback.elapsed_time();
            let diff = (got - expected).abs();
            // Allow wrap-boundary aliasing (0 vs D) under float error.
            assert!(diff < 1e-4 || (0.75 - diff).abs() < 1e-4, "{got} vs {expected}");
            assert!(got < 0.75);
        }
        assert!(playback.is_playing());
    }

    #[test]
    fn non_looping_completes_at_duration() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(1, false));
        playback.update(1.5);
        assert!(playback.is_playing());
        playback.update(0.5);
        assert!(!playback.is_playing());
        assert_eq!(playback.elapsed_time(), 2.0);
        assert_eq!(playback.current_index(), 1);
        assert_eq!(playback.state(), PlaybackState::Stopped);

        // Further updates do nothing.
        playback.update(1.0);
        assert_eq!(playback.elapsed_time(), 2.0);
    }

    #[test]
    fn completion_tick_applies_no_pose() {
        let mut clips = idle_and_run();
        {
            let mut playback = PlaybackController::new(&mut clips);
            assert!(playback.play(0, false));
            playback.update(0.5);
            playback.update(10.0);
            assert!(!playback.is_playing());
        }
        assert_eq!(clips.applied(), &[(0, 0.5)]);
        assert_eq!(clips.skeleton_syncs(), 1);
    }

    #[test]
    fn each_active_tick_poses_once() {
        let mut clips = idle_and_run();
        {
            let mut playback = PlaybackController::new(&mut clips);
            assert!(playback.play(1, true));
            playback.update(0.5);
            playback.pause();
            playback.update(0.5);
            playback.resume();
            playback.update(0.25);
        }
        assert_eq!(clips.applied(), &[(1, 0.5), (1, 0.75)]);
        assert_eq!(clips.skeleton_syncs(), 2);
    }

    #[test]
    fn pause_and_resume_transitions() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);

        // Pause while stopped is ignored.
        playback.pause();
        assert!(!playback.is_paused());

        assert!(playback.play(0, true));
        playback.pause();
        assert_eq!(playback.state(), PlaybackState::Paused);
        playback.update(0.3);
        assert_eq!(playback.elapsed_time(), 0.0);

        playback.resume();
        assert_eq!(playback.state(), PlaybackState::Playing);
        playback.update(0.3);
        assert!((playback.elapsed_time() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn stop_rewinds_but_keeps_index() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(1, true));
        playback.update(0.7);
        playback.pause();
        playback.stop();
        assert!(!playback.is_playing());
        assert!(!playback.is_paused());
        assert!(!playback.is_looping());
        assert_eq!(playback.elapsed_time(), 0.0);
        assert_eq!(playback.current_index(), 1);
    }

    #[test]
    fn zero_duration_progress_is_zero() {
        let mut clips = ClipTable::new([("Empty", 0.0)]);
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(0, true));
        assert_eq!(playback.progress(), 0.0);
        playback.update(0.5);
        assert_eq!(playback.elapsed_time(), 0.0);
        assert_eq!(playback.progress(), 0.0);
        assert!(playback.is_playing());
    }

    #[test]
    fn detached_controller_is_inert() {
        let mut playback = PlaybackController::detached();
        assert!(!playback.play(0, false));
        assert_eq!(playback.animation_count(), 0);
        assert_eq!(playback.animation_name(0), "");
        assert_eq!(playback.animation_duration(0), 0.0);
        assert!(playback.animation_names().is_empty());
        playback.update(1.0);
        assert_eq!(playback.state(), PlaybackState::Stopped);
    }

    #[test]
    fn info_queries() {
        let mut clips = ClipTable::new([("Idle", 1.0), ("", 3.0), ("Run", 2.0)]);
        let playback = PlaybackController::new(&mut clips);
        assert_eq!(playback.animation_count(), 3);
        assert_eq!(
            playback.animation_names(),
            vec!["Idle".to_owned(), String::new(), "Run".to_owned()]
        );
        assert_eq!(playback.animation_name(1), "");
        assert_eq!(playback.animation_name(9), "");
        assert_eq!(playback.animation_duration(2), 2.0);
        assert_eq!(playback.animation_duration(9), 0.0);
        assert_eq!(playback.find_animation_by_name("Run"), Some(2));
    }

    #[test]
    fn detach_stops_playback() {
        let mut clips = idle_and_run();
        let mut playback = PlaybackController::new(&mut clips);
        assert!(playback.play(0, true));
        playback.detach();
        assert!(!playback.has_backend());
        assert!(!playback.is_playing());
    }
}
