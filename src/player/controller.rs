// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Play/pause state machine and progress tracking.

use anyhow::Result;

use crate::player::{AudioBackend, PlaybackError, PlaybackState};

/// Converts a playback position into a percentage of `duration`.
///
/// An unknown, zero or non-finite duration yields 0, as does a non-finite
/// position. The result is clamped to `[0, 100]`.
pub(crate) fn progress_percent(position: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(duration) if duration.is_finite() && duration > 0.0 && position.is_finite() => {
            (position / duration * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

/// Drives a single [`AudioBackend`] from user toggles.
///
/// Pausing takes effect immediately. Playing is a request: the controller
/// stays [`PlaybackState::Paused`] until the backend reports the outcome via
/// [`play_started`](Self::play_started) or
/// [`play_failed`](Self::play_failed). Only one request is outstanding at a
/// time.
pub(crate) struct PlaybackController<B> {
    backend: B,
    state: PlaybackState,
    play_pending: bool,
    position: Option<f64>,
    duration: Option<f64>,
    progress: f64,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub(crate) fn new(backend: B) -> Self {
        Self {
            backend,
            state: PlaybackState::Paused,
            play_pending: false,
            position: None,
            duration: None,
            progress: 0.0,
        }
    }

    /// Flips between playing and paused.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be handed to the
    /// backend. A pause still takes effect in that case.
    pub(crate) fn toggle(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                self.backend.pause()
            }
            PlaybackState::Paused if self.play_pending => {
                tracing::debug!("play request already in flight");
                Ok(())
            }
            PlaybackState::Paused => {
                self.play_pending = true;
                if let Err(e) = self.backend.play() {
                    self.play_pending = false;
                    return Err(e);
                }
                Ok(())
            }
        }
    }

    /// The backend started playing in answer to the outstanding request.
    pub(crate) fn play_started(&mut self) {
        if !self.play_pending {
            tracing::debug!("ignoring unsolicited play confirmation");
            return;
        }

        self.play_pending = false;
        self.state = PlaybackState::Playing;
        tracing::info!("playback started");
    }

    /// The backend refused the outstanding request. State stays paused.
    pub(crate) fn play_failed(&mut self, error: &PlaybackError) {
        self.play_pending = false;
        tracing::warn!(%error, "playback could not be started");
    }

    /// Audible playback ended on its own (the stream died). Returns to
    /// paused so the user can try again.
    pub(crate) fn playback_stopped(&mut self, error: &PlaybackError) {
        if self.state != PlaybackState::Playing {
            return;
        }

        self.state = PlaybackState::Paused;
        tracing::warn!(%error, "playback stopped");
    }

    pub(crate) fn duration_changed(&mut self, duration: f64) {
        self.duration = (duration.is_finite() && duration > 0.0).then_some(duration);
    }

    /// Records a new playback position and recomputes the progress.
    pub(crate) fn position_changed(&mut self, position: f64) {
        self.position = Some(position);
        self.progress = progress_percent(position, self.duration);
    }

    pub(crate) fn state(&self) -> PlaybackState {
        self.state
    }

    pub(crate) fn is_play_pending(&self) -> bool {
        self.play_pending
    }

    /// The latest progress percentage, always within `[0, 100]`.
    pub(crate) fn current_progress(&self) -> f64 {
        self.progress
    }

    pub(crate) fn position(&self) -> Option<f64> {
        self.position
    }

    pub(crate) fn duration(&self) -> Option<f64> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::anyhow;
    use tracing::Level;

    use super::*;
    use crate::util::testing::count_events;

    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<&'static str>>,
        disconnected: bool,
    }

    impl AudioBackend for &FakeBackend {
        fn play(&self) -> Result<()> {
            self.calls.borrow_mut().push("play");
            if self.disconnected {
                return Err(anyhow!("worker gone"));
            }
            Ok(())
        }

        fn pause(&self) -> Result<()> {
            self.calls.borrow_mut().push("pause");
            Ok(())
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        count_events(Level::WARN, f)
    }

    #[test]
    fn progress_is_a_clamped_percentage() {
        assert_eq!(progress_percent(30.0, Some(120.0)), 25.0);
        assert_eq!(progress_percent(120.0, Some(120.0)), 100.0);
        assert_eq!(progress_percent(120.5, Some(120.0)), 100.0);
        assert_eq!(progress_percent(-1.0, Some(120.0)), 0.0);
    }

    #[test]
    fn progress_without_a_known_duration_is_zero() {
        assert_eq!(progress_percent(12.0, None), 0.0);
        assert_eq!(progress_percent(12.0, Some(0.0)), 0.0);
        assert_eq!(progress_percent(12.0, Some(f64::NAN)), 0.0);
        assert_eq!(progress_percent(12.0, Some(f64::INFINITY)), 0.0);
        assert_eq!(progress_percent(f64::NAN, Some(60.0)), 0.0);
    }

    #[test]
    fn successful_play_then_pause() {
        let backend = FakeBackend::default();
        let mut controller = PlaybackController::new(&backend);
        assert_eq!(controller.state(), PlaybackState::Paused);

        controller.toggle().unwrap();
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(controller.is_play_pending());

        controller.play_started();
        assert_eq!(controller.state(), PlaybackState::Playing);

        // A stray second confirmation changes nothing.
        controller.play_started();
        assert_eq!(controller.state(), PlaybackState::Playing);

        controller.toggle().unwrap();
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert_eq!(*backend.calls.borrow(), vec!["play", "pause"]);
    }

    #[test]
    fn toggle_while_pending_sends_one_request() {
        let backend = FakeBackend::default();
        let mut controller = PlaybackController::new(&backend);

        controller.toggle().unwrap();
        controller.toggle().unwrap();
        controller.play_started();

        assert_eq!(controller.state(), PlaybackState::Playing);
        assert_eq!(*backend.calls.borrow(), vec!["play"]);
    }

    #[test]
    fn failed_play_stays_paused_and_warns_once() {
        let backend = FakeBackend::default();
        let mut controller = PlaybackController::new(&backend);

        let warnings = count_warnings(|| {
            controller.toggle().unwrap();
            controller.play_failed(&PlaybackError::MediaUnavailable);
        });

        assert_eq!(warnings, 1);
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(!controller.is_play_pending());

        // The user may try again.
        controller.toggle().unwrap();
        controller.play_started();
        assert_eq!(controller.state(), PlaybackState::Playing);
    }

    #[test]
    fn unreachable_backend_is_reported_to_the_caller() {
        let backend = FakeBackend {
            disconnected: true,
            ..FakeBackend::default()
        };
        let mut controller = PlaybackController::new(&backend);

        assert!(controller.toggle().is_err());
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(!controller.is_play_pending());
    }

    #[test]
    fn progress_follows_position_updates() {
        let backend = FakeBackend::default();
        let mut controller = PlaybackController::new(&backend);

        controller.position_changed(5.0);
        assert_eq!(controller.current_progress(), 0.0);

        controller.duration_changed(200.0);
        controller.position_changed(50.0);
        assert_eq!(controller.current_progress(), 25.0);
        assert_eq!(controller.position(), Some(50.0));
        assert_eq!(controller.duration(), Some(200.0));

        controller.duration_changed(f64::NAN);
        controller.position_changed(60.0);
        assert_eq!(controller.current_progress(), 0.0);
        assert_eq!(controller.duration(), None);
    }

    #[test]
    fn dead_stream_returns_to_paused() {
        let backend = FakeBackend::default();
        let mut controller = PlaybackController::new(&backend);
        controller.toggle().unwrap();
        controller.play_started();

        let warnings = count_warnings(|| {
            controller.playback_stopped(&PlaybackError::MediaUnavailable);
            controller.playback_stopped(&PlaybackError::MediaUnavailable);
        });

        assert_eq!(warnings, 1);
        assert_eq!(controller.state(), PlaybackState::Paused);

        controller.toggle().unwrap();
        assert_eq!(*backend.calls.borrow(), vec!["play", "play"]);
    }
}
