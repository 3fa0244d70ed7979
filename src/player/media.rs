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

//! What the audio worker knows about its media, and what it answers to a
//! play request.
//!
//! MPV accepts `pause=no` before a file has finished loading, so a play
//! request is only answered once the outcome is actually known: at once if
//! the file is loaded or gone, otherwise when MPV reports `FileLoaded` or
//! `EndFile`.

use crate::{events::AppEvent, player::PlaybackError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoadState {
    Loading,
    Loaded,
    Unavailable,
}

/// How the worker should handle a play request.
#[derive(Debug, PartialEq)]
pub(crate) enum PlayDecision {
    /// Unpause now and report the result.
    Unpause,
    /// Answer later, when loading finishes one way or the other.
    Wait,
    Fail(PlaybackError),
}

pub(crate) struct MediaStatus {
    load: LoadState,
    play_waiting: bool,
    paused: bool,
}

impl MediaStatus {
    /// A file that has just been handed to `loadfile`, paused.
    pub(crate) fn new() -> Self {
        Self {
            load: LoadState::Loading,
            play_waiting: false,
            paused: true,
        }
    }

    pub(crate) fn load_state(&self) -> LoadState {
        self.load
    }

    pub(crate) fn request_play(&mut self) -> PlayDecision {
        match self.load {
            LoadState::Loaded => PlayDecision::Unpause,
            LoadState::Loading => {
                self.play_waiting = true;
                PlayDecision::Wait
            }
            LoadState::Unavailable => PlayDecision::Fail(PlaybackError::MediaUnavailable),
        }
    }

    pub(crate) fn request_pause(&mut self) {
        self.paused = true;
    }

    /// Turns the result of setting `pause=no` into the answer for the UI.
    pub(crate) fn unpause_outcome(&mut self, result: Result<(), String>) -> AppEvent {
        match result {
            Ok(()) => {
                self.paused = false;
                AppEvent::PlayStarted
            }
            Err(e) => AppEvent::PlayFailed(PlaybackError::Backend(e)),
        }
    }

    /// The file finished loading. Returns true if a waiting play request
    /// should now unpause.
    pub(crate) fn file_loaded(&mut self) -> bool {
        self.load = LoadState::Loaded;
        std::mem::take(&mut self.play_waiting)
    }

    /// The file is gone: it failed to load, or the stream died.
    ///
    /// A waiting play request fails; audible playback stops.
    pub(crate) fn ended(&mut self) -> Option<AppEvent> {
        let was = self.load;
        self.load = LoadState::Unavailable;

        if std::mem::take(&mut self.play_waiting) {
            Some(AppEvent::PlayFailed(PlaybackError::MediaUnavailable))
        } else if was == LoadState::Loaded && !self.paused {
            self.paused = true;
            Some(AppEvent::PlaybackStopped(PlaybackError::MediaUnavailable))
        } else {
            None
        }
    }

    /// MPV went idle. Idle before the first load is just the startup state.
    pub(crate) fn idle_changed(&mut self, idle: bool) -> Option<AppEvent> {
        if idle && self.load == LoadState::Loaded {
            self.ended()
        } else {
            None
        }
    }

    pub(crate) fn pause_changed(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(event: Option<AppEvent>) -> PlaybackError {
        match event {
            Some(AppEvent::PlayFailed(error)) => error,
            other => panic!("expected a play failure, got {:?}", other),
        }
    }

    #[test]
    fn play_on_loaded_media_unpauses() {
        let mut status = MediaStatus::new();
        assert!(!status.file_loaded());

        assert_eq!(status.request_play(), PlayDecision::Unpause);
        assert!(matches!(status.unpause_outcome(Ok(())), AppEvent::PlayStarted));
    }

    #[test]
    fn backend_refusal_is_reported() {
        let mut status = MediaStatus::new();
        status.file_loaded();

        assert_eq!(status.request_play(), PlayDecision::Unpause);
        let event = status.unpause_outcome(Err("property unavailable".to_string()));
        assert_eq!(
            failure(Some(event)),
            PlaybackError::Backend("property unavailable".to_string())
        );

        // Still paused, so a later end is not a stopped playback.
        assert!(status.ended().is_none());
    }

    #[test]
    fn play_while_loading_waits_for_the_load() {
        let mut status = MediaStatus::new();

        assert_eq!(status.request_play(), PlayDecision::Wait);
        assert!(status.file_loaded());
        assert!(matches!(status.unpause_outcome(Ok(())), AppEvent::PlayStarted));

        // Answered once only.
        assert!(!status.file_loaded());
    }

    #[test]
    fn play_while_loading_fails_if_the_load_fails() {
        let mut status = MediaStatus::new();

        assert_eq!(status.request_play(), PlayDecision::Wait);
        assert_eq!(failure(status.ended()), PlaybackError::MediaUnavailable);
        assert_eq!(status.load_state(), LoadState::Unavailable);
        assert!(status.ended().is_none());
    }

    #[test]
    fn play_after_load_failure_fails_at_once() {
        let mut status = MediaStatus::new();
        assert!(status.ended().is_none());

        assert_eq!(
            status.request_play(),
            PlayDecision::Fail(PlaybackError::MediaUnavailable)
        );
    }

    #[test]
    fn stream_dying_while_playing_stops_playback() {
        let mut status = MediaStatus::new();
        status.file_loaded();
        status.request_play();
        status.unpause_outcome(Ok(()));

        match status.ended() {
            Some(AppEvent::PlaybackStopped(error)) => {
                assert_eq!(error, PlaybackError::MediaUnavailable)
            }
            other => panic!("expected playback to stop, got {:?}", other),
        }
        assert!(status.idle_changed(true).is_none());
    }

    #[test]
    fn end_while_paused_is_silent() {
        let mut status = MediaStatus::new();
        status.file_loaded();
        status.request_play();
        status.unpause_outcome(Ok(()));
        status.request_pause();

        assert!(status.ended().is_none());
    }

    #[test]
    fn idle_only_counts_once_loaded() {
        let mut status = MediaStatus::new();
        assert_eq!(status.request_play(), PlayDecision::Wait);

        // Startup idleness does not fail the waiting request.
        assert!(status.idle_changed(true).is_none());
        assert!(status.idle_changed(false).is_none());

        assert!(status.file_loaded());
        status.unpause_outcome(Ok(()));
        status.pause_changed(false);

        assert!(matches!(
            status.idle_changed(true),
            Some(AppEvent::PlaybackStopped(_))
        ));
    }
}
