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

//! Audio playback for the card's background music.
//!
//! [`AudioPlayer`] is a handle to an MPV worker thread playing the single
//! configured audio resource. [`PlaybackController`] sits in front of it on
//! the UI thread and owns the play/pause state machine and the progress
//! percentage shown by the player widget.

mod commands;
mod controller;
mod media;

pub(crate) use controller::PlaybackController;

use anyhow::Result;
use std::sync::mpsc::Sender;
use thiserror::Error;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand, util::worker::Worker};

/// Playback status as far as the user is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Why a play attempt did not start playback.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum PlaybackError {
    #[error("the audio resource could not be loaded")]
    MediaUnavailable,

    #[error("the audio backend refused to start playback: {0}")]
    Backend(String),
}

/// The operations the controller needs from an audio engine.
///
/// `play` only requests playback; the outcome is reported later as
/// [`AppEvent::PlayStarted`] or [`AppEvent::PlayFailed`].
pub(crate) trait AudioBackend {
    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
}

/// A handle to the MPV playback worker.
///
/// The worker preloads the audio resource paused and loops it forever.
/// Position and duration changes flow back as application events for as
/// long as the handle exists; dropping it stops the worker and waits for it.
pub(crate) struct AudioPlayer {
    worker: Worker<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker for `source` and returns a handle to it.
    ///
    /// # Arguments
    ///
    /// * `source` - A path or URL understood by MPV.
    /// * `event_tx` - Where playback notifications and errors are sent.
    pub(crate) fn new(source: &str, event_tx: Sender<AppEvent>) -> Result<Self> {
        let worker = commands::spawn_player_worker(source.to_string(), event_tx)?;

        Ok(Self { worker })
    }
}

impl AudioBackend for AudioPlayer {
    fn play(&self) -> Result<()> {
        self.worker.send(AudioPlayerCommand::Play)
    }

    fn pause(&self) -> Result<()> {
        self.worker.send(AudioPlayerCommand::Pause)
    }
}
