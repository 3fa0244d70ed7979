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

//! MPV-backed playback worker.
//!
//! The worker thread owns the `libmpv` handle. It alternates between
//! draining commands from the UI and waiting briefly for MPV events, which
//! it translates into [`AppEvent`]s:
//!
//! 1. **Commands**: [`AudioPlayerCommand`]s asking to play or pause.
//! 2. **Events**: position and duration changes, load and end of the file,
//!    and the outcome of each play request (see [`MediaStatus`]).
//!
//! The loop ends as soon as either channel is closed.

use std::{
    ops::ControlFlow,
    sync::mpsc::{Receiver, Sender, TryRecvError},
};

use anyhow::{Context, Result};
use mpv::Format;

use crate::{
    events::AppEvent,
    player::media::{MediaStatus, PlayDecision},
    util::worker::Worker,
};

// Seconds to block waiting for an MPV event before checking for commands.
const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    Play,
    Pause,
}

/// Spawns the worker thread playing `source`.
///
/// If MPV cannot be initialised the error is logged and, where possible,
/// forwarded as a fatal application event.
pub(crate) fn spawn_player_worker(
    source: String,
    event_tx: Sender<AppEvent>,
) -> Result<Worker<AudioPlayerCommand>> {
    Worker::spawn("audio-player", move |command_rx| {
        if let Err(e) = audio_player_worker(&source, &command_rx, &event_tx) {
            tracing::error!(error = %format!("{:#}", e), "audio worker failed");
            let _ = event_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:#}", e)));
        }
    })
}

fn audio_player_worker(
    source: &str,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder
            .set_option("loop-file", "inf")
            .context("Failed to enable looping")?;
        builder
            .set_option("pause", true)
            .context("Failed to start paused")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    handler
        .command(&["loadfile", source, "replace"])
        .with_context(|| format!("Failed to load {}", source))?;

    tracing::info!(source, "audio preloading");

    let mut status = MediaStatus::new();

    while step(&mut handler, &mut status, command_rx, event_tx).is_continue() {}

    tracing::debug!("audio worker shutting down");
    Ok(())
}

fn step(
    handler: &mut mpv::MpvHandler,
    status: &mut MediaStatus,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> ControlFlow<()> {
    process_commands(handler, status, command_rx, event_tx)?;
    process_mpv_events(handler, status, event_tx)
}

/// Sends `event` to the UI, breaking if the UI has gone away.
///
/// A closed channel means the card is being unmounted, so it ends the
/// worker quietly rather than as a failure.
fn forward(event_tx: &Sender<AppEvent>, event: AppEvent) -> ControlFlow<()> {
    match event_tx.send(event) {
        Ok(()) => ControlFlow::Continue(()),
        Err(_) => {
            tracing::debug!("event channel closed");
            ControlFlow::Break(())
        }
    }
}

fn unpause(handler: &mut mpv::MpvHandler, status: &mut MediaStatus) -> AppEvent {
    let result = handler
        .set_property("pause", false)
        .map_err(|e| format!("{:?}", e));
    status.unpause_outcome(result)
}

/// Executes every pending command, breaking once the channel is closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    status: &mut MediaStatus,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> ControlFlow<()> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return ControlFlow::Continue(()),
            Err(TryRecvError::Disconnected) => return ControlFlow::Break(()),
        };

        match command {
            AudioPlayerCommand::Play => match status.request_play() {
                PlayDecision::Unpause => forward(event_tx, unpause(handler, status))?,
                PlayDecision::Wait => tracing::debug!("play requested while loading"),
                PlayDecision::Fail(error) => forward(event_tx, AppEvent::PlayFailed(error))?,
            },
            AudioPlayerCommand::Pause => {
                status.request_pause();
                if let Err(e) = handler.set_property("pause", true) {
                    tracing::warn!(error = ?e, "failed to pause audio");
                }
            }
        }
    }
}

/// Waits briefly for one MPV event and forwards anything of interest.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    status: &mut MediaStatus,
    event_tx: &Sender<AppEvent>,
) -> ControlFlow<()> {
    let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) else {
        return ControlFlow::Continue(());
    };

    let mut unpause_now = false;

    let app_event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) => Some(AppEvent::DurationChanged(duration)),
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                Some(AppEvent::TimeChanged(seconds))
            }
            ("pause", Format::Flag(paused)) => {
                status.pause_changed(paused);
                None
            }
            ("idle-active", Format::Flag(idle)) => status.idle_changed(idle),
            _ => None,
        },
        mpv::Event::FileLoaded => {
            tracing::info!("audio loaded");
            unpause_now = status.file_loaded();
            None
        }
        mpv::Event::EndFile(result) => {
            // The file loops forever, so any end means it is gone.
            tracing::info!(reason = ?result, "audio resource ended");
            status.ended()
        }
        _ => None,
    };

    if unpause_now {
        return forward(event_tx, unpause(handler, status));
    }

    match app_event {
        Some(event) => forward(event_tx, event),
        None => ControlFlow::Continue(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use tracing::Level;

    use super::*;
    use crate::util::testing::count_events;

    #[test]
    fn closed_event_channel_ends_the_worker_quietly() {
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_rx);

        let errors = count_events(Level::ERROR, || {
            assert!(forward(&event_tx, AppEvent::TimeChanged(1.0)).is_break());
        });

        assert_eq!(errors, 0);
    }

    #[test]
    fn open_event_channel_continues() {
        let (event_tx, event_rx) = mpsc::channel();

        assert!(forward(&event_tx, AppEvent::PlayStarted).is_continue());
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::PlayStarted)));
    }

    #[test]
    fn worker_outliving_the_ui_stops_without_errors() {
        let (event_tx, event_rx) = mpsc::channel();

        let errors = count_events(Level::ERROR, || {
            let worker = Worker::spawn("forwarder", move |command_rx: Receiver<()>| {
                while command_rx.try_recv() != Err(TryRecvError::Disconnected) {
                    if forward(&event_tx, AppEvent::TimeChanged(0.0)).is_break() {
                        return;
                    }
                }
            })
            .unwrap();

            drop(event_rx);
            drop(worker);
        });

        assert_eq!(errors, 0);
    }
}
