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

//! Terminal input and animation frame sources.
//!
//! Both run as owned [`Worker`]s so they stop with the view rather than
//! outliving it.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::{events::AppEvent, util::worker::Worker};

// How long a poll for terminal input blocks before checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Animation frame period, roughly ten frames per second.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(100);

/// Translates key presses into [`AppEvent::Key`].
pub(crate) fn spawn_input_worker(event_tx: Sender<AppEvent>) -> Result<Worker<()>> {
    Worker::spawn("input", move |stop_rx: Receiver<()>| {
        while !matches!(stop_rx.try_recv(), Err(TryRecvError::Disconnected)) {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if event_tx.send(AppEvent::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(error = %e, "terminal input unavailable");
                    let _ = event_tx.send(AppEvent::FatalError(format!("Input failure: {}", e)));
                    break;
                }
            }
        }
    })
}

/// Sends [`AppEvent::Tick`] once per [`FRAME_PERIOD`] to keep animations
/// moving.
pub(crate) fn spawn_frame_ticker(event_tx: Sender<AppEvent>) -> Result<Worker<()>> {
    Worker::spawn("frame-ticker", move |stop_rx: Receiver<()>| {
        while let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(FRAME_PERIOD) {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    })
}
