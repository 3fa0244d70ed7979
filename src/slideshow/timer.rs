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

//! Periodic slide rotation timer.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    time::Duration,
};

use anyhow::Result;

use crate::{events::AppEvent, util::worker::Worker};

/// Owned handle to the slideshow timer thread.
///
/// The thread sends [`AppEvent::SlideTick`] once per period. Ticks are
/// produced one at a time by a single thread, so a tick never overlaps the
/// previous one. Dropping the handle stops the thread and waits for it,
/// after which no tick is sent.
pub(crate) struct SlideTimer {
    _worker: Worker<()>,
}

impl SlideTimer {
    pub(crate) fn start(period: Duration, event_tx: Sender<AppEvent>) -> Result<Self> {
        let worker = Worker::spawn("slide-timer", move |stop_rx| {
            run_timer(period, &stop_rx, &event_tx)
        })?;

        tracing::debug!(period_ms = period.as_millis() as u64, "slide timer started");

        Ok(Self { _worker: worker })
    }
}

fn run_timer(period: Duration, stop_rx: &Receiver<()>, event_tx: &Sender<AppEvent>) {
    loop {
        match stop_rx.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => {
                if event_tx.send(AppEvent::SlideTick).is_err() {
                    break;
                }
            }
            Ok(()) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}
