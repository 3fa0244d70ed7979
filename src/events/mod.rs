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

//! Application events and the main event loop.
//!
//! Every source of change (keys, frame ticks, the slideshow timer and the
//! audio worker) posts an [`AppEvent`] to a single channel. The loop below
//! applies each event to the [`App`] on the UI thread and redraws.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, player::PlaybackError, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// Animation frame.
    Tick,

    /// The slideshow period elapsed.
    SlideTick,

    PlayStarted,
    PlayFailed(PlaybackError),
    /// The audio ended on its own while playing.
    PlaybackStopped(PlaybackError),
    TimeChanged(f64),
    DurationChanged(f64),

    ExitApplication,

    FatalError(String),
}

/// Runs until the user quits or a fatal error arrives.
///
/// # Errors
///
/// Returns an error on a fatal worker failure or if drawing fails.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),

            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Tick => handle_tick(app),
            AppEvent::SlideTick => handle_slide_tick(app),
            AppEvent::PlayStarted => handle_play_started(app),
            AppEvent::PlayFailed(error) => handle_play_failed(app, error),
            AppEvent::PlaybackStopped(error) => handle_playback_stopped(app, error),
            AppEvent::TimeChanged(seconds) => handle_time_changed(app, seconds),
            AppEvent::DurationChanged(seconds) => handle_duration_changed(app, seconds),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(' '), _) => app.player.toggle()?,
        (KeyCode::Enter, _) => handle_toggle_message(app),

        _ => {}
    }

    Ok(())
}
