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

use std::time::Instant;

use crate::{App, player::PlaybackError};

pub(super) fn handle_tick(app: &mut App) {
    let now = Instant::now();
    app.hearts.advance(now.duration_since(app.last_frame));
    app.last_frame = now;
}

pub(super) fn handle_slide_tick(app: &mut App) {
    app.slideshow.advance();
    tracing::trace!(cursor = app.slideshow.cursor(), "slide advanced");
}

pub(super) fn handle_toggle_message(app: &mut App) {
    app.message_visible = !app.message_visible;
}

pub(super) fn handle_play_started(app: &mut App) {
    app.player.play_started();
}

pub(super) fn handle_play_failed(app: &mut App, error: PlaybackError) {
    app.player.play_failed(&error);
}

pub(super) fn handle_playback_stopped(app: &mut App, error: PlaybackError) {
    app.player.playback_stopped(&error);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player.position_changed(seconds);
}

pub(super) fn handle_duration_changed(app: &mut App, seconds: f64) {
    app.player.duration_changed(seconds);
}
