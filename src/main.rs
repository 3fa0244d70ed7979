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

//! # Keepsake.
//!
//! A terminal greeting card: a photo slideshow, floating hearts, a hidden
//! message and a small music player.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the terminal and all application state, and
//!   redraws after every event it processes.
//! * **Workers** (input, animation frames, the slideshow timer and the MPV
//!   audio engine) run on background threads and report back through a
//!   single `std::sync::mpsc` channel of [`AppEvent`]s.
//!
//! Mounting the card starts the workers; unmounting drops their handles,
//! which stops and joins each thread before the terminal is restored.

mod config;
mod events;
mod hearts;
mod input;
mod logging;
mod player;
mod render;
mod slideshow;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    time::Instant,
};

use crate::{
    config::AppConfig,
    events::{AppEvent, process_events},
    hearts::Hearts,
    player::{AudioPlayer, PlaybackController},
    slideshow::{SlideShow, SlideTimer},
    theme::Theme,
    util::worker::Worker,
};

/// The mounted card and everything it displays.
///
/// Fields drop in declaration order: the event sources come first so every
/// worker is stopped while the event channel is still open.
struct App {
    pub player: PlaybackController<AudioPlayer>,
    _slide_timer: SlideTimer,
    _input: Worker<()>,
    _frames: Worker<()>,

    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub slideshow: SlideShow,
    pub hearts: Hearts,
    pub message_visible: bool,

    pub mounted_at: Instant,
    pub last_frame: Instant,
}

impl App {
    /// Builds the card state and starts every event source.
    pub fn mount(config: AppConfig) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let slides = config.resolve_slides().context("Failed to resolve slides")?;
        let slideshow = SlideShow::new(slides)?;

        let (event_tx, event_rx) = mpsc::channel();

        let audio_player = AudioPlayer::new(&config.audio, event_tx.clone())
            .context("Failed to start audio player")?;
        let slide_timer = SlideTimer::start(config.slide_interval(), event_tx.clone())
            .context("Failed to start slide timer")?;
        let input = input::spawn_input_worker(event_tx.clone())?;
        let frames = input::spawn_frame_ticker(event_tx.clone())?;

        tracing::info!(
            slides = slideshow.len(),
            interval_ms = config.slide_interval_ms,
            audio = %config.audio,
            "card mounted"
        );

        let now = Instant::now();

        Ok(Self {
            hearts: Hearts::new(config.hearts),
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            slideshow,
            player: PlaybackController::new(audio_player),
            message_visible: false,
            mounted_at: now,
            last_frame: now,
            _slide_timer: slide_timer,
            _input: input,
            _frames: frames,
        })
    }

    /// Stops every event source. Nothing reaches the card afterwards.
    pub fn unmount(self) {
        drop(self);
        tracing::info!("card unmounted");
    }
}

fn main() -> Result<()> {
    let config = config::load_config();

    logging::init_logging(&config.log_file)?;

    let mut app = App::mount(config).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = process_events(&mut terminal, &mut app);
    app.unmount();
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!(error = %format!("{:#}", e), "application error");
    }

    res.context("Application error occurred")
}

/// Switches the terminal into raw mode on the alternate screen, painted
/// with the theme background.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    if let Err(e) = util::term::set_terminal_bg(app.theme.background_colour) {
        tracing::debug!(error = %e, "could not set terminal background");
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Best-effort reversal of [`setup_terminal`].
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}
