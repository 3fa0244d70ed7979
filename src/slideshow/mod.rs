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

//! Photo slideshow state and its rotation timer.
//!
//! [`SlideShow`] holds the immutable slide set and the cursor of the slide
//! currently on display. [`SlideTimer`] is the periodic source that asks
//! the UI thread to advance the cursor; it lives exactly as long as its
//! handle.

mod timer;

pub(crate) use timer::SlideTimer;

use std::time::Instant;

use crate::config::ConfigError;

pub(crate) struct SlideShow {
    slides: Vec<String>,
    cursor: usize,
    changed_at: Instant,
}

impl SlideShow {
    /// Creates a slideshow positioned on the first slide.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSlides`] if `slides` is empty.
    pub(crate) fn new(slides: Vec<String>) -> Result<Self, ConfigError> {
        if slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }

        Ok(Self {
            slides,
            cursor: 0,
            changed_at: Instant::now(),
        })
    }

    /// Moves to the next slide, wrapping to the first after the last.
    pub(crate) fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.slides.len();
        self.changed_at = Instant::now();
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub(crate) fn current(&self) -> &str {
        &self.slides[self.cursor]
    }

    /// When the current slide was put on display, for the fade-in.
    pub(crate) fn changed_at(&self) -> Instant {
        self.changed_at
    }
}
