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

//! Floating hearts drifting up behind the card.
//!
//! Positions are kept as fractions of the drawable area so that the
//! terminal size only matters when drawing.

use std::time::Duration;

// Seconds a heart takes to cross the screen: 12 plus up to 5 more.
const MIN_CROSSING_SECS: f64 = 12.0;
const CROSSING_JITTER_SECS: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Heart {
    /// Horizontal position, 0 at the left edge and 1 at the right.
    pub(crate) x: f64,
    /// Vertical position, 0 at the top and 1 at the bottom.
    pub(crate) y: f64,
    /// Fraction of the screen height climbed per second.
    speed: f64,
}

impl Heart {
    fn spawn(y: f64) -> Self {
        let crossing = MIN_CROSSING_SECS + rand::random_range(0.0..CROSSING_JITTER_SECS);
        Self {
            x: rand::random_range(0.0..1.0),
            y,
            speed: 1.0 / crossing,
        }
    }
}

pub(crate) struct Hearts {
    hearts: Vec<Heart>,
}

impl Hearts {
    /// Scatters `count` hearts over the whole screen height so the first
    /// frame is not empty.
    pub(crate) fn new(count: usize) -> Self {
        let hearts = (0..count)
            .map(|_| Heart::spawn(rand::random_range(0.0..=1.0)))
            .collect();
        Self { hearts }
    }

    /// Moves every heart up by `elapsed`. A heart leaving the top comes back
    /// in at the bottom at a new column.
    pub(crate) fn advance(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        for heart in &mut self.hearts {
            heart.y -= heart.speed * secs;
            if heart.y < 0.0 {
                *heart = Heart::spawn(1.0);
            }
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Heart> {
        self.hearts.iter()
    }
}
