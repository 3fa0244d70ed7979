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

//! Colour palette for the card.
//!
//! The palette is a dark background with pink and purple accents. The
//! gradient colours are used for the shimmering title and the progress
//! gauge.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) heart_colour: Color,
    pub(crate) message_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) text_colour: Color,

    /// Stops of the title gradient, in order.
    pub(crate) gradient: [Color; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(15, 15, 15),
            accent_colour: Color::Rgb(236, 72, 153),
            border_colour: Color::Rgb(157, 60, 110),
            gauge_track_colour: Color::Rgb(51, 51, 51),
            heart_colour: Color::Rgb(150, 50, 100),
            message_colour: Color::Rgb(251, 207, 232),
            muted_colour: Color::Rgb(110, 110, 110),
            text_colour: Color::Rgb(255, 255, 255),

            gradient: [
                Color::Rgb(236, 72, 153),
                Color::Rgb(249, 168, 212),
                Color::Rgb(168, 85, 247),
                Color::Rgb(99, 102, 241),
            ],
        }
    }

    /// Converts a colour to a CSS-style `#rrggbb` string.
    ///
    /// Only [`Color::Rgb`] has a hexadecimal form; every other variant
    /// yields black.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => "#000000".to_string(),
        }
    }

    /// Linearly blends `from` towards `to`, `t` in `[0, 1]`.
    ///
    /// Non-RGB colours cannot be blended and snap to `to`.
    pub(crate) fn blend(from: Color, to: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match (from, to) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
                Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
            }
            _ => to,
        }
    }

    /// Samples the title gradient at `position`, wrapping around so that the
    /// gradient can be scrolled indefinitely.
    pub(crate) fn gradient_at(&self, position: f64) -> Color {
        let stops = self.gradient.len();
        let scaled = position.rem_euclid(1.0) * stops as f64;
        let index = scaled.floor() as usize % stops;
        let next = (index + 1) % stops;
        Self::blend(self.gradient[index], self.gradient[next], scaled.fract())
    }
}
