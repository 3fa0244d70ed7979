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

//! Symbols used across the card.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_WAIT: &str = "\u{231B}";

pub(crate) const ICON_HEART: &str = "\u{2665}";
pub(crate) const ICON_SPARKLE: &str = "\u{2728}";

pub(crate) const ICON_SLIDE_CURRENT: &str = "\u{25CF}";
pub(crate) const ICON_SLIDE_OTHER: &str = "\u{25CB}";
