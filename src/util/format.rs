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

/// Formats a position in seconds as `MM:SS`.
///
/// Negative and non-finite inputs (an unknown duration reported as `NaN`,
/// for instance) are shown as `--:--`.
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }

    let total_seconds = seconds as u64;
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Formats an optional position, treating `None` as unknown.
pub(crate) fn format_optional_time(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| "--:--".to_string(), format_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(59.9), "00:59");
    }

    #[test]
    fn unknown_values_are_placeholders() {
        assert_eq!(format_time(f64::NAN), "--:--");
        assert_eq!(format_time(-1.0), "--:--");
        assert_eq!(format_optional_time(None), "--:--");
        assert_eq!(format_optional_time(Some(7.0)), "00:07");
    }
}
