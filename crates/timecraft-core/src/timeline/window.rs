//! Visible hour range of a timeline.
//!
//! The window snaps to whole hours around the laid-out items, is at least
//! `min_span_hours` wide and never runs past midnight.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::item::TimedItem;

/// Window sizing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// First hour shown when there is nothing to lay out.
    #[serde(default = "default_start_hour")]
    pub default_start_hour: u16,
    /// Hour the empty window ends at.
    #[serde(default = "default_end_hour")]
    pub default_end_hour: u16,
    /// Minimum width of a non-empty window, in hours.
    #[serde(default = "default_min_span_hours")]
    pub min_span_hours: u16,
}

fn default_start_hour() -> u16 {
    8
}
fn default_end_hour() -> u16 {
    18
}
fn default_min_span_hours() -> u16 {
    4
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_start_hour: default_start_hour(),
            default_end_hour: default_end_hour(),
            min_span_hours: default_min_span_hours(),
        }
    }
}

/// Hour range `[start_hour, end_hour)` covered by a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineWindow {
    pub start_hour: u16,
    pub end_hour: u16,
}

impl TimelineWindow {
    /// Compute the window for a set of items.
    pub fn compute(items: &[TimedItem], config: &WindowConfig) -> Self {
        let min_start = items.iter().map(|i| i.start_minutes).min();
        let max_end = items.iter().map(|i| i.end_minutes).max();

        let (Some(min_start), Some(max_end)) = (min_start, max_end) else {
            return Self {
                start_hour: config.default_start_hour,
                end_hour: config.default_end_hour,
            };
        };

        let start_hour = min_start / 60;
        let mut end_hour = max_end.div_ceil(60);
        if end_hour.saturating_sub(start_hour) < config.min_span_hours {
            end_hour = start_hour.saturating_add(config.min_span_hours);
        }
        end_hour = end_hour.min(24);

        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn start_minutes(&self) -> u16 {
        self.start_hour.saturating_mul(60)
    }

    pub fn end_minutes(&self) -> u16 {
        self.end_hour.saturating_mul(60)
    }

    /// Width of the window in minutes, never zero.
    pub fn total_minutes(&self) -> u16 {
        self.end_minutes()
            .saturating_sub(self.start_minutes())
            .max(1)
    }

    /// Hour markers, one per hour in the window.
    ///
    /// The range is half-open: a window ending at 18 has its last marker at
    /// 17, and the end hour itself is the right edge of the timeline.
    pub fn hours(&self) -> Range<u16> {
        self.start_hour..self.end_hour.max(self.start_hour)
    }

    /// Position of `minutes` within the window as a fraction of its width.
    ///
    /// Values outside `0.0..=1.0` mean the minute lies outside the window.
    pub fn offset_fraction(&self, minutes: u16) -> f64 {
        (f64::from(minutes) - f64::from(self.start_minutes())) / f64::from(self.total_minutes())
    }

    /// Whether `minutes` falls inside the window, end inclusive.
    pub fn contains(&self, minutes: u16) -> bool {
        (self.start_minutes()..=self.end_minutes()).contains(&minutes)
    }
}

/// Label for an hour marker: `12am`, `1am`, ..., `12pm`, ..., `11pm`.
pub fn format_hour(hour: u16) -> String {
    match hour % 24 {
        0 => "12am".to_string(),
        12 => "12pm".to_string(),
        h if h < 12 => format!("{h}am"),
        h => format!("{}pm", h - 12),
    }
}
