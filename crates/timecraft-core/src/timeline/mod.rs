//! Timeline layout.
//!
//! This module provides:
//! - 12-hour clock parsing for schedule times
//! - Filtering of schedule items down to placeable intervals
//! - Lane assignment so overlapping items render side by side
//! - Per-day layouts and the visible hour window

mod clock;
mod daily;
mod item;
mod lanes;
mod window;

pub use clock::{parse_clock_minutes, ClockTime, TimeParseError, MINUTES_PER_DAY};
pub use daily::{layout_by_day, DailyLayouts, DayLayout};
pub use item::{eligible_items, TimedItem};
pub use lanes::{assign_lane_indices, assign_lanes, LanePlacement, LayoutResult};
pub use window::{format_hour, TimelineWindow, WindowConfig};
