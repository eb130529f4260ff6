//! # Timecraft Core Library
//!
//! This library provides the core logic behind the Timecraft scheduling
//! assistant. A schedule arrives as a list of tasks with 12-hour wall-clock
//! start and end times; the library parses those times, filters out tasks
//! that cannot be placed, and packs the rest into non-overlapping lanes so
//! overlapping tasks can be drawn side by side.
//!
//! ## Architecture
//!
//! - **Timeline**: time parsing, lane assignment, per-day grouping and the
//!   visible timeline window
//! - **Schedule**: the schedule item model produced by the planning service
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`assign_lanes`]: first-fit greedy interval partitioning
//! - [`parse_clock_minutes`]: "H:MM AM/PM" to minutes since midnight
//! - [`layout_by_day`]: one layout per schedule date
//! - [`TimelineWindow`]: hour range covered by a set of items
//! - [`Config`]: application configuration management

pub mod error;
pub mod schedule;
pub mod storage;
pub mod timeline;

pub use error::{ConfigError, CoreError, ValidationError};
pub use schedule::{ScheduleDocument, ScheduleItem};
pub use storage::Config;
pub use timeline::{
    assign_lane_indices, assign_lanes, eligible_items, format_hour, layout_by_day,
    parse_clock_minutes, ClockTime, DailyLayouts, DayLayout, LanePlacement, LayoutResult,
    TimeParseError, TimedItem, TimelineWindow, WindowConfig,
};
