//! Time-bounded items fed to the lane layout.

use serde::{Deserialize, Serialize};

use super::clock::parse_clock_minutes;
use crate::error::ValidationError;
use crate::schedule::ScheduleItem;

/// An item with a start and end expressed in minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedItem {
    pub id: String,
    pub start_minutes: u16,
    pub end_minutes: u16,
}

impl TimedItem {
    /// Create a new timed item.
    ///
    /// # Errors
    /// Returns an error if `end_minutes <= start_minutes`.
    pub fn try_new(
        id: impl Into<String>,
        start_minutes: u16,
        end_minutes: u16,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if end_minutes <= start_minutes {
            return Err(ValidationError::InvalidTimeRange {
                id,
                start: start_minutes,
                end: end_minutes,
            });
        }
        Ok(Self {
            id,
            start_minutes,
            end_minutes,
        })
    }

    /// Create a timed item from two `H:MM AM/PM` strings.
    ///
    /// # Errors
    /// Returns an error if either time fails to parse or the range is empty.
    pub fn from_clock(
        id: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let Some(start_minutes) = parse_clock_minutes(start) else {
            return Err(ValidationError::InvalidTime {
                id,
                text: start.to_string(),
            });
        };
        let Some(end_minutes) = parse_clock_minutes(end) else {
            return Err(ValidationError::InvalidTime {
                id,
                text: end.to_string(),
            });
        };
        Self::try_new(id, start_minutes, end_minutes)
    }

    /// Annotate a schedule item with parsed minutes, if it can be laid out.
    pub fn from_schedule_item(item: &ScheduleItem) -> Option<Self> {
        match Self::from_clock(item.id.as_str(), &item.start_time, &item.end_time) {
            Ok(timed) => Some(timed),
            Err(err) => {
                tracing::debug!(id = %item.id, "excluding item from layout: {err}");
                None
            }
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minutes - self.start_minutes
    }

    /// Check if this item overlaps with another. Touching ends do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minutes < other.end_minutes && self.end_minutes > other.start_minutes
    }
}

/// Parse and filter schedule items down to the ones the layout can place.
///
/// Items whose times do not parse, or whose end is not after their start,
/// are dropped. Input order is preserved.
pub fn eligible_items(items: &[ScheduleItem]) -> Vec<TimedItem> {
    items.iter().filter_map(TimedItem::from_schedule_item).collect()
}
