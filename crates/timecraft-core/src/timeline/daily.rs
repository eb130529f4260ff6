//! Per-day lane layouts for multi-day schedules.
//!
//! Lane assignment knows nothing about dates. Multi-day views partition the
//! schedule by its date key and lay out each day on its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::item::TimedItem;
use super::lanes::{assign_lanes, LayoutResult};
use crate::schedule::ScheduleItem;

/// Layout of a single schedule date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout {
    /// Date key exactly as it appears in the schedule.
    pub date: String,
    /// Items of this day that could be laid out, in schedule order.
    pub items: Vec<TimedItem>,
    pub layout: LayoutResult,
}

/// Layouts for every date in a schedule, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLayouts {
    pub days: Vec<DayLayout>,
    /// Largest lane count of any day; at least 1 so views keep a minimum height.
    pub max_lanes: usize,
}

impl DailyLayouts {
    pub fn day(&self, date: &str) -> Option<&DayLayout> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Every laid-out item across all days.
    pub fn all_items(&self) -> impl Iterator<Item = &TimedItem> {
        self.days.iter().flat_map(|d| d.items.iter())
    }
}

/// Chronological order for date keys. Keys that are not `YYYY-MM-DD` sort
/// after real dates, among themselves by plain string comparison.
fn compare_date_keys(a: &str, b: &str) -> Ordering {
    let parse = |key: &str| NaiveDate::parse_from_str(key, "%Y-%m-%d").ok();
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Group a schedule by date and lay out each day independently.
pub fn layout_by_day(schedule: &[ScheduleItem]) -> DailyLayouts {
    let mut by_date: BTreeMap<&str, Vec<&ScheduleItem>> = BTreeMap::new();
    for item in schedule {
        by_date.entry(item.date.as_str()).or_default().push(item);
    }

    let mut groups: Vec<(&str, Vec<&ScheduleItem>)> = by_date.into_iter().collect();
    groups.sort_by(|(a, _), (b, _)| compare_date_keys(a, b));

    let mut days = Vec::with_capacity(groups.len());
    let mut max_lanes = 1;
    for (date, entries) in groups {
        let items: Vec<TimedItem> = entries
            .into_iter()
            .filter_map(TimedItem::from_schedule_item)
            .collect();
        let layout = assign_lanes(&items);
        max_lanes = max_lanes.max(layout.total_lanes);
        days.push(DayLayout {
            date: date.to_string(),
            items,
            layout,
        });
    }

    tracing::debug!(days = days.len(), max_lanes, "laid out schedule by day");

    DailyLayouts { days, max_lanes }
}
