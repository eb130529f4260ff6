//! Lane assignment for overlapping timeline items.
//!
//! Items are packed into rows ("lanes") so that no two items in the same
//! lane overlap in time. The strategy is greedy first-fit over items sorted
//! by start time: each item lands in the earliest-created lane that is free
//! at its start, and a new lane is opened only when none is. For interval
//! sets this uses exactly as many lanes as the deepest point of overlap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::item::TimedItem;

/// Where a single item was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanePlacement {
    /// Zero-based lane index, always `< total_lanes`.
    pub lane_index: usize,
    /// Lane count of the whole batch the item was laid out with.
    pub total_lanes: usize,
}

/// Lane assignment for one batch of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub total_lanes: usize,
    pub placements: BTreeMap<String, LanePlacement>,
}

impl LayoutResult {
    /// Placement of the item with the given id.
    pub fn get(&self, id: &str) -> Option<LanePlacement> {
        self.placements.get(id).copied()
    }

    /// Lane index of the item with the given id.
    pub fn lane_of(&self, id: &str) -> Option<usize> {
        self.get(id).map(|p| p.lane_index)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Lane index of every item, by input position.
///
/// `result[i]` is the lane of `items[i]`. Items are processed in start-time
/// order; equal start times keep their input order. An item whose start
/// equals a lane's last end time may reuse that lane. Lanes are numbered in
/// creation order, so the lane count is the largest index plus one.
pub fn assign_lane_indices(items: &[TimedItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    // `sort_by_key` is stable, which keeps ties in input order.
    order.sort_by_key(|&i| items[i].start_minutes);

    // End time of the last item placed in each lane, in creation order.
    let mut lane_ends: Vec<u16> = Vec::new();
    let mut lanes = vec![0; items.len()];

    for i in order {
        let item = &items[i];
        lanes[i] = match lane_ends
            .iter()
            .position(|&end| end <= item.start_minutes)
        {
            Some(index) => {
                lane_ends[index] = item.end_minutes;
                index
            }
            None => {
                lane_ends.push(item.end_minutes);
                lane_ends.len() - 1
            }
        };
    }

    lanes
}

/// Assign every item to a lane so that items sharing a lane never overlap.
///
/// See [`assign_lane_indices`] for the placement rules. Ids are expected to
/// be unique within `items`; if an id repeats, the entry that comes later in
/// `items` wins in the result. Use [`assign_lane_indices`] when ids may
/// repeat.
pub fn assign_lanes(items: &[TimedItem]) -> LayoutResult {
    let lanes = assign_lane_indices(items);
    let total_lanes = lanes.iter().max().map_or(0, |&max| max + 1);

    let mut placements = BTreeMap::new();
    for (item, &lane_index) in items.iter().zip(&lanes) {
        let previous = placements.insert(
            item.id.clone(),
            LanePlacement {
                lane_index,
                total_lanes,
            },
        );
        if previous.is_some() {
            tracing::warn!(id = %item.id, "duplicate item id in layout input; keeping later placement");
        }
    }

    tracing::debug!(items = items.len(), total_lanes, "assigned lanes");

    LayoutResult {
        total_lanes,
        placements,
    }
}
