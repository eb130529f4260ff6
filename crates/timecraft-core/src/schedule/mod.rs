//! Schedule items as produced by the planning service.
//!
//! A schedule is a flat list of tasks, each pinned to a date and a pair of
//! 12-hour clock times. Times stay as text here; the timeline module parses
//! them when laying items out.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::Result;

/// A single scheduled task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub task: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `H:MM AM/PM`
    pub start_time: String,
    /// `H:MM AM/PM`
    pub end_time: String,
    /// Free-form estimate such as "2 hours".
    #[serde(default)]
    pub duration: String,
    /// Usually High, Medium or Low.
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub completed: bool,
    /// Estimated cost in USD.
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

impl ScheduleItem {
    pub fn new(
        id: impl Into<String>,
        task: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            duration: String::new(),
            priority: String::new(),
            completed: false,
            cost: 0.0,
            plan_id: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_plan(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A schedule file: either the service response object or a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleDocument {
    Response { schedule: Vec<ScheduleItem> },
    Items(Vec<ScheduleItem>),
}

impl ScheduleDocument {
    /// Parse a schedule from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is neither shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schedule.
    ///
    /// # Errors
    /// Returns an error on read failure or malformed JSON.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    pub fn items(&self) -> &[ScheduleItem] {
        match self {
            Self::Response { schedule } => schedule,
            Self::Items(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<ScheduleItem> {
        match self {
            Self::Response { schedule } => schedule,
            Self::Items(items) => items,
        }
    }
}
