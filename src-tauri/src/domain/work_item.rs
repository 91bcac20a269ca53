//! WorkItem Entity
//!
//! A task or goal tracked by the dashboard: lifecycle status, accumulated
//! time, and bounded numeric progress toward a target.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Lifecycle status of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorkItemStatus {
    #[default]
    Todo,
    InProgress,
    Paused,
    Completed,
}

impl WorkItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemStatus::Todo => "todo",
            WorkItemStatus::InProgress => "in-progress",
            WorkItemStatus::Paused => "paused",
            WorkItemStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "in-progress" => WorkItemStatus::InProgress,
            "paused" => WorkItemStatus::Paused,
            "completed" => WorkItemStatus::Completed,
            _ => WorkItemStatus::Todo,
        }
    }
}

/// A task or goal with bounded progress
///
/// Invariants: `0 <= target_progress <= target_value`, `target_value >= 1`,
/// `time_spend` never decreases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier, assigned by the database
    pub id: u32,
    /// Display label
    pub title: String,
    /// Lifecycle status
    pub status: WorkItemStatus,
    /// Accumulated work duration in seconds
    pub time_spend: i64,
    /// Progress target (upper bound, at least 1)
    pub target_value: i32,
    /// Current progress, always within 0..=target_value
    pub target_progress: i32,
    /// Derived completion percentage, recomputed on every progress write
    /// and treated as authoritative by the frontend
    pub progress_percent: u32,
    /// Optional notes
    pub memo: Option<String>,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl WorkItem {
    /// Create a new item with zero progress
    pub fn new(id: u32, title: String, target_value: i32) -> Self {
        Self {
            id,
            title,
            status: WorkItemStatus::Todo,
            time_spend: 0,
            target_value: target_value.max(1),
            target_progress: 0,
            progress_percent: 0,
            memo: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Completion percentage for a progress/target pair
    pub fn percent(progress: i32, target: i32) -> u32 {
        if target <= 0 {
            return 0;
        }
        (progress as i64 * 100 / target as i64) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.target_progress >= self.target_value
    }

    /// Set progress to an absolute value, enforcing bounds
    pub fn set_progress(&mut self, progress: i32) -> DomainResult<()> {
        if progress < 0 || progress > self.target_value {
            return Err(DomainError::InvalidInput(format!(
                "progress {} out of range 0..={}",
                progress, self.target_value
            )));
        }
        self.target_progress = progress;
        self.progress_percent = Self::percent(self.target_progress, self.target_value);
        if self.is_complete() {
            self.status = WorkItemStatus::Completed;
        } else if self.status == WorkItemStatus::Completed {
            // Dropping back below target reopens the item
            self.status = WorkItemStatus::InProgress;
        }
        Ok(())
    }

    /// Accumulate time; negative input violates monotonicity
    pub fn add_time(&mut self, seconds: i64) -> DomainResult<()> {
        if seconds < 0 {
            return Err(DomainError::InvalidInput(
                "time_spend cannot decrease".to_string(),
            ));
        }
        self.time_spend += seconds;
        Ok(())
    }
}

impl Entity for WorkItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_item_creation() {
        let item = WorkItem::new(1, "Read 10 pages".to_string(), 10);
        assert_eq!(item.id(), 1);
        assert_eq!(item.status, WorkItemStatus::Todo);
        assert_eq!(item.target_progress, 0);
        assert_eq!(item.progress_percent, 0);
    }

    #[test]
    fn test_target_value_floor() {
        // A zero target would make every item instantly complete
        let item = WorkItem::new(1, "x".to_string(), 0);
        assert_eq!(item.target_value, 1);
    }

    #[test]
    fn test_progress_percent_derivation() {
        let mut item = WorkItem::new(1, "x".to_string(), 8);
        item.set_progress(2).unwrap();
        assert_eq!(item.progress_percent, 25);
        item.set_progress(8).unwrap();
        assert_eq!(item.progress_percent, 100);
    }

    #[test]
    fn test_set_progress_bounds() {
        let mut item = WorkItem::new(1, "x".to_string(), 5);
        assert!(item.set_progress(-1).is_err());
        assert!(item.set_progress(6).is_err());
        assert_eq!(item.target_progress, 0);

        assert!(item.set_progress(5).is_ok());
        assert_eq!(item.status, WorkItemStatus::Completed);

        // Stepping back below the target reopens the item
        assert!(item.set_progress(4).is_ok());
        assert_eq!(item.status, WorkItemStatus::InProgress);
    }

    #[test]
    fn test_add_time_is_monotonic() {
        let mut item = WorkItem::new(1, "x".to_string(), 5);
        item.add_time(90).unwrap();
        item.add_time(30).unwrap();
        assert_eq!(item.time_spend, 120);
        assert!(item.add_time(-1).is_err());
        assert_eq!(item.time_spend, 120);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(WorkItemStatus::InProgress.as_str(), "in-progress");
        assert_eq!(WorkItemStatus::from_str("paused"), WorkItemStatus::Paused);
        assert_eq!(WorkItemStatus::from_str("unknown"), WorkItemStatus::Todo);
    }
}
