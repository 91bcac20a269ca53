//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};
use ui_sync::Keyed;

/// Work item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    pub title: String,
    pub status: String,
    pub time_spend: i64,
    pub target_value: i32,
    pub target_progress: i32,
    pub progress_percent: u32,
    pub memo: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl WorkItem {
    pub fn is_complete(&self) -> bool {
        self.target_progress >= self.target_value
    }
}

impl Keyed for WorkItem {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

/// Short duration label for the time-spend column
pub fn format_duration(seconds: i64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}h{:02}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(90), "1m");
        assert_eq!(format_duration(3600), "1h00m");
        assert_eq!(format_duration(5400), "1h30m");
    }

    #[test]
    fn test_is_complete() {
        let mut item = WorkItem {
            id: 1,
            title: "x".to_string(),
            status: "todo".to_string(),
            time_spend: 0,
            target_value: 3,
            target_progress: 0,
            progress_percent: 0,
            memo: None,
            created_at: None,
            updated_at: None,
        };
        assert!(!item.is_complete());
        item.target_progress = 3;
        assert!(item.is_complete());
    }
}
