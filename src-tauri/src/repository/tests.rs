//! Repository Integration Tests
//!
//! Tests for WorkItemRepository with an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{WorkItem, WorkItemStatus};
    use crate::repository::{init_db, Repository, WorkItemRepository};
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn setup_test_db() -> WorkItemRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let conn = init_db(&db_path).expect("Failed to init test DB");
        WorkItemRepository::new(Arc::new(Mutex::new(Some(conn))))
    }

    #[tokio::test]
    async fn test_create_work_item() {
        let repo = setup_test_db();

        let item = WorkItem::new(0, "Write report".to_string(), 4);
        let created = repo.create(&item).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.title, "Write report");
        assert_eq!(created.status, WorkItemStatus::Todo);
        assert_eq!(created.target_progress, 0);
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "Find me".to_string(), 3))
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "Find me");

        let missing = repo.find_by_id(9999).await.expect("Find failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_work_items() {
        let repo = setup_test_db();

        repo.create(&WorkItem::new(0, "Item 1".to_string(), 1)).await.unwrap();
        repo.create(&WorkItem::new(0, "Item 2".to_string(), 1)).await.unwrap();

        let items = repo.list().await.expect("List failed");
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_update_work_item() {
        let repo = setup_test_db();

        let mut created = repo
            .create(&WorkItem::new(0, "Original".to_string(), 5))
            .await
            .unwrap();

        created.title = "Updated".to_string();
        created.status = WorkItemStatus::Paused;
        created.memo = Some("notes".to_string());

        repo.update(&created).await.expect("Update failed");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Updated");
        assert_eq!(found.status, WorkItemStatus::Paused);
        assert_eq!(found.memo.as_deref(), Some("notes"));
    }

    #[tokio::test]
    async fn test_delete_work_item() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "To delete".to_string(), 1))
            .await
            .unwrap();

        repo.delete(created.id).await.expect("Delete failed");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_progress_returns_snapshot_with_percent() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "Read 10 pages".to_string(), 10))
            .await
            .unwrap();

        let updated = repo.update_progress(created.id, 4).await.expect("Progress failed");
        assert_eq!(updated.target_progress, 4);
        assert_eq!(updated.progress_percent, 40);
        assert_eq!(updated.status, WorkItemStatus::Todo);

        // Snapshot is persisted, not just returned
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.target_progress, 4);
        assert_eq!(found.progress_percent, 40);
    }

    #[tokio::test]
    async fn test_update_progress_rejects_out_of_bounds() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "Bounded".to_string(), 5))
            .await
            .unwrap();

        assert!(repo.update_progress(created.id, -1).await.is_err());
        assert!(repo.update_progress(created.id, 6).await.is_err());

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.target_progress, 0);
    }

    #[tokio::test]
    async fn test_update_progress_completes_at_target() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "Finish line".to_string(), 3))
            .await
            .unwrap();

        let updated = repo.update_progress(created.id, 3).await.unwrap();
        assert_eq!(updated.status, WorkItemStatus::Completed);
        assert_eq!(updated.progress_percent, 100);
    }

    #[tokio::test]
    async fn test_update_progress_missing_item() {
        let repo = setup_test_db();
        assert!(repo.update_progress(404, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_resume_sets_in_progress() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "Resumable".to_string(), 2))
            .await
            .unwrap();

        let resumed = repo.resume(created.id).await.expect("Resume failed");
        assert_eq!(resumed.status, WorkItemStatus::InProgress);
    }

    #[tokio::test]
    async fn test_log_time_accumulates_and_rejects_negative() {
        let repo = setup_test_db();

        let created = repo
            .create(&WorkItem::new(0, "Timed".to_string(), 2))
            .await
            .unwrap();

        repo.log_time(created.id, 60).await.expect("Log failed");
        let item = repo.log_time(created.id, 30).await.expect("Log failed");
        assert_eq!(item.time_spend, 90);

        assert!(repo.log_time(created.id, -5).await.is_err());
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.time_spend, 90);
    }
}
