//! Bulk processing against the relational store

#[cfg(test)]
mod tests {
    use crate::common::{FaultInjectingStore, TestDatabase};
    use item_service::core::models::{Item, ItemId, PROCESSED_STATUS};
    use item_service::core::processing::{BulkProcessor, ItemOutcome, WorkerPool};
    use item_service::storage::ItemStore;
    use item_service::utils::error::ServiceError;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn sorted_ids(items: &[Item]) -> Vec<ItemId> {
        let mut ids: Vec<_> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids
    }

    fn processor_over(store: Arc<dyn ItemStore>) -> BulkProcessor {
        BulkProcessor::new(store, Arc::new(WorkerPool::new(10)))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_three_pending_items_become_processed() {
        let (db, seeded) = TestDatabase::seeded(3).await;
        let processor = processor_over(db.store());

        let items = processor.process_all().await.unwrap();

        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.status == PROCESSED_STATUS));

        let stored = db.store().find_all().await.unwrap();
        assert!(stored.iter().all(|item| item.status == PROCESSED_STATUS));
        assert!(!stored.iter().any(|item| item.status == "PENDING"));

        for original in &seeded {
            let after = stored.iter().find(|item| item.id == original.id).unwrap();
            assert_eq!(after.name, original.name);
            assert_eq!(after.description, original.description);
            assert_eq!(after.email, original.email);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_failing_write_for_one_item() {
        let (db, _) = TestDatabase::seeded(4).await;
        let store = Arc::new(FaultInjectingStore::new(db.store()).fail_writes_for(4));
        let processor = processor_over(store);

        let items = processor.process_all().await.unwrap();

        assert_eq!(sorted_ids(&items), vec![1, 2, 3]);

        let untouched = db.store().find_by_id(4).await.unwrap().unwrap();
        assert_eq!(untouched.status, "PENDING");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_missing_lookup_for_one_item() {
        let (db, _) = TestDatabase::seeded(4).await;
        let store = Arc::new(FaultInjectingStore::new(db.store()).hide(4));
        let processor = processor_over(store);

        let report = processor.process_all_detailed().await.unwrap();

        assert_eq!(sorted_ids(&report.processed_items()), vec![1, 2, 3]);
        assert_eq!(report.outcome_for(4), Some(&ItemOutcome::NotFound));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_processing_is_idempotent() {
        let (db, _) = TestDatabase::seeded(5).await;
        let processor = processor_over(db.store());

        let first = processor.process_all().await.unwrap();
        let second = processor.process_all().await.unwrap();

        assert_eq!(sorted_ids(&first), sorted_ids(&second));
        assert!(second.iter().all(|item| item.is_processed()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_join_waits_for_slowest_unit() {
        let (db, _) = TestDatabase::seeded(4).await;
        let store = Arc::new(
            FaultInjectingStore::new(db.store()).delay(2, Duration::from_millis(300)),
        );
        let processor = processor_over(store.clone());

        let items = processor.process_all().await.unwrap();

        // Every save completed before the aggregate was observable
        assert_eq!(items.len(), 4);
        assert_eq!(store.saves_completed(), 4);
        assert!(items.iter().any(|item| item.id == 2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_listing_failure_fails_whole_operation() {
        let (db, _) = TestDatabase::seeded(2).await;
        let store = Arc::new(FaultInjectingStore::new(db.store()).fail_listing());
        let processor = processor_over(store);

        let result = processor.process_all().await;

        assert!(matches!(result, Err(ServiceError::StoreUnavailable(_))));
        let stored = db.store().find_all().await.unwrap();
        assert!(stored.iter().all(|item| item.status == "PENDING"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_item_timeout_reported_to_diagnostics() {
        let (db, _) = TestDatabase::seeded(3).await;
        let store = Arc::new(
            FaultInjectingStore::new(db.store()).delay(3, Duration::from_secs(10)),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let processor = processor_over(store)
            .with_item_timeout(Some(Duration::from_millis(200)))
            .with_diagnostics(tx);

        let items = processor.process_all().await.unwrap();

        assert_eq!(sorted_ids(&items), vec![1, 2]);
        let diagnostic = rx.recv().await.unwrap();
        assert_eq!(diagnostic.id, 3);
        assert_eq!(diagnostic.outcome, ItemOutcome::TimedOut);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_deleted_item_is_not_recreated() {
        let (db, _) = TestDatabase::seeded(3).await;
        let store = db.store();
        let processor = processor_over(store.clone());

        assert!(store.delete_by_id(2).await.unwrap());
        let items = processor.process_all().await.unwrap();

        assert_eq!(sorted_ids(&items), vec![1, 3]);
        assert!(store.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_shut_down_pool_interrupts_processing() {
        let (db, _) = TestDatabase::seeded(2).await;
        let pool = Arc::new(WorkerPool::new(2));
        pool.shutdown().await;
        let processor = BulkProcessor::new(db.store(), pool);

        let error = crate::assert_err!(processor.process_all().await);
        assert!(matches!(error, ServiceError::Interrupted(_)));
    }
}
