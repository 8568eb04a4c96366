#[cfg(test)]
mod tests {
    use crate::services::validation::{ItemPatch, NewItem};
    use crate::test::utils::setup_test_store;

    fn new_item(title: &str, detail: &str) -> NewItem {
        NewItem {
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let (_db, store) = setup_test_store().await;

        let created = store
            .insert(new_item("Buy milk", "2 liters"))
            .await
            .expect("insert should succeed");

        assert!(!created.id.is_empty());
        assert!(created.created_at > 0);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.detail, "2 liters");
        assert_eq!(created.updated_at, None);
    }

    #[tokio::test]
    async fn test_list_all_empty_table_returns_empty_vec() {
        let (_db, store) = setup_test_store().await;

        let items = store.list_all().await.expect("list should succeed");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_orders_by_created_at_descending() {
        let (_db, store) = setup_test_store().await;

        for title in ["first", "second", "third"] {
            store
                .insert(new_item(title, ""))
                .await
                .expect("insert should succeed");
            // Distinct microsecond timestamps
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let items = store.list_all().await.expect("list should succeed");
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
        assert!(items[0].created_at > items[1].created_at);
        assert!(items[1].created_at > items[2].created_at);
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let (_db, store) = setup_test_store().await;

        let created = store
            .insert(new_item("Buy milk", "2 liters"))
            .await
            .expect("insert should succeed");

        let patch = ItemPatch {
            title: Some("Buy oat milk".to_string()),
            detail: None,
        };
        let updated = store
            .update_by_id(&created.id, patch)
            .await
            .expect("update should succeed")
            .expect("record should exist");

        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.detail, "2 liters");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_always_stamps_updated_at() {
        let (_db, store) = setup_test_store().await;

        let created = store
            .insert(new_item("Buy milk", ""))
            .await
            .expect("insert should succeed");

        // Even an empty patch refreshes updated_at
        let updated = store
            .update_by_id(&created.id, ItemPatch::default())
            .await
            .expect("update should succeed")
            .expect("record should exist");
        let first_stamp = updated.updated_at.expect("updated_at should be set");

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = store
            .update_by_id(&created.id, ItemPatch::default())
            .await
            .expect("update should succeed")
            .expect("record should exist");
        let second_stamp = updated.updated_at.expect("updated_at should be set");

        assert!(second_stamp > first_stamp);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none_and_leaves_store_unchanged() {
        let (_db, store) = setup_test_store().await;

        let created = store
            .insert(new_item("Buy milk", ""))
            .await
            .expect("insert should succeed");

        let patch = ItemPatch {
            title: Some("ignored".to_string()),
            detail: None,
        };
        let result = store
            .update_by_id("no-such-id", patch)
            .await
            .expect("lookup should succeed");
        assert!(result.is_none());

        let items = store.list_all().await.expect("list should succeed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, created.title);
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_record() {
        let (_db, store) = setup_test_store().await;

        let created = store
            .insert(new_item("Buy milk", "2 liters"))
            .await
            .expect("insert should succeed");

        let deleted = store
            .delete_by_id(&created.id)
            .await
            .expect("delete should succeed")
            .expect("record should exist");

        assert_eq!(deleted.id, created.id);
        assert_eq!(deleted.title, "Buy milk");

        let items = store.list_all().await.expect("list should succeed");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_not_found_twice() {
        let (_db, store) = setup_test_store().await;

        let created = store
            .insert(new_item("Buy milk", ""))
            .await
            .expect("insert should succeed");

        let first = store
            .delete_by_id(&created.id)
            .await
            .expect("delete should succeed");
        assert!(first.is_some());

        let second = store
            .delete_by_id(&created.id)
            .await
            .expect("delete should succeed");
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_success_to_only_one_caller() {
        let (db, store_a) = setup_test_store().await;
        let store_b = crate::stores::ItemStore::new(db);

        let created = store_a
            .insert(new_item("Buy milk", ""))
            .await
            .expect("insert should succeed");

        // Two gateways over the same backing store, as with concurrent
        // deleters: exactly one sees the deleted record
        let first = store_b
            .delete_by_id(&created.id)
            .await
            .expect("delete should succeed");
        assert!(first.is_some());

        let second = store_a
            .delete_by_id(&created.id)
            .await
            .expect("delete should succeed");
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_none() {
        let (_db, store) = setup_test_store().await;

        let result = store
            .delete_by_id("no-such-id")
            .await
            .expect("lookup should succeed");
        assert!(result.is_none());
    }
}
