//! HTTP API tests against a SQLite-backed application

#[cfg(test)]
mod tests {
    use crate::common::{FaultInjectingStore, ItemFactory, TestDatabase};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use item_service::config::Config;
    use item_service::core::models::{FieldViolation, Item};
    use item_service::server::{AppState, HttpServer};
    use item_service::storage::ItemStore;
    use item_service::utils::error::{
        ErrorResponse, PROCESSING_FAILED_MESSAGE, PROCESSING_INTERRUPTED_MESSAGE,
    };
    use serde_json::json;
    use std::sync::Arc;

    fn state_over(store: Arc<dyn ItemStore>) -> AppState {
        AppState::with_store(Config::default(), store)
    }

    #[actix_web::test]
    async fn test_create_returns_created_item() {
        let db = TestDatabase::new().await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(ItemFactory::json(1))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let item: Item = test::read_body_json(resp).await;
        assert!(item.id > 0);
        assert_eq!(item.name, "Item 1");
        assert_eq!(item.status, "PENDING");
    }

    #[actix_web::test]
    async fn test_create_with_blank_fields_lists_violations() {
        let db = TestDatabase::new().await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(ItemFactory::empty_json())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let violations: Vec<FieldViolation> = test::read_body_json(resp).await;
        assert_eq!(violations.len(), 5);
        assert!(db.store().find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_with_null_email() {
        let db = TestDatabase::new().await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(json!({
                "name": "Widget",
                "description": "A widget",
                "status": "PENDING",
                "email": null,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let violations: Vec<FieldViolation> = test::read_body_json(resp).await;
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
    }

    #[actix_web::test]
    async fn test_create_with_invalid_email() {
        let db = TestDatabase::new().await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let mut body = ItemFactory::json(1);
        body["email"] = json!("not-an-email");
        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let violations: Vec<FieldViolation> = test::read_body_json(resp).await;
        assert_eq!(violations[0].message, "Invalid email format");
    }

    #[actix_web::test]
    async fn test_get_list_update_and_delete() {
        let (db, items) = TestDatabase::seeded(2).await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;
        let id = items[0].id;

        let req = test::TestRequest::get().uri("/api/items").to_request();
        let listed: Vec<Item> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 2);

        let req = test::TestRequest::get()
            .uri(&format!("/api/items/{}", id))
            .to_request();
        let fetched: Item = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, items[0]);

        let mut body = ItemFactory::json(9);
        body["status"] = json!("ARCHIVED");
        let req = test::TestRequest::put()
            .uri(&format!("/api/items/{}", id))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Item = test::read_body_json(resp).await;
        assert_eq!(updated.id, id);
        assert_eq!(updated.status, "ARCHIVED");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/items/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/items/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_missing_item_is_not_found() {
        let db = TestDatabase::new().await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let req = test::TestRequest::get().uri("/api/items/42").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::put()
            .uri("/api/items/42")
            .set_json(ItemFactory::json(1))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::delete().uri("/api/items/42").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_process_returns_processed_items() {
        let (db, _) = TestDatabase::seeded(3).await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let items: Vec<Item> = test::read_body_json(resp).await;
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.status == "PROCESSED"));
    }

    #[actix_web::test]
    async fn test_process_skips_failed_items() {
        let (db, _) = TestDatabase::seeded(4).await;
        let store = Arc::new(FaultInjectingStore::new(db.store()).fail_writes_for(4));
        let app = test::init_service(HttpServer::create_app(web::Data::new(state_over(store))))
            .await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let items: Vec<Item> = test::call_and_read_body_json(&app, req).await;

        let mut ids: Vec<_> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn test_process_with_unavailable_store() {
        let (db, _) = TestDatabase::seeded(2).await;
        let store = Arc::new(FaultInjectingStore::new(db.store()).fail_listing());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state_over(store))))
            .await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.message, PROCESSING_FAILED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_process_after_pool_shutdown_is_interrupted() {
        let (db, _) = TestDatabase::seeded(2).await;
        let state = state_over(db.store());
        state.pool.shutdown().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.message, PROCESSING_INTERRUPTED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_process_with_empty_store() {
        let db = TestDatabase::new().await;
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state_over(db.store()))))
                .await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let items: Vec<Item> = test::call_and_read_body_json(&app, req).await;
        assert!(items.is_empty());
    }
}
