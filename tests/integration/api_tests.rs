//! HTTP API tests
//!
//! Drive the full actix application over the memory store.

#[cfg(test)]
mod tests {
    use crate::common::{AgentFactory, UploadFactory};
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CONTENT_TYPE, HeaderValue};
    use actix_web::{test, web};
    use lead_dispatch::Config;
    use lead_dispatch::core::ingest::ContentType;
    use lead_dispatch::server::{AppState, HttpServer};
    use lead_dispatch::storage::{LeadStore, MemoryStore};
    use serde_json::{Value, json};
    use std::sync::Arc;

    const BOUNDARY: &str = "----lead-dispatch-test";

    fn state_with(store: Arc<dyn LeadStore>, config: Config) -> web::Data<AppState> {
        web::Data::new(AppState::new(config, store))
    }

    fn upload_request(field: &str, content_type: &str, data: &[u8]) -> test::TestRequest {
        let body = UploadFactory::multipart(BOUNDARY, field, "leads.csv", content_type, data);
        test::TestRequest::post()
            .uri("/api/lists/upload")
            .insert_header((
                CONTENT_TYPE,
                HeaderValue::from_str(&format!("multipart/form-data; boundary={}", BOUNDARY))
                    .unwrap(),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_upload_and_browse() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        let agents = AgentFactory::seed(store.as_ref(), &["Alice", "Bob"]).await;
        let app = test::init_service(HttpServer::create_app(state_with(
            store,
            Config::default(),
        )))
        .await;

        let body = UploadFactory::csv_body(5);
        let res = test::call_service(
            &app,
            upload_request("file", "text/csv", body.as_bytes()).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert_eq!(created["message"], "List uploaded and distributed successfully");
        assert_eq!(created["itemCount"], 5);
        let batch_id = created["batchId"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/lists").to_request();
        let overview: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(overview["batches"][0]["batchId"], batch_id);
        assert_eq!(overview["batches"][0]["itemCount"], 5);
        assert_eq!(overview["distributionSummary"][0]["name"], "Alice");
        assert_eq!(overview["distributionSummary"][0]["totalAssignedCount"], 3);
        assert_eq!(overview["distributionSummary"][1]["totalAssignedCount"], 2);

        let req = test::TestRequest::get()
            .uri(&format!("/api/lists/agent/{}", agents[1].id))
            .to_request();
        let detail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["agent"]["email"], "bob@example.com");
        assert_eq!(detail["assignedItems"].as_array().unwrap().len(), 2);
        assert_eq!(detail["assignedItems"][0]["firstName"], "Lead1");
        assert_eq!(detail["batches"][0]["itemCount"], 2);

        let req = test::TestRequest::get()
            .uri(&format!("/api/lists/batch/{}", batch_id))
            .to_request();
        let batch: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(batch["items"].as_array().unwrap().len(), 5);
        assert_eq!(batch["items"][4]["phone"], "555-0004");
    }

    #[actix_web::test]
    async fn test_upload_errors() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        AgentFactory::seed(store.as_ref(), &["Alice"]).await;
        let mut config = Config::default();
        config.app.upload.max_file_size = 64;
        let app = test::init_service(HttpServer::create_app(state_with(store, config))).await;

        let cases = [
            (
                upload_request("file", "application/json", b"{}"),
                "File type not supported: application/json. Please upload CSV, XLS, or XLSX files only.",
            ),
            (
                upload_request("file", "text/csv", b"Name\nAda\n"),
                "Missing required fields: FirstName, Phone",
            ),
            (
                upload_request("file", "text/csv", b"FirstName,Phone\n"),
                "No data found in the file",
            ),
            (
                upload_request("document", "text/csv", b"FirstName,Phone\nA,1\n"),
                "Please upload a file",
            ),
        ];

        for (req, message) in cases {
            let res = test::call_service(&app, req.to_request()).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{message}");
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["message"], message);
        }

        let oversized = UploadFactory::csv_body(20);
        let res = test::call_service(
            &app,
            upload_request("file", "text/csv", oversized.as_bytes()).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_spreadsheet_type_with_garbage_is_bad_request() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        AgentFactory::seed(store.as_ref(), &["Alice"]).await;
        let app = test::init_service(HttpServer::create_app(state_with(
            store,
            Config::default(),
        )))
        .await;

        let req = upload_request("file", ContentType::Xlsx.mime(), b"\x00\xff\xfe not a workbook");
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Failed to parse file")
        );
    }

    #[actix_web::test]
    async fn test_csv_declared_as_excel_is_distributed() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        AgentFactory::seed(store.as_ref(), &["Alice", "Bob"]).await;
        let app = test::init_service(HttpServer::create_app(state_with(
            store,
            Config::default(),
        )))
        .await;

        let body = UploadFactory::csv_body(3);
        let req = upload_request("file", ContentType::Xls.mime(), body.as_bytes());
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let outcome: Value = test::read_body_json(res).await;
        assert_eq!(outcome["itemCount"], 3);
    }

    #[actix_web::test]
    async fn test_malformed_agent_json_gets_error_body() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        let app = test::init_service(HttpServer::create_app(state_with(
            store,
            Config::default(),
        )))
        .await;

        let bodies = [r#"{"name":"Ada"}"#, r#"{"name": "Ada", "#, "not json"];
        for body in bodies {
            let req = test::TestRequest::post()
                .uri("/api/agents")
                .insert_header((CONTENT_TYPE, "application/json"))
                .set_payload(body)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");

            let error: Value = test::read_body_json(res).await;
            assert_eq!(error["code"], "BAD_REQUEST", "{body}");
            assert!(
                error["message"]
                    .as_str()
                    .unwrap()
                    .starts_with("Invalid request body"),
                "{body}"
            );
        }

        let req = test::TestRequest::put()
            .uri(&format!("/api/agents/{}", uuid::Uuid::new_v4()))
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"name": 5}"#)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let error: Value = test::read_body_json(res).await;
        assert_eq!(error["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_upload_without_agents() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        let app = test::init_service(HttpServer::create_app(state_with(
            store,
            Config::default(),
        )))
        .await;

        let res = test::call_service(
            &app,
            upload_request("file", "text/csv", b"FirstName,Phone\nA,1\n").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "No agents found to distribute items");
    }

    #[actix_web::test]
    async fn test_agent_crud() {
        let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
        let app = test::init_service(HttpServer::create_app(state_with(
            store,
            Config::default(),
        )))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/agents")
            .set_json(json!({"name": "Ada", "email": "ada@example.com", "phone": "555"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let agent: Value = test::read_body_json(res).await;
        let id = agent["id"].as_str().unwrap().to_string();
        assert_eq!(agent["assignedItems"], json!([]));

        let req = test::TestRequest::post()
            .uri("/api/agents")
            .set_json(json!({"name": "Other", "email": "ada@example.com", "phone": "1"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Agent already exists");

        let req = test::TestRequest::put()
            .uri(&format!("/api/agents/{}", id))
            .set_json(json!({"phone": "777"}))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["phone"], "777");
        assert_eq!(updated["name"], "Ada");

        let req = test::TestRequest::get().uri("/api/agents").to_request();
        let agents: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(agents.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/agents/{}/assigned-items", id))
            .to_request();
        let items: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items["assignedItems"], json!([]));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/agents/{}", id))
            .to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted["message"], "Agent removed");

        let req = test::TestRequest::get()
            .uri(&format!("/api/agents/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
