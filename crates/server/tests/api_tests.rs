use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use server::{create_router, state::AppState};
use tempfile::TempDir;

fn setup_test_server() -> TestServer {
    let app = create_router(AppState::new());
    TestServer::new(app).expect("Failed to create test server")
}

fn valid_payload() -> Value {
    json!({
        "productName": "Beacon",
        "productSummary": "Beacon maps every customer journey in one view.",
        "audience": "Marketing leaders at B2B SaaS companies",
        "problem": "Fragmented attribution across channels",
        "differentiation": "Real-time journey stitching",
        "pricing": "$49 per seat per month",
        "brandVoice": "Confident",
        "primaryGoal": "Grow qualified pipeline",
        "successMetric": "200 sales-qualified leads",
        "launchHorizon": "Next quarter"
    })
}

fn payload_with(overrides: &[(&str, &str)]) -> Value {
    let mut payload = valid_payload();
    for (key, value) in overrides {
        payload[*key] = json!(value);
    }
    payload
}

async fn post_plan(server: &TestServer, payload: &Value) -> Value {
    let response = server.post("/api/plan").json(payload).await;
    response.assert_status_ok();
    response.json()
}

fn names(items: &Value, key: &str) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item[key].as_str().unwrap().to_string())
        .collect()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = setup_test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "launchplan");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_plan_routes() {
        let server = setup_test_server();

        let response = server.get("/api/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"]["/api/plan"]["post"].is_object());
        assert!(body["paths"]["/api/plan/markdown"]["post"].is_object());
    }
}

mod plan {
    use super::*;

    #[tokio::test]
    async fn test_plan_has_every_section() {
        let server = setup_test_server();

        let body = post_plan(&server, &valid_payload()).await;

        assert!(body["executiveSummary"]
            .as_str()
            .unwrap()
            .starts_with("Beacon launches with one objective: grow qualified pipeline."));
        assert_eq!(body["launchPhases"].as_array().unwrap().len(), 4);
        assert_eq!(names(&body["personaInsights"], "name"), ["Operator"]);
        assert_eq!(body["messagingPillars"].as_array().unwrap().len(), 3);
        assert_eq!(body["channelStrategy"].as_array().unwrap().len(), 4);
        assert_eq!(body["growthExperiments"].as_array().unwrap().len(), 3);
        assert_eq!(body["measurementFramework"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_identical_requests_yield_identical_plans() {
        let server = setup_test_server();

        let first = server.post("/api/plan").json(&valid_payload()).await.text();
        let second = server.post("/api/plan").json(&valid_payload()).await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_builder_persona_adds_velocity_pillar() {
        let server = setup_test_server();
        let payload = payload_with(&[
            ("audience", "Indie developer founders"),
            ("primaryGoal", "drive activation"),
        ]);

        let body = post_plan(&server, &payload).await;

        assert!(names(&body["personaInsights"], "name").contains(&"Builder".to_string()));
        assert_eq!(
            names(&body["messagingPillars"], "name"),
            ["Why Now", "Differentiated Value", "Proof & Trust", "Builder Velocity"]
        );
    }

    #[tokio::test]
    async fn test_unmatched_audience_defaults_to_operator() {
        let server = setup_test_server();
        let payload = payload_with(&[
            ("audience", "Retail shoppers"),
            ("primaryGoal", "sell more shoes"),
        ]);

        let body = post_plan(&server, &payload).await;

        assert_eq!(names(&body["personaInsights"], "name"), ["Operator"]);
    }

    #[tokio::test]
    async fn test_short_horizon_has_three_phases() {
        let server = setup_test_server();
        let payload = payload_with(&[("launchHorizon", "30 days")]);

        let body = post_plan(&server, &payload).await;

        assert_eq!(
            names(&body["launchPhases"], "name"),
            ["Ignition", "Amplify", "Convert"]
        );
        assert_eq!(
            names(&body["launchPhases"], "duration"),
            ["Days 1-10", "Days 11-20", "Days 21-30"]
        );
    }

    #[tokio::test]
    async fn test_channel_roles_follow_goal() {
        let server = setup_test_server();

        let neutral = post_plan(&server, &payload_with(&[("primaryGoal", "Build awareness")])).await;
        let pipeline = post_plan(
            &server,
            &payload_with(&[("primaryGoal", "Generate qualified pipeline")]),
        )
        .await;
        let activation =
            post_plan(&server, &payload_with(&[("primaryGoal", "Increase activation")])).await;

        let base = names(&neutral["channelStrategy"], "role");
        let with_pipeline = names(&pipeline["channelStrategy"], "role");
        let with_activation = names(&activation["channelStrategy"], "role");

        assert!(with_pipeline[2].contains("co-selling"));
        assert_eq!(with_pipeline[0], base[0]);
        assert_eq!(with_pipeline[1], base[1]);
        assert_eq!(with_pipeline[3], base[3]);

        assert!(with_activation[3].contains("onboarding"));
        assert_eq!(with_activation[0], base[0]);
        assert_eq!(with_activation[1], base[1]);
        assert_eq!(with_activation[2], base[2]);
    }

    #[tokio::test]
    async fn test_static_tables_are_invariant() {
        let server = setup_test_server();

        let a = post_plan(&server, &valid_payload()).await;
        let b = post_plan(
            &server,
            &payload_with(&[
                ("audience", "Executive buyers"),
                ("primaryGoal", "enterprise adoption"),
                ("launchHorizon", "Six weeks"),
            ]),
        )
        .await;

        assert_eq!(a["growthExperiments"], b["growthExperiments"]);
        assert_eq!(a["measurementFramework"], b["measurementFramework"]);
    }

    #[tokio::test]
    async fn test_markdown_rendering() {
        let server = setup_test_server();

        let response = server
            .post("/api/plan/markdown")
            .json(&valid_payload())
            .await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().starts_with("text/markdown"));

        let markdown = response.text();
        assert!(markdown.starts_with("# Go-To-Market Plan"));
        assert!(markdown.contains("### Scale (Weeks 10-13)"));
    }
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn test_missing_fields_are_listed_in_request_order() {
        let server = setup_test_server();
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("pricing");
        payload.as_object_mut().unwrap().remove("brandVoice");

        let response = server.post("/api/plan").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["fields"], json!(["pricing", "brandVoice"]));
    }

    #[tokio::test]
    async fn test_blank_and_null_fields_count_as_missing() {
        let server = setup_test_server();
        let mut payload = payload_with(&[("problem", "   ")]);
        payload["launchHorizon"] = Value::Null;

        let response = server.post("/api/plan").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["fields"], json!(["problem", "launchHorizon"]));
    }

    #[tokio::test]
    async fn test_non_string_value_is_listed_with_missing_keys() {
        let server = setup_test_server();

        let response = server
            .post("/api/plan")
            .json(&json!({"productName": "Beacon", "pricing": 42}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(
            body["fields"],
            json!([
                "productSummary",
                "audience",
                "problem",
                "differentiation",
                "pricing",
                "brandVoice",
                "primaryGoal",
                "successMetric",
                "launchHorizon"
            ])
        );
    }

    #[tokio::test]
    async fn test_empty_object_lists_every_field() {
        let server = setup_test_server();

        let response = server.post("/api/plan").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["fields"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_markdown_endpoint_validates_too() {
        let server = setup_test_server();
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("productName");

        let response = server.post("/api/plan/markdown").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["fields"], json!(["productName"]));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let server = setup_test_server();

        let response = server.post("/api/plan").text("not json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body.get("fields").is_none());
    }
}

mod static_frontend {
    use super::*;

    #[tokio::test]
    async fn test_app_dir_serves_web_form() {
        let app_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(app_dir.path().join("index.html"), "<h1>Launch form</h1>")
            .expect("Failed to write index.html");

        let state = AppState::new().with_app_dir(app_dir.path().to_path_buf());
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains("Launch form"));
    }
}
