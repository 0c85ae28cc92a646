//! Project board integration tests: role enforcement and management flow.
use actix_web::{test, web, App};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use encantia_service::config::{AppConfig, Config, SupabaseSettings};
use encantia_service::routes::configure_routes;
use encantia_service::AppState;
use supabase_client::{SupabaseClient, SupabaseConfig};

const TOKEN: &str = "test-access-token";

fn test_state(base_url: &str) -> AppState {
    let config = Config {
        app: AppConfig {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        supabase: SupabaseSettings {
            url: base_url.to_string(),
            anon_key: "anon-test".to_string(),
        },
    };
    let supabase = SupabaseClient::new(SupabaseConfig {
        url: config.supabase.url.clone(),
        anon_key: config.supabase.anon_key.clone(),
    })
    .unwrap();
    AppState::new(config, supabase)
}

async fn mount_identity(server: &MockServer, user_id: Uuid, email: &str, role: &str) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id,
            "email": email,
            "user_metadata": {}
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("email", format!("eq.{email}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": user_id,
            "email": email,
            "name": "Fetu",
            "avatar_url": "https://images.encantia.lat/fetu.png",
            "role": role
        })))
        .mount(server)
        .await;
}

fn project_body() -> serde_json::Value {
    json!({
        "titulo": "Feria de verano",
        "mensaje": "Preparativos de la feria",
        "portada": "https://images.encantia.lat/feria.png",
        "iniciopr": "2025-07-01",
        "findepr": "2025-07-15"
    })
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn create_is_forbidden_without_owner_plus_role() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_identity(&server, user_id, "luna@encantia.lat", "Member").await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/proyectos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app!(test_state(&server.uri()));
    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .insert_header(("Authorization", format!("Bearer {TOKEN}")))
        .set_json(project_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!(
            "No tienes permisos para crear proyectos. \
             Solo los usuarios con rol Owner+ pueden acceder a esta funcionalidad."
        )
    );
}

#[actix_web::test]
async fn delete_is_forbidden_without_owner_plus_role() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_identity(&server, user_id, "luna@encantia.lat", "Member").await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/proyectos"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app!(test_state(&server.uri()));
    let req = test::TestRequest::delete()
        .uri("/api/v1/projects/5")
        .insert_header(("Authorization", format!("Bearer {TOKEN}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn owner_plus_create_snapshots_author_and_returns_refreshed_board() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_identity(&server, user_id, "fetu@encantia.lat", "Owner+").await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/proyectos"))
        .and(body_partial_json(json!([{
            "titulo": "Feria de verano",
            "autor": "Fetu",
            "fotoperfil": "https://images.encantia.lat/fetu.png",
            "user_id": user_id
        }])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/proyectos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "titulo": "Feria de verano",
                "mensaje": "Preparativos de la feria",
                "autor": "Fetu",
                "fotoperfil": "https://images.encantia.lat/fetu.png",
                "iniciopr": "2025-07-01",
                "findepr": "2025-07-15",
                "user_id": user_id
            }
        ])))
        .mount(&server)
        .await;

    let app = test_app!(test_state(&server.uri()));
    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .insert_header(("Authorization", format!("Bearer {TOKEN}")))
        .set_json(project_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["projects"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["projects"][0]["autor"], json!("Fetu"));
    assert_eq!(body["projects"][0]["inicio"], json!("01/07/2025 00:00"));
    assert_eq!(body["can_manage"], json!(true));
}

#[actix_web::test]
async fn delete_targets_only_the_requested_project() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_identity(&server, user_id, "fetu@encantia.lat", "Owner+").await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/proyectos"))
        .and(query_param("id", "eq.2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    // Remaining rows keep their order in the refreshed board.
    Mock::given(method("GET"))
        .and(path("/rest/v1/proyectos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "titulo": "Primero" },
            { "id": 3, "titulo": "Tercero" }
        ])))
        .mount(&server)
        .await;

    let app = test_app!(test_state(&server.uri()));
    let req = test::TestRequest::delete()
        .uri("/api/v1/projects/2")
        .insert_header(("Authorization", format!("Bearer {TOKEN}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["projects"][0]["id"], json!(1));
    assert_eq!(body["projects"][1]["id"], json!(3));
}

#[actix_web::test]
async fn create_with_missing_fields_is_rejected_before_any_store_call() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_identity(&server, user_id, "fetu@encantia.lat", "Owner+").await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/proyectos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app!(test_state(&server.uri()));
    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .insert_header(("Authorization", format!("Bearer {TOKEN}")))
        .set_json(json!({
            "titulo": "",
            "mensaje": "x",
            "portada": "x",
            "iniciopr": "2025-07-01",
            "findepr": "2025-07-15"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!("Todos los campos del proyecto son obligatorios.")
    );
}
