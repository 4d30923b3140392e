//! HTTP contract tests against the in-memory stores.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test};
use serde_json::{Value, json};
use tempfile::TempDir;

use api_server::configure_app;
use api_server::state::{Adapters, AppState, Repositories, SiteSettings};
use folio_core::domain::{Role, User};
use folio_core::ports::{NoopFormRelay, PasswordService};
use folio_infra::{Argon2PasswordService, JwtConfig, JwtTokenService, LocalMediaStorage};

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "correct-horse";
const EDITOR_EMAIL: &str = "editor@example.com";
const EDITOR_PASSWORD: &str = "editor-password";

struct Harness {
    state: AppState,
    _uploads: TempDir,
}

async fn harness() -> Harness {
    let uploads = TempDir::new().unwrap();
    let repos = Repositories::in_memory();
    let passwords = Arc::new(Argon2PasswordService::new());

    let editor_hash = passwords.hash(EDITOR_PASSWORD).unwrap();
    repos
        .users
        .insert(User::new(EDITOR_EMAIL.into(), None, editor_hash, Role::User))
        .await
        .unwrap();

    let adapters = Adapters {
        tokens: Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hs256".into(),
            ..JwtConfig::default()
        })),
        passwords,
        storage: Arc::new(LocalMediaStorage::new(uploads.path(), "/uploads")),
        relay: Arc::new(NoopFormRelay),
        rate_limiter: None,
    };
    let site = SiteSettings {
        upload_dir: uploads.path().to_path_buf(),
        public_upload_prefix: "/uploads".into(),
        admin_bundle_dir: None,
        cookie_secure: false,
        trust_proxy_headers: false,
    };

    let state = AppState::assemble(repos, adapters, site);
    state.pages.seed_missing().await.unwrap();
    state
        .accounts
        .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    Harness {
        state,
        _uploads: uploads,
    }
}

macro_rules! app {
    ($harness:expr) => {{
        let state = $harness.state.clone();
        test::init_service(App::new().configure(move |cfg| configure_app(cfg, state))).await
    }};
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": $email, "password": $password }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["accessToken"].as_str().unwrap().to_string()
    }};
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

async fn json_body<B: MessageBody>(res: ServiceResponse<B>) -> Value {
    test::read_body_json(res).await
}

#[actix_web::test]
async fn health_reports_memory_storage() {
    let h = harness().await;
    let app = app!(h);

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[actix_web::test]
async fn login_sets_session_cookie_that_authenticates() {
    let h = harness().await;
    let app = app!(h);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == "folio_session")
        .expect("session cookie")
        .into_owned();
    assert_eq!(cookie.http_only(), Some(true));

    let body = json_body(res).await;
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["user"]["role"], "admin");

    let me = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(cookie)
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, me).await;
    assert_eq!(me["email"], ADMIN_EMAIL);
}

#[actix_web::test]
async fn wrong_password_is_unauthorized() {
    let h = harness().await;
    let app = app!(h);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": "not-it" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn blog_publish_and_view_counting() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let req = test::TestRequest::post()
        .uri("/api/blog")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Test Post",
            "slug": "test-post",
            "content": "<p>hello</p>",
            "published": false
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(created["publishedAt"].is_null());

    // Drafts stay out of the public list.
    let public: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/blog").to_request()).await;
    assert_eq!(public.as_array().unwrap().len(), 0);

    let req = test::TestRequest::put()
        .uri(&format!("/api/blog/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "published": true }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let published = json_body(res).await;
    let published_at = published["publishedAt"].clone();
    assert!(!published_at.is_null());

    let public: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/blog").to_request()).await;
    let posts = public.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["views"], 0);

    for expected in 1..=2 {
        let post: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/blog/slug/test-post").to_request(),
        )
        .await;
        assert_eq!(post["views"], expected);
    }

    // Unpublish and publish again: the original timestamp sticks.
    for flag in [false, true] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/blog/{id}"))
            .insert_header(bearer(&token))
            .set_json(json!({ "published": flag }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["publishedAt"], published_at);
    }

    // Reading by id does not count a view.
    let req = test::TestRequest::get()
        .uri(&format!("/api/blog/{id}"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["views"], 2);
}

#[actix_web::test]
async fn duplicate_slugs_conflict() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let create = |slug: &str| {
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&token))
            .set_json(json!({ "title": "Post", "slug": slug, "content": "body" }))
            .to_request()
    };

    assert_eq!(test::call_service(&app, create("first")).await.status(), StatusCode::CREATED);
    let second = json_body(test::call_service(&app, create("second")).await).await;

    let res = test::call_service(&app, create("first")).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri(&format!("/api/blog/{}", second["id"].as_str().unwrap()))
        .insert_header(bearer(&token))
        .set_json(json!({ "slug": "first" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn mutations_without_admin_session_change_nothing() {
    let h = harness().await;
    let app = app!(h);
    let editor = login!(app, EDITOR_EMAIL, EDITOR_PASSWORD);

    let anonymous = test::TestRequest::post()
        .uri("/api/portfolio")
        .set_json(json!({ "title": "X", "description": "Y", "category": "Z" }))
        .to_request();
    assert_eq!(test::call_service(&app, anonymous).await.status(), StatusCode::UNAUTHORIZED);

    let non_admin = test::TestRequest::post()
        .uri("/api/portfolio")
        .insert_header(bearer(&editor))
        .set_json(json!({ "title": "X", "description": "Y", "category": "Z" }))
        .to_request();
    assert_eq!(test::call_service(&app, non_admin).await.status(), StatusCode::UNAUTHORIZED);

    let home = test::TestRequest::put()
        .uri("/api/home")
        .set_json(json!({ "heroTitle": "Hijacked" }))
        .to_request();
    assert_eq!(test::call_service(&app, home).await.status(), StatusCode::UNAUTHORIZED);

    let projects: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/portfolio").to_request(),
    )
    .await;
    assert!(projects.as_array().unwrap().is_empty());

    let page: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/home").to_request()).await;
    assert_ne!(page["heroTitle"], "Hijacked");
}

#[actix_web::test]
async fn deleting_a_missing_record_is_not_found() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let req = test::TestRequest::post()
        .uri("/api/talks")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Keynote",
            "description": "Opening talk",
            "type": "keynote",
            "date": "2024-05-01"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/talks/{}", uuid::Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/talks/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/talks")
        .insert_header(bearer(&token))
        .to_request();
    let talks: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(talks.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn list_fields_keep_their_order() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let req = test::TestRequest::post()
        .uri("/api/portfolio")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Open Data Portal",
            "description": "Civic data",
            "category": "Government",
            "tags": ["rust", "gis", "api"],
            "images": ["/uploads/b.png", "/uploads/a.png"]
        }))
        .to_request();
    let created = json_body(test::call_service(&app, req).await).await;

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/portfolio/{}", created["id"].as_str().unwrap()))
            .to_request(),
    )
    .await;
    assert_eq!(fetched["slug"], "open-data-portal");
    assert_eq!(fetched["tags"], json!(["rust", "gis", "api"]));
    assert_eq!(fetched["images"], json!(["/uploads/b.png", "/uploads/a.png"]));

    let stats = json!([
        { "value": "10+", "label": "Years" },
        { "value": "40", "label": "Projects" }
    ]);
    let req = test::TestRequest::put()
        .uri("/api/home")
        .insert_header(bearer(&token))
        .set_json(json!({ "stats": stats }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/home")
        .insert_header(bearer(&token))
        .to_request();
    let home: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(home["stats"], stats);
}

#[actix_web::test]
async fn contact_inbox_flow() {
    let h = harness().await;
    let app = app!(h);

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({
            "name": "Ada",
            "email": "ada@example.org",
            "subject": "Hello",
            "message": "Loved the talk."
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let receipt = json_body(res).await;
    assert_eq!(receipt["success"], true);
    assert_eq!(receipt["message"], "Contact saved successfully");
    let id = receipt["id"].as_str().unwrap().to_string();

    let bad = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({ "name": "Bob", "email": "nope", "subject": "Hi", "message": "x" }))
        .to_request();
    assert_eq!(test::call_service(&app, bad).await.status(), StatusCode::BAD_REQUEST);

    let anonymous_list = test::TestRequest::get().uri("/api/contacts").to_request();
    assert_eq!(
        test::call_service(&app, anonymous_list).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);
    let req = test::TestRequest::patch()
        .uri(&format!("/api/contacts/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "replied": true }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["replied"], true);
    assert_eq!(updated["read"], false);

    let req = test::TestRequest::get()
        .uri("/api/contacts?read=false")
        .insert_header(bearer(&token))
        .to_request();
    let unread: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unread.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/admin/stats")
        .insert_header(bearer(&token))
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["totalContacts"], 1);
    assert_eq!(stats["unreadContacts"], 1);
}

#[actix_web::test]
async fn change_password_checks_the_current_one() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(bearer(&token))
        .set_json(json!({ "currentPassword": "wrong-one", "newPassword": "brand-new-pass" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["detail"], "Current password is incorrect");

    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(bearer(&token))
        .set_json(json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": "brand-new-pass" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let relogin = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": "brand-new-pass" }))
        .to_request();
    assert_eq!(test::call_service(&app, relogin).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn contact_page_put_upserts() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let req = test::TestRequest::put()
        .uri("/api/contact-page")
        .insert_header(bearer(&token))
        .set_json(json!({
            "pageTitle": "Say hello",
            "faqs": [{ "question": "Rates?", "answer": "Ask." }]
        }))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["pageTitle"], "Say hello");

    let public: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/contact-page").to_request(),
    )
    .await;
    assert_eq!(public["faqs"][0]["question"], "Rates?");
}

fn multipart(content_type: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = "folio-test-boundary";
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

#[actix_web::test]
async fn upload_accepts_images_only() {
    let h = harness().await;
    let app = app!(h);
    let token = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);

    let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    let (content_type, body) = multipart("image/png", png);
    let req = test::TestRequest::post()
        .uri("/api/upload")
        .insert_header(bearer(&token))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let uploaded = json_body(res).await;
    assert_eq!(uploaded["mimeType"], "image/png");
    assert!(uploaded["url"].as_str().unwrap().starts_with("/uploads/"));

    let (content_type, body) = multipart("text/plain", b"just text");
    let req = test::TestRequest::post()
        .uri("/api/upload")
        .insert_header(bearer(&token))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn admin_area_redirects_by_session() {
    let h = harness().await;
    let app = app!(h);

    let res = test::call_service(&app, test::TestRequest::get().uri("/admin/blog").to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/admin/login");

    let editor = login!(app, EDITOR_EMAIL, EDITOR_PASSWORD);
    let req = test::TestRequest::get()
        .uri("/admin/blog")
        .insert_header(bearer(&editor))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");

    // The login page is open; with no bundle installed it is a plain 404.
    let res = test::call_service(&app, test::TestRequest::get().uri("/admin/login").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let admin = login!(app, ADMIN_EMAIL, ADMIN_PASSWORD);
    let req = test::TestRequest::get()
        .uri("/admin/blog")
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
