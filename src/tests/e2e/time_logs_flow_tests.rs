use crate::modules::time_logs::adapters::outbound::repositories::TimeLogRepository;
use crate::shell::http::router;
use crate::tests::fixtures::state::{OTHER_USER, OWNED_ID, OWNER, make_seeded_state, make_test_state};
use axum::Router;
use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn request(method: Method, uri: &str, user_id: &str, form: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id);
    match form {
        Some(body) => builder
            .header("content-type", FORM)
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn flash_cookie(response: &Response) -> String {
    response.headers()[SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

#[rstest]
#[case(Method::GET, format!("/employee/time/{OWNED_ID}/edit"), None)]
#[case(
    Method::PUT,
    format!("/employee/time/{OWNED_ID}"),
    Some("project_id=project-0001&task_name=Mine&time=1&date=2024-03-12")
)]
#[case(
    Method::POST,
    format!("/employee/time/{OWNED_ID}"),
    Some("project_id=project-0001&task_name=Mine&time=1&date=2024-03-12")
)]
#[case(Method::DELETE, format!("/employee/time/{OWNED_ID}"), None)]
#[case(Method::POST, format!("/employee/time/{OWNED_ID}/delete"), None)]
#[tokio::test]
async fn another_user_cannot_touch_a_time_log(
    #[case] method: Method,
    #[case] uri: String,
    #[case] form: Option<&str>,
) {
    let (state, time_logs) = make_seeded_state().await;
    let app = router(state);

    let response = send(&app, request(method, &uri, OTHER_USER, form)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let stored = time_logs.get_by_id(OWNED_ID).await.unwrap().unwrap();
    assert_eq!(stored.task_name, "Writing release notes");
    assert_eq!(stored.user_id, OWNER);
}

#[tokio::test]
async fn store_attaches_the_creator_regardless_of_the_payload() {
    let (state, time_logs) = make_test_state();
    let app = router(state);

    let response = send(
        &app,
        request(
            Method::POST,
            "/employee/time",
            OWNER,
            Some("user_id=user-other-0002&project_id=project-0002&task_name=Payroll+run&time=7.5&date=2024-03-15"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    let time_log_id = location
        .strip_prefix("/employee/time/")
        .and_then(|rest| rest.strip_suffix("/edit"))
        .unwrap();
    let stored = time_logs.get_by_id(time_log_id).await.unwrap().unwrap();
    assert_eq!(stored.user_id, OWNER);
    assert_eq!(stored.time, 7.5);
}

#[tokio::test]
async fn table_only_shows_the_requesters_time_logs() {
    let (state, _) = make_seeded_state().await;
    let app = router(state);

    send(
        &app,
        request(
            Method::POST,
            "/employee/time",
            OTHER_USER,
            Some("project_id=project-0002&task_name=Other+work&time=1&date=2024-03-15"),
        ),
    )
    .await;

    let own = body_json(
        send(
            &app,
            request(Method::GET, "/employee/time/datatable?draw=1", OWNER, None),
        )
        .await,
    )
    .await;
    assert_eq!(own["recordsTotal"], json!(1));
    assert_eq!(own["data"][0]["id"], json!(OWNED_ID));
    assert_eq!(own["data"][0]["project_id"], json!("Onboarding"));

    let other = body_json(
        send(
            &app,
            request(Method::GET, "/employee/time/datatable?draw=1", OTHER_USER, None),
        )
        .await,
    )
    .await;
    assert_eq!(other["recordsTotal"], json!(1));
    assert_eq!(other["data"][0]["task_name"], json!("Other work"));
}

#[tokio::test]
async fn create_update_delete_redirect_with_their_flash_messages() {
    let (state, time_logs) = make_test_state();
    let app = router(state);

    let stored = send(
        &app,
        request(
            Method::POST,
            "/employee/time",
            OWNER,
            Some("project_id=project-0001&task_name=Planning&time=2&date=2024-03-11"),
        ),
    )
    .await;
    assert_eq!(stored.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash_cookie(&stored),
        "flash=success:Time%20log%20was%20created%20successfully."
    );
    let edit_url = stored.headers()[LOCATION].to_str().unwrap().to_string();
    let member_url = edit_url.trim_end_matches("/edit").to_string();

    let edit_page = send(
        &app,
        Request::get(edit_url.as_str())
            .header("x-user-id", OWNER)
            .header(COOKIE, flash_cookie(&stored))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(edit_page.status(), StatusCode::OK);
    assert!(
        edit_page.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .contains("Max-Age=0")
    );
    assert!(
        body_text(edit_page)
            .await
            .contains("Time log was created successfully.")
    );

    let updated = send(
        &app,
        request(
            Method::PUT,
            &member_url,
            OWNER,
            Some("project_id=project-0002&task_name=Planning&time=3&date=2024-03-11"),
        ),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::SEE_OTHER);
    assert_eq!(updated.headers()[LOCATION], edit_url.as_str());
    assert_eq!(
        flash_cookie(&updated),
        "flash=success:Time%20log%20was%20updated%20successfully."
    );

    let deleted = send(&app, request(Method::DELETE, &member_url, OWNER, None)).await;
    assert_eq!(deleted.status(), StatusCode::SEE_OTHER);
    assert_eq!(deleted.headers()[LOCATION], "/employee/time");
    assert_eq!(
        flash_cookie(&deleted),
        "flash=success:Time%20log%20was%20deleted%20successfully."
    );
    assert!(time_logs.get_collection(&[], &[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_time_logs_are_not_found() {
    let (state, _) = make_seeded_state().await;
    let app = router(state);

    let response = send(
        &app,
        request(Method::GET, "/employee/time/tl-missing/edit", OWNER, None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_without_a_user_are_unauthorized() {
    let (state, _) = make_seeded_state().await;
    let app = router(state);

    let response = send(
        &app,
        Request::get("/employee/time/datatable")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_answers_without_a_user() {
    let (state, _) = make_test_state();
    let response = send(
        &router(state),
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn graphql_runs_as_the_authenticated_user() {
    let (state, _) = make_seeded_state().await;
    let app = router(state);

    let response = send(
        &app,
        Request::post("/gql")
            .header("x-user-id", OWNER)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"query":"{ myTimeLogs { timeLogId } }"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"data": {"myTimeLogs": [{"timeLogId": OWNED_ID}]}})
    );
}
