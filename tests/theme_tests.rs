mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use common::{RelayOutcome, test_app};

fn toggle_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/theme/toggle");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn set_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn toggle_without_cookie_switches_to_dark() {
    let (app, _) = test_app(RelayOutcome::Deliver);

    let response = app.oneshot(toggle_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/")
    );

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("theme=dark"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn toggle_from_dark_switches_back_to_light() {
    let (app, _) = test_app(RelayOutcome::Deliver);

    let response = app.oneshot(toggle_request(Some("theme=dark"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(set_cookie(&response).starts_with("theme=light"));
}

#[tokio::test]
async fn garbage_cookie_is_treated_as_light_so_toggle_yields_dark() {
    let (app, _) = test_app(RelayOutcome::Deliver);

    let response = app
        .oneshot(toggle_request(Some("theme=sepia")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(set_cookie(&response).starts_with("theme=dark"));
}
