// Common test utilities and helpers

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::Query,
    http::{Request, StatusCode, header::ACCEPT_LANGUAGE},
    middleware::from_fn_with_state,
    routing::get,
};
use serde_json::json;
use tower::{BoxError, ServiceExt};

use crate::{
    Catalog, DetectedLocale, I18nContext, I18nMiddleware, I18nOptions, LocaleSource, Translation,
    i18n_middleware, scope,
};

pub fn en_catalog() -> Catalog {
    Catalog::from_value(
        "en",
        json!({
            "hello": "hello, {name}",
            "apples": "no apples | one apple | {count} apples",
        }),
    )
    .unwrap()
}

pub fn ja_catalog() -> Catalog {
    Catalog::from_value(
        "ja",
        json!({
            "hello": "こんにちは, {name}",
            "apples": "りんごがない | りんご1個 | りんご{count}個",
        }),
    )
    .unwrap()
}

/// Options with english and japanese catalogs
pub fn test_options() -> I18nOptions {
    I18nOptions::new().message("en", en_catalog()).message("ja", ja_catalog()).missing_warn(false)
}

/// Detector reading the `locale` query parameter
pub fn query_locale() -> LocaleSource {
    LocaleSource::from_fn(|request, i18n| {
        Ok(request.query("locale").unwrap_or_else(|| i18n.locale().to_string()))
    })
}

/// Async detector that sleeps and loads the japanese catalog on first use
pub fn lazy_query_locale() -> LocaleSource {
    LocaleSource::from_async(|request, i18n| async move {
        let locale = request.query("locale").unwrap_or_else(|| i18n.locale().to_string());
        let delay = if locale == "ja" { 3 } else { 7 };
        tokio::time::sleep(Duration::from_millis(delay)).await;

        if locale == "ja" && !i18n.has_messages("ja") {
            i18n.set_messages("ja", ja_catalog());
        }
        Ok::<_, BoxError>(locale)
    })
}

async fn hello(t: Translation, Query(params): Query<HashMap<String, String>>) -> String {
    let name = params.get("name").cloned().unwrap_or_else(|| "world".to_string());
    t.translate("hello", [("name", name)])
}

async fn missing(t: Translation) -> String {
    t.t("no.such.key")
}

async fn twice(t: Translation) -> String {
    format!("{}|{}", t.translate("hello", [("name", "a")]), t.translate("hello", [("name", "a")]))
}

async fn apples(t: Translation, Query(params): Query<HashMap<String, String>>) -> String {
    let count: i64 = params.get("count").and_then(|count| count.parse().ok()).unwrap_or(0);
    t.translate("apples", count)
}

async fn locale(DetectedLocale(locale): DetectedLocale) -> String {
    locale.to_string()
}

async fn scoped() -> Result<String, crate::I18nError> {
    let t = scope::use_translation().await?;
    Ok(format!("{}:{}", t.locale(), t.translate("hello", [("name", "scope")])))
}

async fn context(context: I18nContext) -> String {
    context.request().path().to_string()
}

/// Routes without any i18n middleware
pub fn routes() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/missing", get(missing))
        .route("/twice", get(twice))
        .route("/apples", get(apples))
        .route("/locale", get(locale))
        .route("/scoped", get(scoped))
        .route("/context", get(context))
}

/// Routes behind the axum middleware adapter
pub fn router(middleware: I18nMiddleware) -> Router {
    routes().layer(from_fn_with_state(middleware, i18n_middleware))
}

pub fn get_request(uri: &str, accept_language: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = accept_language {
        builder = builder.header(ACCEPT_LANGUAGE, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Send a request and collect status and body text
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send a request expecting a JSON error body
pub async fn send_json(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, req).await;
    (status, serde_json::from_str(&body).unwrap())
}
