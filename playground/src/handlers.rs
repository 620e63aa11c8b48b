use std::collections::HashMap;

use axum::{
    Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, Uri},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use lingo_web::{
    DetectedLocale, I18nMiddleware, I18nResult, Translation, i18n_middleware,
    utils::{HeaderOptions, QueryOptions, SetCookieOptions, get_header_locale, get_query_locale, set_cookie_locale},
};

pub fn router(middleware: I18nMiddleware) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/:lang/hello", get(greeting))
        .route("/apples", get(apples))
        .route("/locale", get(current_locale))
        .route("/locale/:tag", post(change_locale))
        .route("/header", get(header_locale))
        .route("/query", get(query_locale))
        .layer(from_fn_with_state(middleware, i18n_middleware))
}

/// GET / - greet `name` in the detected locale
async fn greeting(t: Translation, Query(params): Query<HashMap<String, String>>) -> String {
    let name = params.get("name").map(String::as_str).unwrap_or("lingo");
    t.translate("hello", [("name", name)])
}

/// GET /apples?count=N - plural choice
async fn apples(t: Translation, Query(params): Query<HashMap<String, String>>) -> String {
    let count = params.get("count").and_then(|count| count.parse::<i64>().ok()).unwrap_or(0);
    t.translate("apples", count)
}

async fn current_locale(t: Translation, DetectedLocale(locale): DetectedLocale) -> String {
    t.translate("locale.current", vec![locale.to_string()])
}

/// POST /locale/:tag - persist the locale in the `i18n_locale` cookie
async fn change_locale(
    t: Translation,
    Path(tag): Path<String>,
) -> I18nResult<(StatusCode, HeaderMap, String)> {
    let mut headers = HeaderMap::new();
    set_cookie_locale(&mut headers, &tag, &SetCookieOptions::default())?;
    let message = t.translate("locale.changed", [("locale", tag)]);
    Ok((StatusCode::OK, headers, message))
}

/// GET /header - locale of the `Accept-Language` header, without the middleware detector
async fn header_locale(headers: HeaderMap) -> I18nResult<String> {
    Ok(get_header_locale(&headers, &HeaderOptions::default())?.to_string())
}

/// GET /query - locale of the `locale` query parameter
async fn query_locale(uri: Uri) -> I18nResult<String> {
    Ok(get_query_locale(&uri, &QueryOptions::default())?.to_string())
}
