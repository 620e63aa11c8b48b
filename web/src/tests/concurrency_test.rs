use axum::http::StatusCode;

use crate::tests::common::{en_catalog, get_request, lazy_query_locale, router, send};
use crate::{I18nOptions, define_i18n_middleware};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_keep_their_locale() {
    let middleware = define_i18n_middleware(
        I18nOptions::new().message("en", en_catalog()).locale(lazy_query_locale()),
    );
    let app = router(middleware.clone());

    let mut handles = Vec::new();
    for i in 0..200 {
        let app = app.clone();
        let locale = if i % 2 == 0 { "en" } else { "ja" };
        handles.push(tokio::spawn(async move {
            let uri = format!("/?locale={}&name={}", locale, i);
            let (status, body) = send(app, get_request(&uri, None)).await;
            (locale, i, status, body)
        }));
    }

    for handle in handles {
        let (locale, i, status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        let expected = match locale {
            "en" => format!("hello, {}", i),
            _ => format!("こんにちは, {}", i),
        };
        assert_eq!(body, expected);
    }

    assert_eq!(middleware.i18n().available_locales(), vec!["en", "ja"]);
}
