use std::convert::Infallible;

use axum::{Router, body::Body, http::Request, routing::get};
use tower::{Layer, ServiceBuilder, ServiceExt, service_fn};

use crate::tests::common::{get_request, send, test_options};
use crate::{I18nError, Translation, define_i18n_middleware, scope, use_translation};

#[tokio::test]
async fn test_layer_over_service_fn() {
    let middleware = define_i18n_middleware(test_options());
    let service = ServiceBuilder::new().layer(middleware.layer()).service_fn(
        |req: Request<Body>| async move {
            let t = use_translation(req.extensions()).await?;
            Ok::<_, I18nError>(t.translate("hello", [("name", "tower")]))
        },
    );

    let body = service.oneshot(get_request("/", Some("ja"))).await.unwrap();
    assert_eq!(body, "こんにちは, tower");
}

#[tokio::test]
async fn test_layer_binds_task_local_scope() {
    let middleware = define_i18n_middleware(test_options());
    let service = middleware.layer().layer(service_fn(|_req: Request<Body>| async {
        let t = scope::use_translation().await?;
        Ok::<_, I18nError>(t.locale().to_string())
    }));

    let locale = service.oneshot(get_request("/", Some("en-GB,en;q=0.5"))).await.unwrap();
    assert_eq!(locale, "en-GB");
}

#[tokio::test]
async fn test_inner_error_passes_through() {
    let middleware = define_i18n_middleware(test_options());
    let service = ServiceBuilder::new()
        .layer(middleware.layer())
        .service_fn(|_req: Request<Body>| async { Err::<String, _>(I18nError::NotInitialized) });

    let err = service.oneshot(get_request("/", None)).await.unwrap_err();
    assert_eq!(err.error_code(), 1001);
}

#[tokio::test]
async fn test_layer_on_router() {
    let middleware = define_i18n_middleware(test_options());
    let app = Router::new()
        .route("/", get(|t: Translation| async move { t.translate("hello", [("name", "layer")]) }))
        .layer(middleware.layer());

    let (_, body) = send(app, get_request("/", Some("en"))).await;
    assert_eq!(body, "hello, layer");
}

#[tokio::test]
async fn test_without_layer_not_initialized() {
    let service = service_fn(|req: Request<Body>| async move {
        Ok::<_, Infallible>(use_translation(req.extensions()).await.is_err())
    });

    assert!(service.oneshot(get_request("/", Some("en"))).await.unwrap());
}
