//! tower adapter
//!
//! [`I18nLayer`] wraps any `Service<http::Request<B>>`. It calls the
//! middleware's request hook before the inner service and its response hook
//! once the inner future settles, whether it succeeded or failed.

use std::task::{Context, Poll};

use axum::http::Request;
use futures::future::BoxFuture;
use tower::{Layer, Service};

use super::scope;
use crate::middleware::I18nMiddleware;
use crate::request::RequestHead;

#[derive(Debug, Clone)]
pub struct I18nLayer {
    middleware: I18nMiddleware,
}

impl I18nLayer {
    pub fn new(middleware: I18nMiddleware) -> Self {
        Self { middleware }
    }
}

impl<S> Layer<S> for I18nLayer {
    type Service = I18nService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        I18nService { inner, middleware: self.middleware.clone() }
    }
}

#[derive(Debug, Clone)]
pub struct I18nService<S> {
    inner: S,
    middleware: I18nMiddleware,
}

impl<S, B> Service<Request<B>> for I18nService<S>
where
    S: Service<Request<B>> + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let context = self.middleware.on_request(RequestHead::from_request(&req));
        req.extensions_mut().insert(context.clone());

        let middleware = self.middleware.clone();
        let future = self.inner.call(req);
        Box::pin(async move {
            let result = scope::run(context.clone(), future).await;
            middleware.on_response(context);
            result
        })
    }
}
