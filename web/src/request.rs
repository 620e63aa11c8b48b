//! Framework-neutral view of the request a detector runs against

use axum::http::{
    HeaderMap, Method, Request, Uri,
    header::AsHeaderName,
    request::Parts,
};

use crate::utils::{cookie_value, query_value};

#[derive(Debug, Clone, Default)]
pub struct RequestHead {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

impl RequestHead {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        Self { method, uri, headers }
    }

    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self::new(req.method().clone(), req.uri().clone(), req.headers().clone())
    }

    pub fn from_parts(parts: &Parts) -> Self {
        Self::new(parts.method.clone(), parts.uri.clone(), parts.headers.clone())
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as text; non-UTF-8 values read as absent
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Percent-decoded query parameter
    pub fn query(&self, name: &str) -> Option<String> {
        query_value(&self.uri, name)
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        cookie_value(&self.headers, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_head_accessors() {
        let req = Request::builder()
            .uri("/ja/docs?locale=en%2DUS&page=2")
            .header("accept-language", "ja,en;q=0.5")
            .header("cookie", "theme=dark; i18n_locale=zh")
            .body(Body::empty())
            .unwrap();
        let head = RequestHead::from_request(&req);

        assert_eq!(head.method(), &Method::GET);
        assert_eq!(head.path(), "/ja/docs");
        assert_eq!(head.header("accept-language"), Some("ja,en;q=0.5"));
        assert_eq!(head.header("x-missing"), None);
        assert_eq!(head.query("locale").as_deref(), Some("en-US"));
        assert_eq!(head.query("nothing"), None);
        assert_eq!(head.cookie("i18n_locale").as_deref(), Some("zh"));
    }
}
