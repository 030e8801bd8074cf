use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderValue, StatusCode};

#[derive(Debug)]
pub struct ResponseCtx {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseCtx {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 301 response pointing at `location`, with an empty body.
    ///
    /// `location` is expected to already be normalized/escaped; a value that
    /// still cannot be carried in a header degrades to the site root rather
    /// than panicking mid-request.
    pub fn moved_permanently(location: &str) -> Self {
        let mut headers = HeaderMap::new();

        let value =
            HeaderValue::from_str(location).unwrap_or_else(|_| HeaderValue::from_static("/"));
        headers.insert(LOCATION, value);

        Self::new(StatusCode::MOVED_PERMANENTLY, headers, Vec::new())
    }

    /// 200 response carrying a full HTML page body.
    pub fn html_page(body: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );

        Self::new(StatusCode::OK, headers, body.into_bytes())
    }

    /// `Location` header as a string, if one is set.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }
}
