//! HTTP response handling.
//!
//! A [`Response`] lives only for the duration of one fetch: the transport
//! produces it, the status check inspects it, and the decoder consumes its
//! body.
//!
//! # Example
//!
//! ```ignore
//! let user: User = response.error_for_status()?.json()?;
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Error, Result};

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Canonical reason phrase for the status, when one exists.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
    }

    /// Response headers, keyed by lowercase name.
    ///
    /// One entry per name: a transport folds repeated headers into a single
    /// comma-separated value, so `Set-Cookie` style headers that cannot be
    /// joined lose their boundaries. Values are text, with invalid UTF-8
    /// replaced.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl Response<Bytes> {
    /// Pass a 2xx response through, turn anything else into [`Error::Status`].
    ///
    /// The body is kept on the error so callers can inspect what the server
    /// sent back.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else if self.body.is_empty() {
            Err(Error::status_code(self.status))
        } else {
            Err(Error::status_with_body(self.status, self.body))
        }
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        crate::from_json(&self.body)
    }

    /// Get the response body as text.
    pub fn text(self) -> Result<String> {
        crate::from_utf8(self.body)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"age":42}"#));

        check!(response.status() == 200);
        check!(response.reason() == Some("OK"));
        check!(response.header("content-type") == Some("application/json"));
        check!(response.is_success());
        check!(!response.is_client_error());
        check!(!response.is_server_error());
    }

    #[test]
    fn response_status_checks() {
        let response = Response::new(404, HashMap::new(), Bytes::new());
        check!(response.is_client_error());
        check!(response.reason() == Some("Not Found"));

        let response = Response::new(500, HashMap::new(), Bytes::new());
        check!(response.is_server_error());

        let response = Response::new(299, HashMap::new(), Bytes::new());
        check!(response.is_success());
        let response = Response::new(300, HashMap::new(), Bytes::new());
        check!(!response.is_success());
    }

    #[test]
    fn error_for_status_passes_success() {
        let response = Response::new(204, HashMap::new(), Bytes::new());
        let_assert!(Ok(response) = response.error_for_status());
        check!(response.status() == 204);
    }

    #[test]
    fn error_for_status_keeps_body() {
        let body = Bytes::from(r#"{"error":"missing 'name' parameter"}"#);
        let response = Response::new(422, HashMap::new(), body.clone());

        let_assert!(Err(err) = response.error_for_status());
        check!(err.status() == Some(422));
        check!(err.body() == Some(&body));

        let response = Response::new(500, HashMap::new(), Bytes::new());
        let_assert!(Err(err) = response.error_for_status());
        check!(err.body().is_none());
        check!(err.to_string().contains("500"));
    }

    #[test]
    fn response_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Person {
            name: String,
            age: u32,
        }

        let body = Bytes::from(r#"{"name":"meelad","age":42}"#);
        let response = Response::new(200, HashMap::new(), body);

        let_assert!(Ok(person) = response.json::<Person>());
        check!(
            person
                == Person {
                    name: "meelad".to_string(),
                    age: 42
                }
        );
    }

    #[test]
    fn response_text() {
        let response = Response::new(200, HashMap::new(), Bytes::from("Data fetched"));
        let_assert!(Ok(text) = response.text());
        check!(text == "Data fetched");
    }
}
