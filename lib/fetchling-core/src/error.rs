//! Error types for fetchling.
//!
//! Every failure of a fetch (transport, status, decode) and of the division
//! example travels on the single [`Error`] channel. Callers that only need a
//! message can rely on `Display`; callers that want to branch can use the
//! predicates.

use derive_more::{Display, Error, From};

/// Main error type for fetchling operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The response arrived but its status is outside the 2xx range.
    #[display("HTTP error! Status: {status}")]
    #[from(skip)]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if the transport buffered one.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// The transport could not reach the remote end.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS handshake or certificate failure.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// A transport or caller deadline elapsed before the exchange settled.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The locator was rejected before any I/O happened.
    #[display("invalid locator: {_0}")]
    #[from(skip)]
    InvalidLocator(#[error(not(source))] String),

    /// The locator is not a valid URL.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The body could not be turned into the requested value.
    #[display("decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// Path to the offending value (e.g. `user.address.city`), `.` for the root.
        path: String,
        /// Underlying decoder message.
        message: String,
    },

    /// Division by zero in the division example.
    #[display("Cannot divide by zero!")]
    #[from(skip)]
    DivideByZero,

    /// A callback-style operation finished without delivering its result.
    #[display("callback dropped before delivering a result")]
    #[from(skip)]
    Callback,
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a status error without a body.
    #[must_use]
    pub const fn status_code(status: u16) -> Self {
        Self::Status { status, body: None }
    }

    /// Create a status error that keeps the response body.
    #[must_use]
    pub fn status_with_body(status: u16, body: bytes::Bytes) -> Self {
        Self::Status {
            status,
            body: Some(body),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid locator error.
    #[must_use]
    pub fn invalid_locator(message: impl Into<String>) -> Self {
        Self::InvalidLocator(message.into())
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the transport failed to produce a response at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Tls(_) | Self::Timeout | Self::InvalidUrl(_)
        )
    }

    /// Returns `true` if the body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the HTTP status code if this is a status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the response body if this is a status error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the body of a status error as JSON.
    ///
    /// Returns `None` when there is no body or this is not a status error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ApiError {
    ///     error: String,
    /// }
    ///
    /// if let Err(err) = fetcher.fetch_and_parse(locator).await {
    ///     match err.decode_body::<ApiError>() {
    ///         Some(Ok(api)) => eprintln!("API said: {}", api.error),
    ///         _ => eprintln!("{err}"),
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}
