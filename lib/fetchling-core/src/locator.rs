//! Resource locators.
//!
//! A [`Locator`] is the caller-supplied identity of the resource to fetch.
//! Only emptiness is checked here; whether the text is a usable URL is the
//! transport's business.

use derive_more::Display;

use crate::{Error, Result};

/// An opaque, non-empty resource locator.
///
/// # Example
///
/// ```
/// use fetchling_core::Locator;
///
/// let locator = Locator::new("https://api.agify.io/?name=meelad").expect("non-empty");
/// assert_eq!(locator.as_str(), "https://api.agify.io/?name=meelad");
/// assert!(Locator::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Locator(String);

impl Locator {
    /// Creates a locator, rejecting empty or whitespace-only input.
    pub fn new(locator: impl Into<String>) -> Result<Self> {
        let locator = locator.into();
        if locator.trim().is_empty() {
            return Err(Error::invalid_locator("locator must not be empty"));
        }
        Ok(Self(locator))
    }

    /// The locator text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the locator as a URL.
    pub fn to_url(&self) -> Result<url::Url> {
        url::Url::parse(&self.0).map_err(Into::into)
    }

    /// Consume into the locator text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Locator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Locator {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl std::str::FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn rejects_empty() {
        let_assert!(Err(err) = Locator::new(""));
        check!(matches!(err, Error::InvalidLocator(_)));
        check!(Locator::new(" \t").is_err());
    }

    #[test]
    fn keeps_text_verbatim() {
        let locator: Locator = "https://api.example.test/?name=meelad".parse().expect("locator");
        check!(locator.as_str() == "https://api.example.test/?name=meelad");
        check!(locator.to_string() == "https://api.example.test/?name=meelad");
        let text: &str = locator.as_ref();
        check!(text == locator.as_str());
    }

    #[test]
    fn url_parsing_is_deferred() {
        let locator = Locator::new("not a url").expect("non-empty is accepted");
        let_assert!(Err(err) = locator.to_url());
        check!(matches!(err, Error::InvalidUrl(_)));
    }
}
