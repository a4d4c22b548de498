use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenError {
    #[error("auth token cannot be empty")]
    Empty,
}

/// Bearer token sent with authenticated requests.
///
/// The value is opaque to the client. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// # Errors
    ///
    /// Returns `TokenError::Empty` if the token is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, TokenError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected() {
        assert_eq!(AuthToken::new("   "), Err(TokenError::Empty));
    }

    #[test]
    fn token_is_trimmed_and_redacted() {
        let token = AuthToken::new(" abc.def \n").unwrap();
        assert_eq!(token.as_str(), "abc.def");
        assert_eq!(token.bearer(), "Bearer abc.def");
        assert_eq!(format!("{token:?}"), "AuthToken(***)");
    }
}
