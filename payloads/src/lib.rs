pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;

/// Opaque token issued by the backend to authorize one email verification.
///
/// Carried in the URL path of the verification link. Never modified once
/// read from the route.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Wrap a route-supplied token. Empty or all-whitespace input is not a
    /// token.
    pub fn parse(token: &str) -> Option<Self> {
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::VerificationToken;

    #[test]
    fn test_parse_token() {
        let token = VerificationToken::parse("abc-123").unwrap();
        assert_eq!(token.as_str(), "abc-123");
        assert_eq!(token.to_string(), "abc-123");

        // Surrounding whitespace is part of the opaque value
        assert_eq!(VerificationToken::parse(" a ").unwrap().as_str(), " a ");

        assert!(VerificationToken::parse("").is_none());
        assert!(VerificationToken::parse("   ").is_none());
    }
}
