use crate::{VerificationToken, responses};
use reqwest::{StatusCode, Url};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// `address` is the API base, e.g. `http://localhost:5000/api`. Endpoint
/// paths are appended to it segment by segment.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.address)
            .map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidBaseUrl(format!(
                    "{} cannot be used as a base",
                    self.address
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn empty_post(&self, url: Url) -> ReqwestResult {
        let request = self.inner_client.post(url);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// The endpoint a verification token is posted to. The token is
    /// percent-encoded as a single path segment.
    pub fn verify_email_url(
        &self,
        token: &VerificationToken,
    ) -> Result<Url, ClientError> {
        self.format_url(["auth", "verify-email", token.as_str()])
    }

    /// Verify an email address using the token from the verification link.
    ///
    /// A 2xx response whose body does not decode is reported as a network
    /// error; callers decide what `success: false` means.
    pub async fn verify_email(
        &self,
        token: &VerificationToken,
    ) -> Result<responses::VerifyEmail, ClientError> {
        let url = self.verify_email_url(token)?;
        let response = self.empty_post(url).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// The `message` field of a JSON error body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::APIError(_, text) => {
                serde_json::from_str::<responses::ErrorBody>(text)
                    .ok()?
                    .message
                    .filter(|message| !message.trim().is_empty())
            }
            _ => None,
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(address: &str) -> APIClient {
        APIClient {
            address: address.to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn token(s: &str) -> VerificationToken {
        VerificationToken::parse(s).unwrap()
    }

    #[test]
    fn test_verify_email_url() {
        let url = client("http://localhost:5000/api")
            .verify_email_url(&token("abc123"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/auth/verify-email/abc123"
        );

        // Trailing slash on the base does not double up
        let url = client("https://example.com/api/")
            .verify_email_url(&token("abc123"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/auth/verify-email/abc123"
        );
    }

    #[test]
    fn test_verify_email_url_encodes_token() {
        let url = client("http://localhost:5000/api")
            .verify_email_url(&token("a b/c?d"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/auth/verify-email/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = client("not a url").verify_email_url(&token("abc"));
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));

        let result = client("mailto:someone").verify_email_url(&token("abc"));
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_server_message() {
        let error = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            r#"{"success": false, "message": "Token expired"}"#.into(),
        );
        assert_eq!(error.server_message().as_deref(), Some("Token expired"));

        let error = ClientError::APIError(
            StatusCode::BAD_GATEWAY,
            "<html>Bad Gateway</html>".into(),
        );
        assert_eq!(error.server_message(), None);

        let error = ClientError::APIError(
            StatusCode::NOT_FOUND,
            r#"{"message": "  "}"#.into(),
        );
        assert_eq!(error.server_message(), None);

        let error = ClientError::InvalidBaseUrl("x".into());
        assert_eq!(error.server_message(), None);
    }
}
