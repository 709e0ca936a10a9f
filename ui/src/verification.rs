//! Email verification state machine.
//!
//! [`run_verification`] drives one verification attempt: it reports
//! [`VerificationStatus::Verifying`], issues a single request, reports the
//! terminal status, and on success waits [`REDIRECT_DELAY`] before asking
//! for a redirect. It is generic over the HTTP call and the timer so the
//! same procedure runs in the browser and under a paused Tokio clock.
//!
//! Wrap the procedure with [`cancellable`] and abort it on teardown; an
//! aborted attempt reports nothing further and never redirects.

use futures::future::{AbortHandle, abortable};
use payloads::{APIClient, ClientError, VerificationToken, responses};
use std::future::Future;
use std::time::Duration;

/// Time between a successful verification and the redirect to login.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(3000);

pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Your email has been verified successfully!";
pub const DEFAULT_ERROR_MESSAGE: &str =
    "Verification failed. The link may be expired or invalid.";
pub const MISSING_TOKEN_MESSAGE: &str = "No verification token provided.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    Verifying,
    Success { message: String },
    Error { message: String },
}

impl VerificationStatus {
    /// Map the outcome of the verification call to a terminal status.
    ///
    /// Only a decoded body with `success: true` verifies. Server-provided
    /// messages win over the defaults when they are non-empty.
    pub fn from_response(
        result: Result<responses::VerifyEmail, ClientError>,
    ) -> Self {
        match result {
            Ok(responses::VerifyEmail {
                success: true,
                message,
            }) => VerificationStatus::Success {
                message: non_empty(message)
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            },
            Ok(responses::VerifyEmail {
                success: false,
                message,
            }) => VerificationStatus::Error {
                message: non_empty(message)
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            },
            Err(e) => VerificationStatus::Error {
                message: e
                    .server_message()
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            },
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

/// The backend call that consumes a verification token.
#[allow(async_fn_in_trait)]
pub trait EmailVerifier {
    async fn verify_email(
        &self,
        token: &VerificationToken,
    ) -> Result<responses::VerifyEmail, ClientError>;
}

impl EmailVerifier for APIClient {
    async fn verify_email(
        &self,
        token: &VerificationToken,
    ) -> Result<responses::VerifyEmail, ClientError> {
        APIClient::verify_email(self, token).await
    }
}

/// One-shot delays.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by `setTimeout`. Dropping the sleep clears the timeout.
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Run one verification attempt for the route-supplied token.
///
/// `on_status` is called with `Verifying` first and then exactly once with
/// a terminal status. `on_redirect` is called only after a successful
/// verification, [`REDIRECT_DELAY`] after the success status was reported.
pub async fn run_verification<V, T>(
    verifier: &V,
    timer: &T,
    token: Option<&str>,
    on_status: impl Fn(VerificationStatus),
    on_redirect: impl FnOnce(),
) where
    V: EmailVerifier,
    T: Timer,
{
    on_status(VerificationStatus::Verifying);

    let Some(token) = token.and_then(VerificationToken::parse) else {
        tracing::warn!("Email verification opened without a token");
        on_status(VerificationStatus::Error {
            message: MISSING_TOKEN_MESSAGE.to_string(),
        });
        return;
    };

    let result = verifier.verify_email(&token).await;
    match &result {
        Ok(response) if !response.success => {
            tracing::warn!("Email verification declined by server")
        }
        Ok(_) => tracing::info!("Email verified"),
        Err(e) => tracing::warn!("Email verification failed: {e:?}"),
    }

    let status = VerificationStatus::from_response(result);
    let verified = matches!(status, VerificationStatus::Success { .. });
    on_status(status);
    if !verified {
        return;
    }

    timer.sleep(REDIRECT_DELAY).await;
    tracing::debug!("Redirecting to login after verification");
    on_redirect();
}

/// Make a future abortable from teardown.
///
/// Once the handle is aborted the future is dropped at its next wakeup, so
/// no callback inside it runs afterwards.
pub fn cancellable<F>(future: F) -> (impl Future<Output = ()>, AbortHandle)
where
    F: Future<Output = ()>,
{
    let (future, handle) = abortable(future);
    let task = async move {
        if future.await.is_err() {
            tracing::debug!("Email verification cancelled");
        }
    };
    (task, handle)
}
