//! Mock of the backend's email verification endpoint.
//!
//! Responses are keyed on the token so every outcome the verification page
//! handles can be produced on demand:
//!
//! | token              | status | body                                   |
//! |--------------------|--------|----------------------------------------|
//! | [`VALID_TOKEN`]    | 200    | `{"success": true, "message": ...}`    |
//! | [`QUIET_TOKEN`]    | 200    | `{"success": true}`                    |
//! | [`DECLINED_TOKEN`] | 200    | `{"success": false, "message": ...}`   |
//! | [`EXPIRED_TOKEN`]  | 400    | `{"success": false, "message": ...}`   |
//! | [`BROKEN_TOKEN`]   | 500    | plain text                             |
//! | [`SLOW_TOKEN`]     | 200    | as `VALID_TOKEN`, after [`SLOW_DELAY`] |
//! | anything else      | 404    | `{"success": false, "message": ...}`   |

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpResponse, HttpServer, post, web};
use payloads::responses;
use serde_json::json;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const VALID_TOKEN: &str = "valid-token";
pub const QUIET_TOKEN: &str = "quiet-token";
pub const DECLINED_TOKEN: &str = "declined-token";
pub const EXPIRED_TOKEN: &str = "expired-token";
pub const BROKEN_TOKEN: &str = "broken-token";
pub const SLOW_TOKEN: &str = "slow-token";

pub const VERIFIED_MESSAGE: &str = "Email verified successfully!";
pub const DECLINED_MESSAGE: &str = "This email address is already verified.";
pub const EXPIRED_MESSAGE: &str = "Verification link has expired.";
pub const UNKNOWN_TOKEN_MESSAGE: &str = "Invalid verification token.";

pub const SLOW_DELAY: Duration = Duration::from_secs(2);

/// Every token the mock has been asked to verify, in arrival order.
#[derive(Clone, Default)]
pub struct ReceivedTokens(Arc<Mutex<Vec<String>>>);

impl ReceivedTokens {
    fn record(&self, token: &str) {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(token.to_string());
    }

    pub fn all(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count(&self, token: &str) -> usize {
        self.all().iter().filter(|t| t.as_str() == token).count()
    }
}

#[tracing::instrument(skip(received))]
#[post("/auth/verify-email/{token}")]
async fn verify_email(
    token: web::Path<String>,
    received: web::Data<ReceivedTokens>,
) -> HttpResponse {
    let token = token.into_inner();
    received.record(&token);

    match token.as_str() {
        VALID_TOKEN => HttpResponse::Ok()
            .json(responses::VerifyEmail::verified(VERIFIED_MESSAGE)),
        QUIET_TOKEN => HttpResponse::Ok().json(json!({ "success": true })),
        DECLINED_TOKEN => HttpResponse::Ok()
            .json(responses::VerifyEmail::rejected(DECLINED_MESSAGE)),
        EXPIRED_TOKEN => HttpResponse::BadRequest()
            .json(responses::VerifyEmail::rejected(EXPIRED_MESSAGE)),
        BROKEN_TOKEN => HttpResponse::InternalServerError()
            .content_type("text/plain")
            .body("upstream exploded"),
        SLOW_TOKEN => {
            tokio::time::sleep(SLOW_DELAY).await;
            HttpResponse::Ok()
                .json(responses::VerifyEmail::verified(VERIFIED_MESSAGE))
        }
        _ => {
            tracing::info!("Unknown verification token");
            HttpResponse::NotFound()
                .json(responses::VerifyEmail::rejected(UNKNOWN_TOKEN_MESSAGE))
        }
    }
}

/// Build the mock server, but not await it.
///
/// Binding to port 0 gets an OS-assigned port; the bound port is returned
/// alongside the server. Routes live under `/api` so the API base seen by
/// clients is `http://{ip}:{port}/api`.
pub fn build(
    ip: &str,
    port: u16,
    received: ReceivedTokens,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let received = web::Data::new(received);

    let server = HttpServer::new(move || {
        App::new()
            // The ui is served from a different origin during development
            .wrap(Cors::permissive())
            .service(web::scope("/api").service(verify_email))
            .app_data(received.clone())
    })
    .listen(listener)?
    .run();

    Ok((server, port))
}
