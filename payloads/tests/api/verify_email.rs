use payloads::{APIClient, ClientError, VerificationToken, responses};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, mock, spawn_backend};

#[tokio::test]
async fn test_verify_email_with_message() -> anyhow::Result<()> {
    let backend = spawn_backend().await;

    let response = backend.verify(mock::VALID_TOKEN).await?;
    assert_eq!(
        response,
        responses::VerifyEmail::verified(mock::VERIFIED_MESSAGE)
    );
    assert_eq!(backend.received.all(), vec![mock::VALID_TOKEN.to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_verify_email_without_message() -> anyhow::Result<()> {
    let backend = spawn_backend().await;

    let response = backend.verify(mock::QUIET_TOKEN).await?;
    assert!(response.success);
    assert_eq!(response.message, None);

    Ok(())
}

#[tokio::test]
async fn test_verify_email_declined_with_ok_status() -> anyhow::Result<()> {
    let backend = spawn_backend().await;

    // A 2xx with success: false is still a decoded body; the caller decides
    let response = backend.verify(mock::DECLINED_TOKEN).await?;
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some(mock::DECLINED_MESSAGE));

    Ok(())
}

#[tokio::test]
async fn test_verify_email_with_expired_token() {
    let backend = spawn_backend().await;

    let result = backend.verify(mock::EXPIRED_TOKEN).await;
    let error = result.as_ref().unwrap_err();
    assert_eq!(error.server_message().as_deref(), Some(mock::EXPIRED_MESSAGE));
    assert_status_code(result, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verify_email_with_unknown_token() {
    let backend = spawn_backend().await;

    let result = backend.verify("00000000-0000-0000-0000-000000000000").await;
    let error = result.as_ref().unwrap_err();
    assert_eq!(
        error.server_message().as_deref(),
        Some(mock::UNKNOWN_TOKEN_MESSAGE)
    );
    assert_status_code(result, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_verify_email_with_server_error() {
    let backend = spawn_backend().await;

    let result = backend.verify(mock::BROKEN_TOKEN).await;
    // Plain text bodies carry no usable message
    assert_eq!(result.as_ref().unwrap_err().server_message(), None);
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_verify_email_network_error() {
    // Grab a free port, then release it so nothing is listening
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = APIClient {
        address: format!("http://127.0.0.1:{port}/api"),
        inner_client: reqwest::Client::new(),
    };

    let token = VerificationToken::parse(mock::VALID_TOKEN).unwrap();
    let result = client.verify_email(&token).await;
    match result {
        Err(error @ ClientError::Network(_)) => {
            assert_eq!(error.server_message(), None)
        }
        other => panic!("Expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_each_call_reaches_backend_once() -> anyhow::Result<()> {
    let backend = spawn_backend().await;

    backend.verify(mock::VALID_TOKEN).await?;
    backend.verify(mock::QUIET_TOKEN).await?;
    backend.verify(mock::VALID_TOKEN).await?;

    assert_eq!(backend.received.count(mock::VALID_TOKEN), 2);
    assert_eq!(backend.received.count(mock::QUIET_TOKEN), 1);

    Ok(())
}
