mod verify_email;

use test_helpers::{mock, spawn_backend};

#[tokio::test]
async fn verification_endpoint_reachable() -> anyhow::Result<()> {
    let backend = spawn_backend().await;

    let response = backend.verify(mock::VALID_TOKEN).await?;
    assert!(response.success);

    Ok(())
}
