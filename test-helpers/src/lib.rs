pub mod mock;
pub mod telemetry;

use mock::ReceivedTokens;
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct MockBackend {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub received: ReceivedTokens,
}

impl MockBackend {
    /// Verify a token through the client, skipping the route parsing the ui
    /// does.
    pub async fn verify(
        &self,
        token: &str,
    ) -> Result<payloads::responses::VerifyEmail, payloads::ClientError> {
        let token = payloads::VerificationToken::parse(token)
            .expect("test tokens are non-empty");
        self.client.verify_email(&token).await
    }
}

pub async fn spawn_backend_on_port(port: u16) -> MockBackend {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let received = ReceivedTokens::default();
    let (server, port) =
        mock::build("127.0.0.1", port, received.clone()).unwrap();
    tokio::spawn(server);

    MockBackend {
        port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{port}/api"),
            inner_client: reqwest::Client::new(),
        },
        received,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_backend() -> MockBackend {
    spawn_backend_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
