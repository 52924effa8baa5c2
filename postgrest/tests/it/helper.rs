use postgrest::{PostgrestAdapter, Settings};
use wiremock::MockServer;

pub const API_KEY: &str = "test-anon-key";

pub struct TestHelper {
    pub mock_server: MockServer,
    pub adapter: PostgrestAdapter,
}

impl TestHelper {
    pub async fn new() -> TestHelper {
        let mock_server = MockServer::start().await;

        let settings = Settings {
            url: format!("{}/", mock_server.uri()),
            api_key: API_KEY.to_string(),
            timeout: None,
            max_retries: Some(0),
        };
        let adapter = PostgrestAdapter::new(&settings).unwrap();

        TestHelper {
            mock_server,
            adapter,
        }
    }
}
