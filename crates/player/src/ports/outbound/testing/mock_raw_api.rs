use mockall::mock;
use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

mock! {
    pub RawApi {}

    #[async_trait::async_trait]
    impl RawApiPort for RawApi {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
        async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;
        async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;
        async fn delete(&self, path: &str) -> Result<(), ApiError>;
    }
}
