use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::encoding::to_body_string;
use crate::errors::Result;

pub const STATUS_OK: u16 = 200;
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";
pub const HELLO_MESSAGE: &str = "Hello from Lambda!";

/// The JSON document carried in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponsePayload {
    pub message: String,
}

impl Default for ResponsePayload {
    fn default() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}

/// HTTP-shaped result in the format API Gateway and function URLs expect back
/// from a proxy integration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    /// Ordered so that repeated serialization is byte-identical.
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    /// Builds a response whose body is `payload` encoded as JSON, tagged with
    /// `Content-Type: application/json`.
    pub fn json<T>(status_code: u16, payload: &T) -> Result<Self>
    where
        T: ?Sized + Serialize,
    {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), APPLICATION_JSON.to_string());

        Ok(Self {
            status_code,
            headers,
            body: to_body_string(payload)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_payload() {
        assert_eq!(ResponsePayload::default().message, "Hello from Lambda!");
    }

    #[test]
    fn test_json_response_fields() {
        let response = HttpResponse::json(STATUS_OK, &ResponsePayload::default()).unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers.len(), 1);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body, r#"{"message": "Hello from Lambda!"}"#);
    }

    #[test]
    fn test_serialized_field_names() {
        let response = HttpResponse::json(404, &json!({"error": "not found"})).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "statusCode": 404,
                "headers": {"Content-Type": "application/json"},
                "body": "{\"error\": \"not found\"}"
            })
        );
    }
}
