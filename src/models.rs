use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Query parameters Shopee appends to the redirect URL
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectParams {
    pub code: Option<String>,
    pub main_account_id: Option<String>,
}

/// Body posted to the token-exchange backend
///
/// `main_account_id` is always serialized, as `null` when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthCodeRequest {
    pub auth_code: String,
    pub main_account_id: Option<String>,
}

/// JSON wrapper for a generated authorization link
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthLinkResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_code_request_serializes_null_account() {
        let request = AuthCodeRequest {
            auth_code: "ABC123".to_string(),
            main_account_id: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"auth_code":"ABC123","main_account_id":null}"#
        );
    }

    #[test]
    fn test_auth_code_request_keeps_account_as_string() {
        let request = AuthCodeRequest {
            auth_code: "XYZ".to_string(),
            main_account_id: Some("42".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"auth_code":"XYZ","main_account_id":"42"}"#
        );
    }
}
