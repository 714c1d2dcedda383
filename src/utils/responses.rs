use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Create a 302 redirect
    #[must_use]
    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .append_header(("Location", location))
            .finish()
    }

    /// Create a JSON error body `{"error": .., "message": ..}`
    #[must_use]
    pub fn json_error(status: StatusCode, error: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(serde_json::json!({
            "error": error,
            "message": message
        }))
    }

    /// Create a 200 HTML page
    #[must_use]
    pub fn html(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_redirect_sets_location() {
        let response = ResponseBuilder::redirect("https://example.com/next");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get("Location").unwrap(),
            "https://example.com/next"
        );
    }

    #[actix_web::test]
    async fn test_json_error_body() {
        let response = ResponseBuilder::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "configuration_error",
            "missing key",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "configuration_error");
        assert_eq!(value["message"], "missing key");
    }
}
