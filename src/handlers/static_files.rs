use crate::models::HealthResponse;
use actix_web::{HttpResponse, Result};

/// Health check endpoint
///
/// # Errors
/// Returns an error if health status cannot be determined
pub async fn health() -> Result<HttpResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        message: "Shopee authorization relay is running".to_string(),
    };
    Ok(HttpResponse::Ok().json(response))
}

// Minimal page shown after a redirect; carries no outcome
#[must_use]
pub fn landing_page(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{}</style>
</head>
<body>
    <main>
        <h1>{title}</h1>
        <p>You can close this window.</p>
    </main>
</body>
</html>"#,
        landing_page_styles()
    )
}

const fn landing_page_styles() -> &'static str {
    "body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
     background:#f5f5f5;display:flex;align-items:center;justify-content:center;\
     min-height:100vh;margin:0}main{background:#fff;padding:2rem 3rem;border-radius:8px;\
     box-shadow:0 2px 8px rgba(0,0,0,.1);text-align:center}h1{color:#ee4d2d;font-size:1.4rem}"
}
