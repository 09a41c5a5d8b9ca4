use actix_web::{web, HttpResponse, Responder};
use common::requests::TextAnonymizationRequest;

use super::StubError;

/// Converts the internal result to an `HttpResponse`: the text as a bare JSON
/// string on success, `{"error": ...}` otherwise.
pub async fn process(payload: web::Json<TextAnonymizationRequest>) -> impl Responder {
    match anonymize_text(&payload) {
        Ok(text) => {
            log::info!("Stub anonymized {} characters of text", text.chars().count());
            HttpResponse::Ok().json(text)
        }
        Err(e) => {
            log::warn!("Rejected text request: {}", e);
            HttpResponse::from_error(e)
        }
    }
}

pub fn anonymize_text(request: &TextAnonymizationRequest) -> Result<String, StubError> {
    if request.text.trim().is_empty() {
        return Err(StubError::EmptyText);
    }
    Ok(request.text.clone())
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn text_is_echoed_as_a_bare_string() {
        let app = test::init_service(App::new().service(configure_routes())).await;

        for uri in ["/api/anonymize/text/", "/api/anonymize/text"] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_json(json!({ "text": "John lives in Paris" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, json!("John lives in Paris"));
        }
    }

    #[actix_web::test]
    async fn blank_text_is_rejected() {
        let app = test::init_service(App::new().service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/anonymize/text/")
            .set_json(json!({ "text": "  " }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "Text is empty" }));
    }

    #[actix_web::test]
    async fn undecodable_body_keeps_the_error_contract() {
        let app = test::init_service(App::new().service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/anonymize/text/")
            .set_json(json!({ "txt": "a" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid request body"));
        assert!(message.contains("text"));
    }
}
