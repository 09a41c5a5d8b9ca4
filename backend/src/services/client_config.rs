//! `GET /api/config`: tells the frontend where the anonymization service
//! lives.

use actix_web::web::{self, get};
use actix_web::{HttpResponse, Resource, Responder};

use crate::config::ServerConfig;

const API_PATH: &str = "/api/config";

pub fn configure_routes() -> Resource {
    web::resource(API_PATH).route(get().to(process))
}

pub async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    log::info!("Client configuration requested");
    HttpResponse::Ok().json(config.client_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use common::model::config::ClientConfig;

    #[actix_web::test]
    async fn publishes_the_configured_service_address() {
        let config = ServerConfig::from_lookup(|var| {
            (var == "ANONYMIZER_SERVICE_URL").then(|| "http://anon:5000".to_string())
        })
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(API_PATH).to_request();
        let body: ClientConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.service_base_url, "http://anon:5000");
    }
}
