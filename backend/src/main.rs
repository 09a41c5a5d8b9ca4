mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let url = config.address();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    if !config.static_dir.join("index.html").is_file() {
        warn!(
            "No frontend build found in {}; only the API will be useful",
            config.static_dir.display()
        );
    }
    if config.stub_service {
        info!("Stub anonymization service enabled");
    }
    info!("Anonymization service expected at {}", config.service_url);
    info!("Server running at {}", url);

    let bind = (config.host.clone(), config.port);
    let stub_service = config.stub_service;
    let config = web::Data::new(config);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(config.clone())
            .service(services::client_config::configure_routes());
        let app = if stub_service {
            app.service(services::stub::configure_routes())
        } else {
            app
        };
        app.default_service(web::route().to(services::assets::process))
    })
        .bind(bind)?
        .run()
        .await
}
