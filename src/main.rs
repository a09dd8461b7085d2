use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};

use jobhive::{app, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = app::assemble(&config).expect("Failed to assemble application");

    log::info!("Starting JobHive server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(app::configure(state.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
