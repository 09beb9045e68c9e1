mod handlers;
mod setup;

use actix_web::{App, HttpServer};
use setup::{set_up_tracing, Config};
use tracing_actix_web::TracingLogger;

#[actix_web::main] // The "main" function of the program
async fn main() -> std::io::Result<()> {
    let config = Config::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    set_up_tracing(config.log_format);

    tracing::info!(host = %config.host, port = config.port, "starting server");
    HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
