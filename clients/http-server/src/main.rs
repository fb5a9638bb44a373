use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web, App, HttpServer,
};
use clap::Parser;
use people_database::database::{database::Database, options::DatabaseOptions};
use std::io;

mod routes;

/// 🏎️ People API, a small in-memory list of people served over HTTP
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, env = "ADDRESS", default_value = "0.0.0.0")]
    address: String,

    /// Logs every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let request_manager = Database::new(DatabaseOptions::default()).run();

    let shutdown_request_manager = request_manager.clone();

    let log_http = args.log_http;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(request_manager.clone()))
            .configure(routes::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?;

    log::info!("Server running on port {}", args.port);

    // Returns once actix has handled a shutdown signal (e.g. Ctrl-C) and drained its workers
    server.run().await?;

    match shutdown_request_manager.send_shutdown_request() {
        Ok(status) => log::info!("Shutting down server: {}", status),
        Err(err) => log::error!("Database did not shut down cleanly: {}", err),
    }

    Ok(())
}
