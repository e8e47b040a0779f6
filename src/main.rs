use astra::Server;
use dotenv::dotenv;
use homes_simple::config::Config;
use homes_simple::db::Database;
use homes_simple::router::handle;
use homes_simple::{shutdown, templates};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::init();

    // 1️⃣ Open the listings database (read-only, once per process)
    let db = match Database::open(&config.database_path) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("❌ Database initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Close it again on SIGHUP/SIGINT/SIGTERM
    if let Err(e) = shutdown::install(db.clone()) {
        tracing::error!("Failed to install signal handlers: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    let addr = config.addr();
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let worker_db = db.clone();
    let result = server.serve(move |req: astra::Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &worker_db) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };

        tracing::info!(
            "{method} {path} -> {} ({} ms)",
            resp.status().as_u16(),
            started.elapsed().as_millis()
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    db.close();
    tracing::info!("Server shut down cleanly.");
}
