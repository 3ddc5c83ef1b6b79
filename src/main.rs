pub mod types;
pub mod routes;
mod store;

use handle_errors::return_error;
use warp::{http::Method, Filter};
use tracing_subscriber::fmt::format::FmtSpan;
use crate::store::Store;
use config::Config;
use std::collections::HashMap;
use std::env;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Args {
    log_level: String,
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    let config = Config::builder()
        .add_source(config::File::with_name("setup"))
        .build()
        .unwrap();

    let config = config
        .try_deserialize::<Args>()
        .unwrap();

    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| {
            format!("handle_errors={},note_web={},warp={}",
            config.log_level, config.log_level, config.log_level)
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    dotenv::dotenv().expect("could not load the .env file");
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let store = Store::new(&db_url).await;
    sqlx::migrate!()
        .run(&store.connection)
        .await
        .expect("cannot run migrations");
    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type"])
        .allow_methods(&[Method::GET, Method::POST]);

    let get_notes = warp::get()
        .and(warp::path("notes"))
        .and(warp::path::end())
        .and(warp::query::<HashMap<String, String>>())
        .and(store_filter.clone())
        .and_then(routes::note::get_notes)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_notes request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )})
        );

    let add_notes = warp::post()
        .and(warp::path("notes"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::note::add_notes);

    let get_note = warp::get()
        .and(warp::path("notes"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::note::get_note);

    let routes = get_notes
        .or(add_notes)
        .or(get_note)
        .with(warp::trace::request())
        .with(cors)
        .recover(return_error);

    warp::serve(routes)
        .run(([0, 0, 0, 0], config.port))
        .await;

    Ok(())
}
