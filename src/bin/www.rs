use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use wcfinals::config::ServerConfig;
use wcfinals::finals::Finals;
use wcfinals::www;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let config = ServerConfig::from_env()?;
    let finals = web::Data::new(Finals::builtin().context("invalid built-in dataset")?);
    let engine = web::Data::new(www::handlers::template::new_engine()?);
    let bind_address = config.socket_address();

    log::info!(
        "Starting server at: http://{} ({} finals loaded)",
        bind_address,
        finals.len()
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(finals.clone())
            .app_data(engine.clone())
            .configure(www::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {bind_address}"))?
    .run()
    .await?;
    Ok(())
}
