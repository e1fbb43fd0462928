use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;

use tracing::info;

use chirp::{AppConfig, ApplicationServer, DynMediaStore, Logger, RedisDatabase, S3MediaStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Arc::new(AppConfig::parse());

    // init logger and sentry, guards are kept alive to flush logs and maintain sentry connection
    let _guards = Logger::init(config.cargo_env, config.sentry_dsn.clone());

    info!("logger and env prepped...");

    info!("connecting to redis...");

    let redis_db = RedisDatabase::connect(&config.redis_url)
        .await
        .context("redis connection failed")?;

    let media_store = Arc::new(S3MediaStore::connect(&config)) as DynMediaStore;

    // statuses optionally live in postgres, see AppConfig::database_url
    let pg_pool = match &config.database_url {
        Some(url) => {
            info!("connecting to postgres...");
            let pool = PgPoolOptions::new()
                .max_connections(16)
                .connect(url)
                .await
                .context("postgres connection failed")?;

            if config.run_migrations {
                info!("running migrations...");
                sqlx::migrate!().run(&pool).await.context("migrations failed")?;
            }

            Some(pool)
        }
        None => None,
    };

    info!("storage ok, starting server...");

    ApplicationServer::serve(config, redis_db, media_store, pg_pool)
        .await
        .context("server failed to start")?;

    Ok(())
}
