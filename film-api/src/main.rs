use film_api::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let guard = init_tracing(&config)?;

    let result = run(config).await;
    if let Err(ref e) = result {
        tracing::error!(error = %e, "Service stopped with an error");
    }

    shutdown_tracing(guard);
    result
}

async fn run(config: Config) -> Result<()> {
    let pool = database::create_pool(&config.database).await?;
    if config.database.run_migrations {
        database::run_migrations(&pool).await?;
    }

    let state = AppState::new(config.clone(), PgFilmRepository::new(pool));
    let app = routes::app(state);

    Server::new(config).serve(app).await
}
