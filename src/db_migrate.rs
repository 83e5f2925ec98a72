use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::info;
use washbook_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

    info!("Connecting to database...");
    let db_pool = create_pool(&database_url, 1).await?;

    info!("Initializing database schema...");
    initialize_database(&db_pool).await?;
    info!("Database schema initialized successfully.");

    Ok(())
}
