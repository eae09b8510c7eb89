//! Prints which database the server would use with the current environment.
//!
//! Runs the same selection as the server (PostgreSQL when configured and
//! reachable, SQLite file otherwise), creates the schema if needed, then
//! prints the `/debug/db` report.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use souvenir::backend::diagnostics::DebugReport;
    use souvenir::backend::server::config::ServerConfig;
    use souvenir::backend::Database;

    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .init();

    let config = ServerConfig::from_env()?;

    println!("DEBUGGING DATABASE CONNECTION");
    println!("=============================");
    println!("Environment:  {}", config.environment_name());
    match config.database.connection_url() {
        Some(_) => println!("Networked DB: configured"),
        None => println!("Networked DB: not configured"),
    }
    println!("SQLite path:  {}", config.database.sqlite_path);

    let db = Database::prepare(&config.database).await?;
    println!("\nSelected backend: {}", db.kind().as_str());

    match DebugReport::collect(&db, &config).await {
        Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
        Err(e) => {
            println!("Diagnostics failed: {}", e);
            db.close().await;
            std::process::exit(1);
        }
    }

    db.close().await;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("debug_db_connection requires the 'ssr' feature to be enabled.");
    std::process::exit(1);
}
