use music_library_api::{Config, PgSongStore, SongInfoClient};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--skip-external]\n\
         \n\
         Reads env vars (or .env):\n\
           DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME (or DATABASE_URL),\n\
           SERVER_PORT, EXTERNAL_API_URL, EXTERNAL_API_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let skip_external = args.iter().any(|a| a == "--skip-external");

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  DB: {}@{}:{}/{}", config.database.user, config.database.host, config.database.port, config.database.name);
    if config.database.url_override.is_some() {
        println!("  DATABASE_URL is set and takes precedence over DB_*");
    }
    println!("  SERVER_PORT={}", config.server_port);
    println!("  EXTERNAL_API_URL={}", config.external_api_url);
    println!("  EXTERNAL_API_TIMEOUT_SECS={}", config.external_api_timeout.as_secs());

    // Database connectivity (also creates the songs table if missing)
    let store = PgSongStore::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Database unreachable: {}", e))?;
    if !store.songs_table_exists().await? {
        return Err(anyhow::anyhow!("songs table is missing after bootstrap"));
    }
    println!("  Database reachable, songs table present.");

    // Song info service reachability
    if skip_external {
        println!("  Skipping song info service probe.");
    } else {
        let client = SongInfoClient::from_config(&config)?;
        let status = client.probe().await.map_err(|e| {
            anyhow::anyhow!("Song info service unreachable at {}: {}", client.base_url(), e)
        })?;
        println!("  Song info service reachable (GET {} -> {}).", client.base_url(), status);
    }

    println!("> Preflight OK.");
    Ok(())
}
