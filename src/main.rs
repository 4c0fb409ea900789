use clap::Parser;
use dogpark::core::ConfigProvider;
use dogpark::utils::{logger, validation::Validate};
use dogpark::{
    build_schema, schema_sdl, CliConfig, DogCeoClient, EntityStore, FixtureSeedProvider,
    GraphqlServer, ParkError, RandomSeedProvider, Result, Seeder, TomlConfig,
};
use std::time::Duration;

async fn seed_store(config: &dyn ConfigProvider) -> Result<EntityStore> {
    if config.use_fixtures() {
        tracing::info!("Seeding deterministic fixtures");
        let provider = FixtureSeedProvider::sized(config.people_count(), config.dog_count());
        Seeder::new(provider).run().await
    } else {
        let photos = DogCeoClient::new(config.photo_endpoint());
        let provider = RandomSeedProvider::new(photos, config.people_count(), config.dog_count())
            .with_concurrency(config.concurrent_requests());
        Seeder::new(provider).run().await
    }
}

async fn run(config: &dyn ConfigProvider) -> Result<()> {
    let store = seed_store(config).await?;
    let schema = build_schema(store.into_shared());

    GraphqlServer::new(schema, config.host(), config.port())
        .with_latency(Duration::from_millis(config.latency_ms()))
        .start()
        .await
}

fn fail(e: &ParkError) -> ! {
    tracing::error!("❌ {} (recovery: {})", e, e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.print_schema {
        println!("{}", schema_sdl());
        return;
    }

    let (config, verbose): (Box<dyn ConfigProvider>, bool) = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(toml) => {
                let verbose = cli.verbose || toml.verbose();
                if let Err(e) = toml.validate() {
                    logger::init_logger(verbose, toml.json_logs());
                    fail(&e);
                }
                (Box::new(toml) as Box<dyn ConfigProvider>, verbose)
            }
            Err(e) => {
                logger::init_cli_logger(cli.verbose);
                fail(&e);
            }
        },
        None => {
            if let Err(e) = cli.validate() {
                logger::init_logger(cli.verbose, cli.json_logs);
                fail(&e);
            }
            let verbose = cli.verbose;
            (Box::new(cli.clone()) as Box<dyn ConfigProvider>, verbose)
        }
    };

    logger::init_logger(verbose, config.json_logs());
    tracing::info!("Starting dogpark");
    if verbose {
        tracing::debug!(
            "Settings: host={} port={} latency_ms={} people={} dogs={} fixtures={}",
            config.host(),
            config.port(),
            config.latency_ms(),
            config.people_count(),
            config.dog_count(),
            config.use_fixtures()
        );
    }

    if let Err(e) = run(config.as_ref()).await {
        fail(&e);
    }
}
