// src/bin/sync_news.rs
use anyhow::Result;
use clap::Parser;
use news_aggregator::application::{
    commands::news::IngestNewsCommand,
    dto::IngestionStats,
    error::ApplicationError,
    ports::{news_source::NewsSource, time::Clock},
    services::ApplicationServices,
};
use news_aggregator::config::AppConfig;
use news_aggregator::domain::news::NewsArticleRepository;
use news_aggregator::infrastructure::{
    database, gnews::GNewsClient, repositories::SqliteNewsArticleRepository, time::SystemClock,
};
use std::{process::ExitCode, sync::Arc};

#[derive(Parser, Debug)]
#[command(name = "sync_news", about = "Synchronize news articles from the GNews API")]
struct Args {
    /// Search keyword
    #[arg(short, long)]
    keyword: Option<String>,

    /// Language code (e.g. en, es)
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Country code (e.g. us, gb)
    #[arg(short, long)]
    country: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Maximum articles to fetch
    #[arg(short, long, default_value_t = 10)]
    max: u32,
}

impl From<Args> for IngestNewsCommand {
    fn from(args: Args) -> Self {
        Self {
            keyword: args.keyword,
            language: Some(args.language),
            country: args.country,
            from: args.from,
            to: args.to,
            max: Some(args.max),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args = Args::parse();
    if args.keyword.is_none() && args.country.is_none() {
        eprintln!("either --keyword or --country is required");
        return ExitCode::FAILURE;
    }

    match run(args.into()).await {
        Ok(stats) => {
            println!(
                "saved: {}, updated: {}, skipped: {}, errors: {}",
                stats.saved, stats.updated, stats.skipped, stats.errors
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Some(ApplicationError::InvalidRequest(violations)) =
                err.downcast_ref::<ApplicationError>()
            {
                for violation in violations {
                    eprintln!("{}: {}", violation.field, violation.message);
                }
            } else {
                eprintln!("sync failed: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: IngestNewsCommand) -> Result<IngestionStats> {
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let news_repo: Arc<dyn NewsArticleRepository> =
        Arc::new(SqliteNewsArticleRepository::new(Arc::clone(&pool)));
    let news_source: Arc<dyn NewsSource> =
        Arc::new(GNewsClient::new(config.gnews_settings(), Arc::clone(&clock))?);

    let services = ApplicationServices::new(news_repo, news_source, clock);
    let stats = services.news_commands.ingest(command).await?;
    Ok(stats)
}
