//! tmdbgw - TMDB API gateway CLI.

/// Application configuration (TOML).
mod config;
/// Result rendering.
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path, resolve_key_path};
use tmdbgw_api::tmdb::{
    Credentials, Endpoints, LocalTmdbGatewayApi, MediaType, SearchParams, TmdbGateway,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Credentials file (`{"api_key": "..."}`). Takes precedence over `TMDB_API_KEY`.
    #[arg(long, global = true)]
    key_file: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search for TV series or movies.
    Search(SearchArgs),
    /// Get TV series or movie details.
    Details(DetailsArgs),
    /// Create a guest session.
    GuestSession,
    /// Rate a TV series or movie as a guest.
    Rate(RateArgs),
    /// Print endpoint URLs without calling the API.
    Urls(UrlsArgs),
    /// Write a default config file if none exists.
    Init,
}

/// Media type selection shared by subcommands.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct MediaArgs {
    /// Target TV series.
    #[arg(long)]
    tv: bool,
    /// Target movies.
    #[arg(long)]
    movie: bool,
}

impl MediaArgs {
    /// Selected media type.
    const fn media_type(&self) -> MediaType {
        MediaType::from_is_tv(self.tv && !self.movie)
    }
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Media type.
    #[command(flatten)]
    media: MediaArgs,
    /// Search query (e.g. "Breaking Bad").
    #[arg(long, required = true)]
    query: String,
    /// Response language (default: config `tmdb.language`).
    #[arg(long)]
    language: Option<String>,
    /// Filter by year.
    #[arg(long)]
    year: Option<u32>,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// Media type.
    #[command(flatten)]
    media: MediaArgs,
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,
    /// Response language (default: config `tmdb.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `rate` subcommand.
#[derive(clap::Args)]
struct RateArgs {
    /// Media type.
    #[command(flatten)]
    media: MediaArgs,
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,
    /// Rating (0.5 to 10.0 in steps of 0.5).
    #[arg(long, required = true)]
    value: f64,
    /// Guest session ID from `guest-session`.
    #[arg(long, required = true)]
    session: String,
}

/// Arguments for the `urls` subcommand.
#[derive(clap::Args)]
struct UrlsArgs {
    /// Media type.
    #[command(flatten)]
    media: MediaArgs,
    /// TMDB ID used for the rating URL.
    #[arg(long, default_value_t = 1)]
    id: u64,
}

/// Loads the config file, falling back to defaults when absent.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Parses the configured base URL override, if any.
fn configured_base_url(config: &AppConfig) -> Result<Option<Url>> {
    config
        .tmdb
        .base_url
        .as_deref()
        .map(|raw| Url::parse(raw).with_context(|| format!("invalid tmdb.base_url: {raw}")))
        .transpose()
}

/// Loads credentials from the resolved key file or `TMDB_API_KEY`.
///
/// Precedence: `--key-file`, then `TMDB_API_KEY`, then `tmdb.key_file`
/// from config, then `{config dir}/key.json`.
///
/// # Errors
///
/// Returns an error if neither source yields a valid key.
#[instrument(skip_all)]
fn load_credentials(
    key_file: Option<&PathBuf>,
    config: &AppConfig,
    dir: Option<&PathBuf>,
) -> Result<Credentials> {
    if key_file.is_none()
        && let Some(credentials) = Credentials::from_env()?
    {
        tracing::debug!("Using TMDB_API_KEY from environment");
        return Ok(credentials);
    }

    let key_path =
        resolve_key_path(key_file, config, dir).context("failed to resolve credentials path")?;
    Credentials::load(&key_path).context("failed to load TMDB credentials")
}

/// Builds a `TmdbGateway` from config and credentials.
///
/// # Errors
///
/// Returns an error if credentials are missing or the gateway fails to build.
#[instrument(skip_all)]
fn build_gateway(cli: &Cli, config: &AppConfig) -> Result<TmdbGateway> {
    let credentials = load_credentials(cli.key_file.as_ref(), config, cli.dir.as_ref())?;

    let mut builder = TmdbGateway::builder()
        .api_key(credentials.into_api_key())
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some(base_url) = configured_base_url(config)? {
        builder = builder.base_url(base_url);
    }
    builder.build().context("failed to build TMDB gateway")
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(cli: &Cli, args: &SearchArgs, config: &AppConfig) -> Result<()> {
    let gateway = build_gateway(cli, config)?;

    let language = args.language.as_deref().unwrap_or(&config.tmdb.language);
    let mut params = SearchParams::new(&args.query)
        .language(language)
        .page(args.page);
    if let Some(year) = args.year {
        params = params.year(year);
    }

    let media = args.media.media_type();
    let results = gateway
        .search(media, &params)
        .await
        .with_context(|| format!("TMDB search/{media} request failed"))?;

    report::log_search_results(&results);
    Ok(())
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_details(cli: &Cli, args: &DetailsArgs, config: &AppConfig) -> Result<()> {
    let gateway = build_gateway(cli, config)?;

    let language = args.language.as_deref().unwrap_or(&config.tmdb.language);
    let media = args.media.media_type();
    let details = gateway
        .details(media, args.id, language)
        .await
        .with_context(|| format!("TMDB {media} details request failed"))?;

    report::log_details(&details);
    Ok(())
}

/// Runs the `guest-session` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_guest_session(cli: &Cli, config: &AppConfig) -> Result<()> {
    let gateway = build_gateway(cli, config)?;

    let session = gateway
        .create_guest_session()
        .await
        .context("TMDB guest session request failed")?;
    if !session.success {
        bail!("TMDB did not create a guest session");
    }

    report::log_guest_session(&session);
    Ok(())
}

/// Runs the `rate` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build, the rating is invalid,
/// or the API request fails.
#[instrument(skip_all)]
async fn run_rate(cli: &Cli, args: &RateArgs, config: &AppConfig) -> Result<()> {
    let gateway = build_gateway(cli, config)?;

    let media = args.media.media_type();
    let status = gateway
        .rate(media, args.id, args.value, &args.session)
        .await
        .with_context(|| format!("TMDB {media} rating request failed"))?;

    report::log_rating(media, args.id, args.value, &status);
    Ok(())
}

/// Runs the `urls` subcommand.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid.
fn run_urls(args: &UrlsArgs, config: &AppConfig) -> Result<()> {
    let endpoints = match configured_base_url(config)? {
        Some(base_url) => Endpoints::new(&base_url)?,
        None => Endpoints::default(),
    };

    report::log_urls(&endpoints, args.media.media_type(), args.id);
    Ok(())
}

/// Runs the `init` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or written.
fn run_init(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    if config_path.exists() {
        tracing::info!("Config already exists: {}", config_path.display());
        return Ok(());
    }

    AppConfig::default()
        .save(&config_path)
        .context("failed to write config")?;
    tracing::info!("Wrote {}", config_path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let config = load_config(cli.dir.as_ref())?;
    match &cli.command {
        Commands::Search(args) => run_search(&cli, args, &config).await,
        Commands::Details(args) => run_details(&cli, args, &config).await,
        Commands::GuestSession => run_guest_session(&cli, &config).await,
        Commands::Rate(args) => run_rate(&cli, args, &config).await,
        Commands::Urls(args) => run_urls(args, &config),
        Commands::Init => run_init(cli.dir.as_ref()),
    }
}
