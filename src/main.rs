//! Wayfarer CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use wayfarer::models::{Itinerary, TravelStyle, TripRequest};
use wayfarer::report::FontFile;
use wayfarer::weather::fetch_or_unavailable;
use wayfarer::{City, OpenAiGenerator, Planner, Session, WayfarerConfig, WeatherClient};

#[derive(Parser)]
#[command(
    name = "wayfarer",
    version,
    about = "AI-assisted travel planning: city guides, live weather, and PDF itinerary reports"
)]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the supported destination cities
    Cities,
    /// Show the introduction and map marker for a city
    Describe {
        /// City name (Korean or ASCII alias, e.g. 서울 or seoul)
        city: City,
    },
    /// Show the current weather for a city
    Weather {
        /// City name (Korean or ASCII alias)
        city: City,
    },
    /// Generate an itinerary and export it as a PDF report
    Plan {
        /// City name (Korean or ASCII alias)
        city: City,
        /// Travel style: 관광, 맛집, or 힐링
        #[arg(long, default_value = "관광")]
        style: TravelStyle,
        /// Trip length in days (clamped to 1-10)
        #[arg(long, default_value_t = 3)]
        days: i64,
        /// Directory for the exported report (defaults to report.output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Skip the weather lookup
        #[arg(long)]
        no_weather: bool,
    },
}

fn init_tracing(config: &WayfarerConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = WayfarerConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    init_tracing(&config, cli.verbose);

    match cli.command {
        Command::Cities => cities(),
        Command::Describe { city } => describe(city),
        Command::Weather { city } => weather(&config, city).await?,
        Command::Plan {
            city,
            style,
            days,
            output_dir,
            no_weather,
        } => plan(&config, city, style, days, output_dir, no_weather).await?,
    }

    Ok(())
}

fn cities() {
    println!("지원 도시:");
    for city in City::ALL {
        let (lat, lon) = city.coordinates();
        println!("  {} ({lat:.4}, {lon:.4})", city.name());
    }
}

fn describe(city: City) {
    let location = city.location();
    println!("🏙 {city} 소개");
    println!("{}", city.description());
    println!();
    println!("🗺 지도: {}", location.marker_url());
}

async fn weather(config: &WayfarerConfig, city: City) -> Result<()> {
    let client = WeatherClient::new(&config.weather)?;
    let location = city.location();

    println!("🌤 {city} 현재 날씨");
    match fetch_or_unavailable(Some(&client), &location).await {
        Some(snapshot) => {
            println!("날씨: {}", snapshot.description);
            println!("온도: {}°C", snapshot.temperature_c);
            println!("체감온도: {}°C", snapshot.feels_like_c);
            println!("습도: {}%", snapshot.humidity_pct);
            println!("풍속: {} m/s", snapshot.wind_speed_ms);
        }
        None => println!("날씨 정보를 불러올 수 없습니다."),
    }

    Ok(())
}

async fn plan(
    config: &WayfarerConfig,
    city: City,
    style: TravelStyle,
    days: i64,
    output_dir: Option<PathBuf>,
    no_weather: bool,
) -> Result<()> {
    let request = TripRequest::new(city, style, days);
    let location = city.location();

    describe(city);
    println!();

    // Weather degrades to unavailable; a missing key only disables the block.
    let weather = if no_weather {
        None
    } else {
        match WeatherClient::new(&config.weather) {
            Ok(client) => fetch_or_unavailable(Some(&client), &location).await,
            Err(e) => {
                warn!("Weather lookup disabled: {e}");
                None
            }
        }
    };
    match &weather {
        Some(snapshot) => {
            println!("🌤 {}", snapshot.format_conditions());
            println!("   {}", snapshot.format_humidity_wind());
        }
        None => println!("날씨 정보를 불러올 수 없습니다."),
    }
    println!();

    let generator =
        OpenAiGenerator::new(&config.generation).context("Itinerary generation is not configured")?;
    let planner = Planner::new(Arc::new(generator));
    let mut session = Session::new();

    println!("📝 추천 여행 일정");
    match planner.generate(&mut session, &request).await {
        Ok(itinerary) => println!("{itinerary}"),
        Err(e) => {
            // The fixed failure string stands in for the itinerary, on the
            // console and in the exported report.
            let fallback = e.user_message();
            println!("{fallback}");
            session.set_itinerary(Itinerary::new(fallback));
        }
    }
    println!();

    let font = FontFile::new(&config.report.font_path);
    let out_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.report.output_dir));
    let path = planner
        .export(&session, &request, weather.as_ref(), &font, &out_dir)
        .context("Failed to export the report")?;

    println!("📄 PDF 생성 완료: {}", path.display());
    Ok(())
}
