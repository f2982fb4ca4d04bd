//! # demandcast
//!
//! Command-line interface for booking demand forecasting and pricing.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use demand_facade::{AnalysisConfig, DemandAnalyzer, DemandClassifier, RoomRequest, TrendDegree};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "demandcast")]
#[command(about = "Booking demand forecasting and pricing CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast, fit a trendline and price each room
    Analyze {
        #[command(flatten)]
        room: RoomArgs,

        /// Trendline degree (1, 2, 3 or linear, quadratic, cubic)
        #[arg(short, long, env = "DEMANDCAST_DEGREE")]
        degree: Option<TrendDegree>,

        /// Total bookings used for classification (default: sum of counts)
        #[arg(long)]
        total_bookings: Option<u64>,
    },

    /// Print only the forecast table of each room
    Forecast {
        #[command(flatten)]
        room: RoomArgs,
    },

    /// Classify an average daily booking count
    Classify {
        /// Average bookings per day
        #[arg(short, long)]
        avg: f64,

        /// Current nightly rate
        #[arg(short, long)]
        price: f64,
    },
}

/// Input and overrides shared by the room commands
#[derive(Args, Debug, Clone)]
struct RoomArgs {
    /// Input file (JSON rooms or `date,count` CSV)
    #[arg(short, long)]
    input: PathBuf,

    /// Nightly rate (required for CSV input)
    #[arg(short, long)]
    price: Option<f64>,

    /// Moving-average window
    #[arg(short, long, env = "DEMANDCAST_WINDOW")]
    window: Option<usize>,

    /// Exponential smoothing factor in (0, 1)
    #[arg(short, long, env = "DEMANDCAST_ALPHA")]
    alpha: Option<f64>,

    /// First date of the forecast table (inclusive)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last date of the forecast table (inclusive)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Output file (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RoomArgs {
    /// Load rooms and apply the command-line overrides to each.
    fn load(
        &self,
        degree: Option<TrendDegree>,
        total_bookings: Option<u64>,
    ) -> CliResult<Vec<RoomRequest>> {
        let mut rooms = input::load_rooms(&self.input, self.price)?;
        for room in &mut rooms {
            if let Some(price) = self.price {
                room.price = price;
            }
            if self.window.is_some() {
                room.window_size = self.window;
            }
            if self.alpha.is_some() {
                room.alpha = self.alpha;
            }
            if degree.is_some() {
                room.trendline_degree = degree;
            }
            if total_bookings.is_some() {
                room.total_bookings = total_bookings;
            }
            if self.start.is_some() {
                room.start = self.start;
            }
            if self.end.is_some() {
                room.end = self.end;
            }
        }
        Ok(rooms)
    }
}

/// Write JSON results to file or stdout
fn write_json(value: &serde_json::Value, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        info!(path = %path.display(), "results written");
    } else {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", json);
    }

    Ok(())
}

/// Run analyze command
fn run_analyze(
    room: RoomArgs,
    degree: Option<TrendDegree>,
    total_bookings: Option<u64>,
) -> CliResult<()> {
    let rooms = room.load(degree, total_bookings)?;
    let analyzer = DemandAnalyzer::new(AnalysisConfig::default()).map_err(|e| e.to_string())?;
    let analyses = analyzer.analyze_all(&rooms).map_err(|e| e.to_string())?;

    for analysis in &analyses {
        info!(
            room_id = ?analysis.room_id,
            tier = %analysis.classification.tier,
            optimal_price = analysis.classification.optimal_price,
            r_squared = analysis.r_squared,
            "room analyzed"
        );
    }

    let json = serde_json::to_value(&analyses).map_err(|e| e.to_string())?;
    write_json(&json, room.output.as_deref())
}

/// Run forecast command
fn run_forecast(room: RoomArgs) -> CliResult<()> {
    let rooms = room.load(None, None)?;
    let base = AnalysisConfig::default();

    let mut tables = Vec::with_capacity(rooms.len());
    for request in &rooms {
        request.validate().map_err(|e| e.to_string())?;
        let config = request.resolve_config(&base).map_err(|e| e.to_string())?;
        let analyzer = DemandAnalyzer::new(config).map_err(|e| e.to_string())?;
        let forecast = analyzer.forecast(&request.filtered_series());

        info!(room_id = ?request.room_id, rows = forecast.len(), "forecast computed");
        tables.push(serde_json::json!({
            "room_id": request.room_id,
            "name": request.name,
            "forecast": forecast,
        }));
    }

    write_json(&serde_json::Value::Array(tables), room.output.as_deref())
}

/// Run classify command
fn run_classify(avg: f64, price: f64) -> CliResult<()> {
    let classification = DemandClassifier
        .classify(avg, price)
        .map_err(|e| e.to_string())?;
    let json = serde_json::to_value(&classification).map_err(|e| e.to_string())?;
    write_json(&json, None)
}

fn init_tracing() {
    // stdout carries the JSON results
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demandcast=info".into()),
        )
        .init();
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            room,
            degree,
            total_bookings,
        } => run_analyze(room, degree, total_bookings),

        Commands::Forecast { room } => run_forecast(room),

        Commands::Classify { avg, price } => run_classify(avg, price),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
