use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use clusterlab::{
    datasets, dbscan, distance, generate_with, kmeans, validate, AppConfig, GeneratedPoint,
    Metric, Point, ValidationError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit code when a colouring is not finished yet
const EXIT_INCOMPLETE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "clusterlab")]
#[command(about = "Cluster 2D points with k-means or DBSCAN and score cluster colourings")]
struct Cli {
    /// JSON config file; defaults apply to anything it leaves out.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distance between two points.
    Distance {
        #[arg(long, value_parser = parse_point)]
        a: Point,
        #[arg(long, value_parser = parse_point)]
        b: Point,
        /// l1, l2 or linf.
        #[arg(long, default_value = "l2")]
        metric: Metric,
    },
    /// Centroid-based clustering.
    Kmeans {
        #[command(flatten)]
        source: PointSource,
        #[arg(long)]
        k: usize,
        #[arg(long, default_value = "l2")]
        metric: Metric,
        /// Seed for picking starting centroids.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_iters: Option<usize>,
        /// JSON array of k starting centroids.
        #[arg(long)]
        centroids: Option<PathBuf>,
    },
    /// Density-based clustering.
    Dbscan {
        #[command(flatten)]
        source: PointSource,
        #[arg(long)]
        eps: f64,
        #[arg(long, default_value_t = 3)]
        min_pts: usize,
        #[arg(long, default_value = "l2")]
        metric: Metric,
    },
    /// Generate exercise points with hidden clusters.
    Generate {
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        k: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a coloured set of generated points.
    Validate {
        #[arg(long)]
        input: PathBuf,
    },
    /// List the built-in datasets.
    Datasets,
}

#[derive(Args, Debug)]
struct PointSource {
    /// JSON array of {"x", "y"} points.
    #[arg(long, conflicts_with = "dataset", required_unless_present = "dataset")]
    input: Option<PathBuf>,
    /// Name of a built-in dataset.
    #[arg(long)]
    dataset: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Distance { a, b, metric } => print_json(&json!({
            "metric": metric.label(),
            "distance": distance(a, b, metric),
        })),

        Command::Kmeans {
            source,
            k,
            metric,
            seed,
            max_iters,
            centroids,
        } => {
            let points = source.load(&config)?;
            let initial: Option<Vec<Point>> = centroids.as_deref().map(read_json).transpose()?;
            let seed = seed.or(config.kmeans.seed).unwrap_or_else(rand::random);
            let max_iters = max_iters.unwrap_or(config.kmeans.max_iters);

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = kmeans(&points, k, metric, initial.as_deref(), max_iters, &mut rng)?;
            tracing::info!(seed, iterations = result.iterations, "k-means run complete");

            print_json(&result)
        }

        Command::Dbscan {
            source,
            eps,
            min_pts,
            metric,
        } => {
            let points = source.load(&config)?;
            print_json(&dbscan(&points, eps, min_pts, metric)?)
        }

        Command::Generate { n, k, seed } => {
            let shape = &config.exercise;
            let points = generate_with(
                n.unwrap_or(shape.n),
                k.unwrap_or(shape.k),
                seed.unwrap_or(shape.seed),
                &config.generator,
            )?;
            print_json(&points)
        }

        Command::Validate { input } => {
            let points: Vec<GeneratedPoint> = read_json(&input)?;
            match validate(&points) {
                Ok(result) => print_json(&json!({
                    "success": result.is_success(),
                    "correct_count": result.correct_count,
                    "total": result.points.len(),
                    "points": result.points,
                })),
                Err(e @ ValidationError::Incomplete { .. }) => {
                    eprintln!("Not ready: {}", e);
                    std::process::exit(EXIT_INCOMPLETE);
                }
                Err(e) => Err(e.into()),
            }
        }

        Command::Datasets => {
            let listing: Vec<_> = datasets::builtin(&config)?
                .iter()
                .map(|d| json!({ "name": d.name, "points": d.len() }))
                .collect();
            print_json(&listing)
        }
    }
}

impl PointSource {
    fn load(&self, config: &AppConfig) -> Result<Vec<Point>> {
        match (&self.input, &self.dataset) {
            (Some(path), _) => read_json(path),
            (None, Some(name)) => match datasets::by_name(name, config)? {
                Some(dataset) => Ok(dataset.points),
                None => bail!(
                    "Unknown dataset '{}', expected one of {}",
                    name,
                    datasets::BUILTIN_NAMES.join(", ")
                ),
            },
            (None, None) => bail!("Either --input or --dataset is required"),
        }
    }
}

/// Parse `x,y`
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
