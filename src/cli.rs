use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::game::{self, GameRequest, generate_game, generate_random_game};
use countdown::solver::constants::{DEFAULT_CHECK_INTERVAL, SOURCE_NUMBER_COUNT};
use countdown::{CompletedGame, DedupPolicy, Solver, SolverConfig};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find an arithmetic combination of six numbers that reaches a target")]
#[command(version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(required_unless_present = "random")]
    pub target: Option<i64>,

    /// The six source numbers
    #[arg(required_unless_present = "random")]
    pub numbers: Vec<i64>,

    /// Solve this many randomly generated games instead
    #[arg(short, long, conflicts_with_all = ["target", "numbers"])]
    pub random: Option<usize>,

    /// How many large numbers (25, 50, 75, 100) random games draw
    #[arg(long, requires = "random")]
    pub large: Option<usize>,

    /// Seed for random game generation
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Give up after this many seconds
    #[arg(short, long, default_value_t = 60)]
    pub timeout: u64,

    /// Expansions between time limit checks
    #[arg(long, default_value_t = DEFAULT_CHECK_INTERVAL)]
    pub check_interval: u64,

    /// Skip repeated search states, remembering at most this many
    #[arg(long)]
    pub dedup: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Where the games to solve come from
pub enum GameSource {
    Given(GameRequest),
    Random {
        count: usize,
        large: Option<usize>,
        seed: Option<u64>,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub source: GameSource,
    pub solver: SolverConfig,
    pub json: bool,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// # Errors
    ///
    /// Returns an error if the given numbers or target do not form a legal game.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let source = match args.random {
            Some(count) => GameSource::Random {
                count,
                large: args.large,
                seed: args.seed,
            },
            None => {
                let target = args.target.context("Missing target")?;
                let request =
                    GameRequest::new(args.numbers, target).context("Invalid game request")?;
                GameSource::Given(request)
            }
        };

        let dedup = match args.dedup {
            Some(capacity) => DedupPolicy::Bounded { capacity },
            None => DedupPolicy::Off,
        };
        let solver = SolverConfig::new()
            .with_time_limit(Duration::from_secs(args.timeout))
            .with_check_interval(args.check_interval)
            .with_dedup(dedup);

        Ok(Self {
            source,
            solver,
            json: args.json,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")
}

fn random_games(count: usize, large: Option<usize>, seed: Option<u64>) -> Result<Vec<GameRequest>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|_| match large {
            Some(large) => {
                let small = SOURCE_NUMBER_COUNT.saturating_sub(large);
                generate_game(small, large, &mut rng).context("Invalid random game selection")
            }
            None => Ok(generate_random_game(&mut rng)),
        })
        .collect()
}

fn print_games(games: &[CompletedGame], json: bool, show_numbers: bool) -> Result<()> {
    if json {
        let rendered = if let [single] = games {
            serde_json::to_string_pretty(single)
        } else {
            serde_json::to_string_pretty(games)
        };
        println!("{}", rendered.context("Failed to serialize results")?);
        return Ok(());
    }

    for game in games {
        if show_numbers {
            println!("{:?} -> {}: {}", game.numbers, game.target, game);
        } else {
            println!("{}", game);
        }
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = Solver::with_config(config.solver);

    let (games, show_numbers) = match config.source {
        GameSource::Given(request) => {
            info!(
                "Searching for {} using {:?}",
                request.target(),
                request.numbers()
            );
            (vec![game::play(&solver, &request)], false)
        }
        GameSource::Random { count, large, seed } => {
            let requests = random_games(count, large, seed)?;
            (game::play_batch(&solver, &requests), true)
        }
    };

    for game in games.iter().filter(|g| !g.solved) {
        warn!(
            "No equation found for {:?} -> {} ({})",
            game.numbers, game.target, game.status
        );
    }

    print_games(&games, config.json, show_numbers)
}
