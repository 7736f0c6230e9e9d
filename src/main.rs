// tankwars - inspect fire decisions and replay recorded sessions through a bot

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use tankwars::ai::{create_bot, BotType};
use tankwars::config::{self, BotInfo, Config};
use tankwars::engine::{run_bot, BotState, ScanEvent, ScriptedEngine};
use tankwars::tactics::{analyze, Point};

#[derive(Parser, Debug)]
#[command(name = "tankwars")]
#[command(about = "Targeting math and sample tank bots for an external battle engine")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (targeting passes, pattern changes, dodges)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one targeting pass and print every intermediate value
    Aim {
        /// Our position as x,y
        #[arg(long, value_parser = parse_point)]
        from: Point,
        /// Target position as x,y
        #[arg(long, value_parser = parse_point)]
        to: Point,
        /// Target speed, units per tick
        #[arg(long, default_value_t = 0.0)]
        speed: f64,
        /// Target heading, degrees
        #[arg(long, default_value_t = 0.0)]
        heading: f64,
        /// Our energy (caps the power choice)
        #[arg(long, default_value_t = 100.0)]
        energy: f64,
        /// Current gun direction, degrees
        #[arg(long, default_value_t = 0.0)]
        gun_direction: f64,
    },
    /// List available bots
    Bots,
    /// Replay a recorded session through a bot and print its intents
    Replay {
        /// Session recording (JSON)
        session: PathBuf,
        #[arg(long, default_value = "champion")]
        bot: BotType,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Bot metadata file (JSON) used for the display name
        #[arg(long)]
        info: Option<PathBuf>,
        /// Only print the summary
        #[arg(long)]
        quiet: bool,
    },
    /// Write the default config file
    InitConfig {
        /// Where to write it (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so replay output on stdout stays machine readable
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::InitConfig { path, force } => init_config(path, force),
        Commands::Bots => {
            list_bots();
            Ok(())
        }
        Commands::Aim {
            from,
            to,
            speed,
            heading,
            energy,
            gun_direction,
        } => {
            let config = load_config(cli.config)?;
            aim(&config, from, to, speed, heading, energy, gun_direction);
            Ok(())
        }
        Commands::Replay {
            session,
            bot,
            seed,
            info,
            quiet,
        } => {
            let config = load_config(cli.config)?;
            replay(&config, session, bot, seed, info, quiet)
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load_config_from(&path),
        None => config::load_config(),
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(config::get_config_path);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }
    config::create_default_config(&path)
}

fn list_bots() {
    for bot_type in BotType::all() {
        println!(
            "{:<14} {:<14} {}",
            bot_type.id(),
            bot_type.display_name(),
            bot_type.description()
        );
    }
}

fn aim(
    config: &Config,
    from: Point,
    to: Point,
    speed: f64,
    heading: f64,
    energy: f64,
    gun_direction: f64,
) {
    let state = BotState {
        x: from.x,
        y: from.y,
        gun_direction,
        energy,
        arena: config.arena.arena(),
        ..BotState::default()
    };
    let scan = ScanEvent {
        scanned_bot_id: 0,
        x: to.x,
        y: to.y,
        speed,
        direction: heading,
        energy: 100.0,
    };

    let report = analyze(&state, &scan, &config.targeting);
    println!("Distance:        {:.1}", report.distance);
    println!("Power:           {:.1}", report.power);
    println!("Bullet speed:    {:.1}", report.bullet_speed);
    println!(
        "Predicted:       ({:.1}, {:.1}){}",
        report.predicted.x,
        report.predicted.y,
        if report.prediction_valid {
            ""
        } else {
            "  [outside arena, using current position]"
        }
    );
    println!("Aim angle:       {:.1}", report.aim_angle);
    println!("Gun turn:        {:.1}", report.gun_turn);
    println!(
        "Simulated shot:  {} at ({:.1}, {:.1})",
        if report.shot.will_hit { "hit" } else { "miss" },
        report.shot.final_position.x,
        report.shot.final_position.y
    );
    println!("Hit probability: {:.0}%", report.hit_probability * 100.0);
    println!("Decision:        {}", if report.fire { "FIRE" } else { "HOLD" });
}

fn replay(
    config: &Config,
    session: PathBuf,
    bot_type: BotType,
    seed: u64,
    info: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let mut engine = ScriptedEngine::from_file(&session, config.arena.arena())?;
    let mut bot = create_bot(bot_type, config, seed);

    let display_name = match info {
        Some(path) => BotInfo::from_file(&path)?.name,
        None => bot.name().to_string(),
    };
    info!(bot = display_name.as_str(), session = %session.display(), seed, "replaying");

    let summary = run_bot(&mut engine, bot.as_mut());

    if !quiet {
        for record in engine.records() {
            println!("{}", serde_json::to_string(record)?);
        }
    }

    eprintln!();
    eprintln!("=== {} ===", display_name);
    eprintln!("  Ticks:       {}", summary.ticks);
    eprintln!("  Scans:       {}", summary.scans);
    eprintln!("  Shots fired: {}", summary.shots_fired);
    eprintln!("  Hits taken:  {}", summary.hits_taken);
    eprintln!("  Wall hits:   {}", summary.wall_hits);
    let outcome = if summary.won {
        "won"
    } else if summary.died {
        "destroyed"
    } else {
        "session ended"
    };
    eprintln!("  Outcome:     {}", outcome);
    Ok(())
}
