use std::path::PathBuf;

use clap::{Parser, Subcommand};
use database::{KeyValueStore, RecordStore, StorageError, StoreConfig};
use scoring::{GameSort, GameView, StatusFilter};
use tracker::app::{confirm_reset, confirm_save};
use tracker::{
    or_empty_if_unavailable, AutoAnswer, Confirmation, ConsoleConfirmation, DeviceDiscovery, SaveOutcome,
    ScoreAdjustment, Settings, SimulatedScanner, Tracker, TrackerError,
};
use types::{DeviceId, GameId, NewGame, Score};

#[derive(Parser, Debug)]
#[command(name = "golf-tracker", about = "Track golf rounds, scores and balls")]
struct Params {
    /// memory, noop, sqlite:<path>, or a data directory
    #[arg(long)]
    store: Option<String>,

    /// YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a new round
    NewGame {
        #[arg(long)]
        course: String,
        #[arg(short, long)]
        player: Vec<String>,
    },
    /// List rounds with their totals
    Games {
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        #[arg(long, default_value = "stored")]
        sort: GameSort,
    },
    /// Store one hole's strokes for a round
    RecordScore {
        #[arg(long)]
        game: String,
        #[arg(long)]
        hole: u32,
        #[arg(long)]
        strokes: u32,
    },
    /// Fill in a scorecard and save its total
    Scorecard {
        #[arg(long)]
        game: String,
        #[arg(long)]
        holes: Option<usize>,
        /// HOLE:DELTA, e.g. 3:+2
        #[arg(long, allow_hyphen_values = true)]
        adjust: Vec<ScoreAdjustment>,
        #[arg(long)]
        reset: bool,
        /// Answer every confirmation with yes
        #[arg(short, long)]
        yes: bool,
    },
    /// Average, best and near-par numbers over completed rounds
    Stats,
    /// Scan for and connect to golf balls
    Balls {
        #[command(subcommand)]
        command: BallsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum BallsCommand {
    Scan,
    Connect { id: String },
}

fn storage_notice<E: std::fmt::Display>(e: &E) {
    println!("Could not reach your saved games right now: {e}");
}

fn print_view(view: &GameView) {
    println!(
        "{:<14} {:<20} {} {:>4} ({:>4}) {:<11} players: {}",
        view.id().as_str(),
        view.game.course,
        view.game.date.format("%Y-%m-%d"),
        view.total_score,
        view.to_par().to_string(),
        view.status.to_string(),
        view.game.players.join(", ")
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Params::parse();
    let settings = Settings::load(args.config.as_deref())?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();
    log::debug!("args: {args:?}");

    let store_config = StoreConfig::from_cli_or_env_or_yaml(args.store, settings.store.clone())?;
    let store = match store_config.open().await {
        Ok(store) => store,
        Err(e @ StorageError::Unavailable { .. }) => {
            storage_notice(&e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let tracker = Tracker::new(RecordStore::new(store)).with_max_players(settings.max_players);

    match run(&tracker, &settings, args.command).await {
        Err(e) if e.is_storage_unavailable() => {
            storage_notice(&e);
            Ok(())
        }
        other => Ok(other?),
    }
}

async fn run<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
    command: Command,
) -> Result<(), TrackerError> {
    match command {
        Command::NewGame { course, player } => {
            let new_game = player
                .into_iter()
                .fold(NewGame::new(course), |game, p| game.with_player(p));
            match tracker.create_game(new_game).await {
                Ok(view) => {
                    println!("Game Started: new round started at {}", view.game.course);
                    print_view(&view);
                }
                Err(TrackerError::Validation(e)) => println!("Error: {e}"),
                Err(e) => return Err(e),
            }
        }
        Command::Games { status, sort } => {
            let views =
                or_empty_if_unavailable(tracker.load_views(status, sort).await, storage_notice)?;
            if views.is_empty() {
                println!("No games found");
            }
            for view in &views {
                print_view(view);
            }
        }
        Command::RecordScore {
            game,
            hole,
            strokes,
        } => {
            tracker
                .record_score(Score::new(GameId::new(game), hole, strokes))
                .await?;
            println!("Score saved");
        }
        Command::Scorecard {
            game,
            holes,
            adjust,
            reset,
            yes,
        } => {
            let confirmation: Box<dyn Confirmation> = if yes {
                Box::new(AutoAnswer::accept())
            } else {
                Box::new(ConsoleConfirmation)
            };
            let id = GameId::new(game);
            let mut session = tracker
                .open_scorecard(&id, holes.unwrap_or(settings.default_holes))
                .await?;
            if reset {
                confirm_reset(&mut session, confirmation.as_ref());
            }
            for adjustment in adjust {
                session.adjust_score(adjustment.hole_index(), adjustment.delta())?;
            }
            for hole in session.holes() {
                println!(
                    "hole {:>2}  par {}  score {:>2}  {}",
                    hole.number,
                    hole.par,
                    hole.score,
                    hole.to_par()
                );
            }

            let views = or_empty_if_unavailable(
                tracker.load_views(StatusFilter::All, GameSort::Stored).await,
                storage_notice,
            )?;
            let Some(mut view) = views.into_iter().find(|view| view.id() == &id) else {
                println!("Scorecard not saved");
                session.close();
                return Ok(());
            };
            match confirm_save(session, &mut view, confirmation.as_ref()) {
                SaveOutcome::Saved(total) => {
                    println!("Scorecard saved successfully! Total: {total}");
                    print_view(&view);
                }
                SaveOutcome::Cancelled(session) => {
                    println!("Scorecard not saved");
                    session.close();
                }
            }
        }
        Command::Stats => {
            let summary = or_empty_if_unavailable(tracker.summary().await, storage_notice)?;
            println!("Rounds:         {}", summary.rounds);
            println!("Average Score:  {}", summary.average_score);
            println!("Best Score:     {}", summary.best_score);
            println!("Within par+10:  {}%", summary.within_ten_of_par_pct);
        }
        Command::Balls { command } => {
            let mut scanner = SimulatedScanner::default();
            scanner.begin_scan().await?;
            match command {
                BallsCommand::Scan => {
                    for device in scanner.discovered() {
                        println!(
                            "{:<12} {:<14} {:>4} dBm  {}",
                            device.id,
                            device.name,
                            device.rssi_dbm,
                            device.signal()
                        );
                    }
                }
                BallsCommand::Connect { id } => {
                    let handle = scanner.connect(&DeviceId(id)).await?;
                    println!("Ball connected successfully! ({})", handle.id);
                    scanner.disconnect(handle).await?;
                    println!("Ball has been disconnected");
                }
            }
        }
    }
    Ok(())
}
