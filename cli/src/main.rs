mod analyze;
mod config;
mod game;
mod input;
mod render;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::{log, logger, FirstPlayerMode, SessionRng, Side};

use analyze::analyze_position;
use config::get_config_manager;
use game::{run_game, GameOptions, SessionOutcome};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    User,
    Agent,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::User => FirstPlayerMode::User,
            FirstArg::Agent => FirstPlayerMode::Agent,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    User,
    Agent,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::User => Side::User,
            SideArg::Agent => Side::Agent,
        }
    }
}

#[derive(Subcommand)]
enum Mode {
    /// Play one game against the computer
    Play,
    /// Print the optimal move for a position such as "XO./.X./..O"
    Analyze {
        #[arg(long)]
        board: String,
        #[arg(long, value_enum, default_value = "agent")]
        side: SideArg,
    },
}

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if args.verbose || config.log.enabled {
        let prefix = if args.use_log_prefix {
            Some(config.log.prefix.clone().unwrap_or_else(|| "Client".to_string()))
        } else {
            config.log.prefix.clone()
        };
        logger::init_logger(prefix);
    }
    log!("Config loaded from {:?}", config_manager.content_provider().path());

    match args.mode.unwrap_or(Mode::Play) {
        Mode::Analyze { board, side } => {
            analyze_position(&board, side.into(), &config.markers, &mut io::stdout())?;
        }
        Mode::Play => {
            if let Some(first) = args.first {
                config.first_player = Some(first.into());
            }
            let mut rng = match args.seed {
                Some(seed) => SessionRng::new(seed),
                None => SessionRng::from_random(),
            };
            let options = GameOptions {
                first_player: config.first_player,
                markers: config.markers,
            };

            let outcome = run_game(&mut io::stdin().lock(), &mut io::stdout(), &options, &mut rng)?;
            if outcome == SessionOutcome::Quit {
                println!("\nBye.");
            }

            if config.save_on_exit {
                config_manager.set_config(&config)?;
                log!("Config saved");
            }
        }
    }

    Ok(())
}
