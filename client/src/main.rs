mod board_view;
mod command;
mod config;
mod offline;
mod suggest;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, Mark, TicTacToeGameState};
use tictactoe_common::{log, logger};

use command::parse_player_mark;
use config::get_config_manager;
use offline::run_tictactoe_game;
use suggest::{SuggestRequest, suggest_move};

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe with a computer opponent")]
struct Cli {
    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Silence log output on stderr.
    #[arg(long, global = true)]
    quiet: bool,

    /// YAML config file; defaults to tictactoe_config.yaml next to the binary.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game in the terminal.
    Play(PlayArgs),
    /// Print the cell index the computer would choose for a board.
    Suggest(SuggestArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Play against the computer.
    #[arg(long)]
    computer: bool,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Mark played by the computer.
    #[arg(long, value_parser = parse_player_mark)]
    computer_mark: Option<Mark>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SuggestArgs {
    /// Nine cells in row-major order, e.g. "OO./XX./...".
    #[arg(long)]
    board: String,

    /// Mark to move; inferred from the mark counts when omitted.
    #[arg(long, value_parser = parse_player_mark)]
    mark: Option<Mark>,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,

    /// Skip the turn-order check on the board.
    #[arg(long)]
    allow_unreachable: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let prefix = cli.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, !cli.quiet);

    let config = get_config_manager(cli.config.as_deref()).get_config()?;

    match cli.command {
        Command::Play(args) => {
            let computer_mark = args.computer_mark.unwrap_or(config.computer_mark);
            let computer = (args.computer || config.computer_opponent).then_some(computer_mark);
            let difficulty = args.difficulty.unwrap_or(config.difficulty);

            let mut rng = SessionRng::from_optional_seed(args.seed.or(config.seed));
            log!("Starting game, difficulty {}, rng seed {}", difficulty, rng.seed());

            let mut state = TicTacToeGameState::new(difficulty, computer);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_tictactoe_game(&mut state, &mut rng, &mut stdin.lock(), &mut stdout.lock())?;
        }
        Command::Suggest(args) => {
            let mut rng = SessionRng::from_optional_seed(args.seed.or(config.seed));
            let request = SuggestRequest {
                board: args.board,
                mark: args.mark,
                difficulty: args.difficulty.unwrap_or(Difficulty::Hard),
                allow_unreachable: args.allow_unreachable,
            };
            println!("{}", suggest_move(&request, &mut rng)?);
        }
    }

    Ok(())
}
