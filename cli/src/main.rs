mod command;
mod render;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::{EngineConfig, Validate, get_config_manager};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    Difficulty, SessionHandle, TicTacToeSession, TicTacToeSessionSettings,
};
use tictactoe_engine::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{Command, HELP, parse_command};
use render::render_state;

const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file; missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn effective_config(args: &Args, mut config: EngineConfig) -> Result<EngineConfig, String> {
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.bot_delay_ms = bot_delay_ms;
    }
    if args.use_log_prefix && config.log_prefix.is_none() {
        config.log_prefix = Some("TicTacToe".to_string());
    }
    config.validate()?;
    Ok(config)
}

/// Forwards one parsed command to the session. A difficulty change also starts
/// a fresh game.
async fn run_command(handle: &SessionHandle, command: Command) -> Result<(), String> {
    match command {
        Command::Move(index) => handle.make_move(index),
        Command::SetDifficulty(difficulty) => {
            handle.set_difficulty(difficulty)?;
            handle.reset()
        }
        Command::Reset => handle.reset(),
        Command::Show => {
            let state = handle.snapshot().await?;
            println!("{}", render_state(&state));
            Ok(())
        }
        Command::Help => {
            println!("{}", HELP);
            Ok(())
        }
        Command::Quit => handle.shutdown(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let config = effective_config(&args, config_manager.get_config()?)?;
    logger::init_logger(config.log_prefix.clone(), config.log_enabled);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config.display());
    }

    let handle = TicTacToeSession::spawn(
        TicTacToeSessionSettings::from(&config),
        SessionRng::from_optional_seed(config.seed),
    );

    let mut subscription = handle.subscribe().await?;
    let printer = tokio::spawn(async move {
        while let Some(state) = subscription.recv().await {
            println!("{}", render_state(&state));
        }
    });

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run_command(&handle, command).await?,
            Err(e) => println!("{}", e),
        }
    }

    handle.shutdown()?;
    printer.await?;
    Ok(())
}
