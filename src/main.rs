use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use connect_four::ai::{choose_move_at_depth, Difficulty};
use connect_four::config::AppConfig;
use connect_four::error::MoveError;
use connect_four::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};

/// Play Connect Four against the AI in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the AI")]
struct Cli {
    /// AI difficulty: easy, medium, or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Explicit search depth (overrides difficulty)
    #[arg(long)]
    depth: Option<usize>,

    /// Fixed RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Watch the AI play both sides
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        config.ai.difficulty = difficulty;
        config.ai.search_depth = None;
    }
    if let Some(depth) = cli.depth {
        config.ai.search_depth = Some(depth);
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    config.validate().context("validating configuration")?;

    let mut rng = match config.ai.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let depth = config.ai.resolved_depth();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = GameState::initial();

    println!("Connect Four — AI depth {depth}");
    if !cli.watch {
        println!("You are Red. Enter a column (0-{}) to drop a piece.", COLS - 1);
    }

    while !state.is_terminal() {
        render(state.board());

        let column = if cli.watch || state.current_player() == Player::Yellow {
            let Some(col) = choose_move_at_depth(
                state.board(),
                state.current_player(),
                depth,
                &mut rng,
            ) else {
                break;
            };
            println!("{} plays column {col}", state.current_player());
            col
        } else {
            match read_column(&mut lines)? {
                Some(col) => col,
                None => {
                    println!("Goodbye.");
                    return Ok(());
                }
            }
        };

        match state.apply_move_mut(column) {
            Ok(()) => {}
            // A full or out-of-range column just means "try again"
            Err(MoveError::ColumnFull(col)) => println!("Column {col} is full."),
            Err(MoveError::InvalidColumn(col)) => println!("Column {col} is out of range."),
            Err(err) => return Err(err.into()),
        }
    }

    render(state.board());
    match state.outcome() {
        Some(GameOutcome::Win(line)) => {
            println!("{} wins! Line: {:?}", line.player, line.cells);
        }
        Some(GameOutcome::Draw) => println!("It's a draw."),
        None => {}
    }

    Ok(())
}

/// Prompt for a column; `None` means end of input.
fn read_column(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<usize>> {
    loop {
        print!("Your move: ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("reading input")?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(col) => return Ok(Some(col)),
            Err(_) => println!("Enter a column number 0-{}, or 'q' to quit.", COLS - 1),
        }
    }
}

fn render(board: &Board) {
    println!();
    for row in 0..ROWS {
        let mut line = String::from("|");
        for col in 0..COLS {
            let symbol = match board.get(row, col) {
                Cell::Empty => " .",
                Cell::Red => " R",
                Cell::Yellow => " Y",
            };
            line.push_str(symbol);
        }
        line.push_str(" |");
        println!("{line}");
    }
    let footer: String = (0..COLS).map(|c| format!(" {c}")).collect();
    println!("+{footer} +");
}
