//! termfields CLI
//!
//! Draw a bordered text field on the terminal and replay scripted moves.

use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use crossterm::ExecutableCommand;
use crossterm::cursor::Show;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
use log::info;

use termfields::driver::{BackendDriver, Driver};
use termfields::field::FieldManager;
use termfields::report::{format_field, format_styles};
use termfields::style::StyleRegistry;
use termfields::types::{
    BorderStyle, FieldConfig, FieldSnapshot, MoveDirection, MovePolicy, OutputFormat,
};

#[derive(Parser)]
#[command(name = "termfields")]
#[command(about = "Draw updateable, bordered text fields on the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a field, replay moves, then print its final state
    Show(ShowArgs),

    /// List the available border styles
    Styles {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Args)]
struct ShowArgs {
    /// Column of the first text cell
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    x: i32,

    /// Row of the text
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    y: i32,

    /// Content width used for the border (default: text length)
    #[arg(long)]
    length: Option<i32>,

    /// Field text
    #[arg(long, default_value = "termfields")]
    text: String,

    /// Border style: none, clear, ascii, unicode
    #[arg(long, default_value = "unicode")]
    style: BorderStyle,

    /// Move the field one cell; repeat for a path
    #[arg(long = "move", value_enum)]
    moves: Vec<DirectionArg>,

    /// Pause between moves, in milliseconds
    #[arg(long, default_value_t = 250)]
    delay_ms: u64,

    /// Pause before restoring the terminal, in milliseconds
    #[arg(long, default_value_t = 1000)]
    hold_ms: u64,

    /// Fail on the first error during a move instead of ignoring it
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DirectionArg {
    Left,
    Right,
    Up,
    Down,
}

impl From<DirectionArg> for MoveDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => MoveDirection::Left,
            DirectionArg::Right => MoveDirection::Right,
            DirectionArg::Up => MoveDirection::Up,
            DirectionArg::Down => MoveDirection::Down,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show(args) => cmd_show(args),
        Commands::Styles { format } => cmd_styles(format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = io::stdout().execute(Show);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_show(args: ShowArgs) -> Result<(), String> {
    let config = FieldConfig {
        move_policy: if args.strict {
            MovePolicy::Strict
        } else {
            MovePolicy::Permissive
        },
    };

    install_panic_hook();
    let mut driver = BackendDriver::stdout();
    driver.init().map_err(|e| e.to_string())?;

    let mut manager = FieldManager::new(driver).with_config(config);
    let drawn = draw_scripted(&mut manager, &args);

    thread::sleep(Duration::from_millis(args.hold_ms));
    let closed = manager.driver_mut().close();

    // Report the drawing error first; it is the more useful one
    let snapshot = drawn?;
    closed.map_err(|e| e.to_string())?;

    print!("{}", format_field(&snapshot, args.format.into()));
    Ok(())
}

/// Create the field, border it, and replay each move with a pause.
fn draw_scripted<D: Driver>(
    manager: &mut FieldManager<'_, D>,
    args: &ShowArgs,
) -> Result<FieldSnapshot, String> {
    let length = args.length.unwrap_or_else(|| default_length(&args.text));

    let mut field = manager
        .create_field(args.y, args.x, length, args.text.as_str())
        .map_err(|e| e.to_string())?;
    manager
        .draw_box(&mut field, args.style)
        .map_err(|e| e.to_string())?;

    for &dir in &args.moves {
        thread::sleep(Duration::from_millis(args.delay_ms));
        manager
            .move_field(&mut field, dir.into())
            .map_err(|e| e.to_string())?;
    }

    info!("field settled at ({}, {})", field.x(), field.y());
    Ok(field.snapshot())
}

/// One cell per char, saturating at `i32::MAX`.
fn default_length(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}

fn cmd_styles(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_styles(StyleRegistry::builtin(), format));
    Ok(())
}
