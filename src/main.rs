use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::io::{self, Read, Write};

use regionfind::{classify_with, enclosed_regions, Grid, Strategy};

/// regionfind - Capture surrounded regions on an O/X board
///
/// Every 'O' that cannot reach the border through adjacent 'O' cells is flipped to 'X'
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board file, one row per line (stdin if not specified)
    #[clap(value_name = "BOARD")]
    input: Option<String>,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Algorithm used to find surrounded regions
    #[clap(short = 's', long = "strategy", value_enum, default_value_t = Strategy::UnionFind)]
    strategy: Strategy,

    /// List enclosed regions as "r,c" cells instead of printing the board
    #[clap(long = "regions")]
    regions: bool,

    /// Quiet mode (errors only)
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_board(input: Option<&str>) -> Result<Grid> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board from {path}"))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read board from stdin")?;
            text
        }
    };
    let grid = text
        .parse::<Grid>()
        .with_context(|| format!("Malformed board in {}", input.unwrap_or("stdin")))?;
    Ok(grid)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    // If no input specified and nothing is piped in, print help
    if args.input.is_none() {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() {
            use clap::CommandFactory;
            Args::command().print_help()?;
            std::process::exit(0);
        }
    }

    let mut grid = read_board(args.input.as_deref())?;
    info!("Read {}x{} board", grid.rows(), grid.cols());

    let mut output: Box<dyn Write> = if let Some(ref path) = args.output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {path}"))?,
        )
    } else {
        Box::new(io::stdout())
    };

    if args.regions {
        let regions = enclosed_regions(&grid)?;
        info!("Found {} enclosed regions", regions.len());
        for region in &regions {
            let cells: Vec<String> = region.iter().map(|(r, c)| format!("{r},{c}")).collect();
            writeln!(output, "{}", cells.join(" "))?;
        }
    } else {
        let captured = classify_with(&mut grid, args.strategy)?;
        info!("Captured {captured} cells using {}", args.strategy);
        write!(output, "{grid}")?;
    }
    output.flush()?;

    Ok(())
}
