use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twenty_four::solver::constants::{DEFAULT_OPERAND_COUNT, DEFAULT_TARGET};
use twenty_four::{ExpressionSolver, SolverConfig, UtilsError, parse_hand, to_display_symbols};

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

/// twenty-four - Solve the 24 points card game
#[derive(Parser, Debug)]
#[command(name = "twenty-four")]
#[command(
    about = "Find every arithmetic expression that combines a hand of numbers into a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers of the hand, separated by spaces or commas. Without them hands are read from stdin
    pub numbers: Vec<String>,

    /// Target value to reach
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    pub target: f64,

    /// How many numbers make up a hand
    #[arg(short = 'n', long, default_value_t = DEFAULT_OPERAND_COUNT)]
    pub count: usize,

    /// Print solutions with × and ÷
    #[arg(short, long)]
    pub unicode: bool,

    /// Read one hand per line from stdin and solve them all in parallel
    #[arg(short, long)]
    pub batch: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What to solve
#[derive(Debug)]
pub enum Mode {
    Single(Vec<f64>),
    Interactive,
    Batch,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub solver: SolverConfig,
    pub unicode: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

fn build_config(args: CliArgs) -> Result<CliConfig> {
    let solver = SolverConfig {
        target: args.target,
        operand_count: args.count,
        ..SolverConfig::default()
    };

    let mode = if args.numbers.is_empty() {
        if args.batch {
            Mode::Batch
        } else {
            Mode::Interactive
        }
    } else {
        if args.batch {
            bail!("--batch reads hands from stdin and takes no numbers");
        }
        let numbers =
            parse_hand(&args.numbers.join(" "), args.count).context("Invalid hand")?;
        Mode::Single(numbers)
    };

    Ok(CliConfig {
        mode,
        solver,
        unicode: args.unicode,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Print one `expression = target` line per solution, or `No solution.`
fn print_solutions<W: Write>(
    out: &mut W,
    solutions: &[String],
    config: &CliConfig,
) -> io::Result<()> {
    if solutions.is_empty() {
        return writeln!(out, "No solution.");
    }
    for solution in solutions {
        if config.unicode {
            writeln!(out, "{} = {}", to_display_symbols(solution), config.solver.target)?;
        } else {
            writeln!(out, "{} = {}", solution, config.solver.target)?;
        }
    }
    Ok(())
}

fn run_single<W: Write>(config: &CliConfig, numbers: &[f64], out: &mut W) -> Result<()> {
    let solver = ExpressionSolver::with_config(config.solver.clone());
    let solutions = solver.solve(numbers).context("Search failed")?;
    print_solutions(out, &solutions, config)?;
    Ok(())
}

/// Prompt for hands until `q` or end of input
fn run_interactive<R: BufRead, W: Write>(config: &CliConfig, input: R, out: &mut W) -> Result<()> {
    let solver = ExpressionSolver::with_config(config.solver.clone());
    let mut lines = input.lines();

    loop {
        eprint!("\n> Input {} integers: ", config.solver.operand_count);
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line == "q" {
            break;
        }

        match parse_hand(line, config.solver.operand_count) {
            Ok(numbers) => {
                let solutions = solver.solve(&numbers).context("Search failed")?;
                print_solutions(out, &solutions, config)?;
            }
            Err(e) => {
                warn!("Ignoring input '{}': {}", line, e);
                writeln!(out, "Error: {}", e)?;
            }
        }
        out.flush()?;
    }

    eprintln!("\nBye bye");
    Ok(())
}

/// Solve every non-empty line of `input` and print results in input order
fn run_batch<R: BufRead, W: Write>(config: &CliConfig, input: R, out: &mut W) -> Result<()> {
    let solver = ExpressionSolver::with_config(config.solver.clone());

    let mut parsed: Vec<(String, Result<Vec<f64>, UtilsError>)> = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parsed.push((
            line.to_string(),
            parse_hand(line, config.solver.operand_count),
        ));
    }

    let hands: Vec<Vec<f64>> = parsed
        .iter()
        .filter_map(|(_, hand)| hand.as_ref().ok().cloned())
        .collect();
    info!("Read {} hands, {} valid", parsed.len(), hands.len());
    let mut solved = solver.solve_batch(&hands).into_iter();

    for (line, hand) in &parsed {
        writeln!(out, "# {}", line)?;
        match hand {
            Ok(_) => match solved.next() {
                Some(Ok(solutions)) => print_solutions(out, &solutions, config)?,
                Some(Err(e)) => writeln!(out, "Error: {}", e)?,
                None => bail!("Missing result for hand '{}'", line),
            },
            Err(e) => {
                warn!("Skipping line '{}': {}", line, e);
                writeln!(out, "Error: {}", e)?;
            }
        }
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Solving for {} with hands of {} numbers",
        config.solver.target, config.solver.operand_count
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.mode {
        Mode::Single(numbers) => run_single(&config, numbers, &mut out),
        Mode::Interactive => run_interactive(&config, stdin.lock(), &mut out),
        Mode::Batch => run_batch(&config, stdin.lock(), &mut out),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn config_for(args: &[&str]) -> Option<CliConfig> {
        let args = CliArgs::try_parse_from(args).ok()?;
        build_config(args).ok()
    }

    fn output_of<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        let result = run(&mut out);
        assert!(result.is_ok());
        String::from_utf8(out).unwrap_or_default()
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["twenty-four", "4", "6", "2", "8", "-t", "10"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.numbers, vec!["4", "6", "2", "8"]);
            assert_eq!(args.target, 10.0);
            assert_eq!(args.count, 4);
            assert!(!args.unicode);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_build_config_modes() {
        let single = config_for(&["twenty-four", "4,6,2,8"]);
        assert!(matches!(single.map(|c| c.mode), Some(Mode::Single(n)) if n.len() == 4));

        let interactive = config_for(&["twenty-four"]);
        assert!(matches!(interactive.map(|c| c.mode), Some(Mode::Interactive)));

        let batch = config_for(&["twenty-four", "--batch"]);
        assert!(matches!(batch.map(|c| c.mode), Some(Mode::Batch)));
    }

    #[test]
    fn test_build_config_rejects_bad_hands() {
        assert!(config_for(&["twenty-four", "1", "2", "3"]).is_none());
        assert!(config_for(&["twenty-four", "1", "2", "x", "4"]).is_none());
        assert!(config_for(&["twenty-four", "--batch", "1", "2", "3", "4"]).is_none());
        assert!(config_for(&["twenty-four", "-n", "3", "1", "2", "3"]).is_some());
    }

    #[test]
    fn test_run_single() {
        let Some(config) = config_for(&["twenty-four", "3", "3", "8", "8"]) else {
            panic!("config should parse");
        };
        let output = output_of(|out| run_single(&config, &[3.0, 3.0, 8.0, 8.0], out));
        assert_eq!(output, "8 / (3 - 8 / 3) = 24\n");
    }

    #[test]
    fn test_run_single_unicode() {
        let Some(config) = config_for(&["twenty-four", "-u", "3", "3", "8", "8"]) else {
            panic!("config should parse");
        };
        let output = output_of(|out| run_single(&config, &[3.0, 3.0, 8.0, 8.0], out));
        assert_eq!(output, "8 ÷ (3 - 8 ÷ 3) = 24\n");
    }

    #[test]
    fn test_run_interactive() {
        let Some(config) = config_for(&["twenty-four"]) else {
            panic!("config should parse");
        };
        let input = Cursor::new("1 1 1 1\n1 2\n3 3 8 8\nq\n5 5 5 1\n");
        let output = output_of(|out| run_interactive(&config, input, out));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "No solution.",
                "Error: Too few numbers: expected 4, found 2",
                "8 / (3 - 8 / 3) = 24",
            ]
        );
    }

    #[test]
    fn test_run_batch() {
        let Some(config) = config_for(&["twenty-four", "--batch", "-t", "24"]) else {
            panic!("config should parse");
        };
        let input = Cursor::new("3 3 8 8\n\nabc\n1,1,1,1\n5 5 5 1\n");
        let output = output_of(|out| run_batch(&config, input, out));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# 3 3 8 8",
                "8 / (3 - 8 / 3) = 24",
                "# abc",
                "Error: Not an integer: abc",
                "# 1,1,1,1",
                "No solution.",
                "# 5 5 5 1",
                "(5 - 1 / 5) * 5 = 24",
            ]
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
