//! Command-line front end for the complexity engine.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use lz76_rs::{ComplexityEngine, ComplexityError, ComplexityResult, EngineConfig, Strategy};

/// Lempel-Ziv (LZ76) complexity of a file or a line of text.
#[derive(Debug, Parser)]
#[command(name = "lz76")]
#[command(about = "Lempel-Ziv complexity of symbol sequences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Measure the complexity of an input. Without --file or --text, asks interactively.
    Measure {
        /// Read the input from this file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Use this string as the input.
        #[arg(long)]
        text: Option<String>,
        /// Strategy: auto, naive, suffix-array or suffix-automaton.
        #[arg(long, default_value = "auto")]
        strategy: Strategy,
        /// Memory ceiling for the suffix automaton, in bytes.
        #[arg(long, default_value_t = lz76_rs::DEFAULT_MEMORY_LIMIT)]
        memory_limit: usize,
        /// Time budget for the naive attempt under `auto`, in milliseconds.
        #[arg(long, default_value_t = lz76_rs::DEFAULT_TIME_BUDGET.as_millis() as u64)]
        time_budget_ms: u64,
        /// Longest input `auto` tries the naive scan on.
        #[arg(long, default_value_t = lz76_rs::DEFAULT_NAIVE_LENGTH_LIMIT)]
        naive_limit: usize,
        /// Treat the input as UTF-8 text (one symbol per character) instead of bytes.
        #[arg(long)]
        utf8: bool,
    },
    /// Print a test string to stdout.
    Generate {
        /// `const` repeats "ab" (low complexity), `rnd` draws random letters (high complexity).
        kind: GenerateKind,
        /// Number of repetitions or letters.
        size: usize,
        /// Seed for `rnd`.
        #[arg(long, default_value_t = 12345)]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenerateKind {
    Const,
    Rnd,
}

const PREVIEW_SYMBOLS: usize = 256;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Measure {
            file,
            text,
            strategy,
            memory_limit,
            time_budget_ms,
            naive_limit,
            utf8,
        } => {
            let raw = match (file, text) {
                (Some(path), _) => read_file(&path),
                (None, Some(text)) => text.into_bytes(),
                (None, None) => read_interactive()?,
            };

            let config = EngineConfig::default()
                .with_strategy(strategy)
                .with_memory_limit(memory_limit)
                .with_time_budget(Duration::from_millis(time_budget_ms))
                .with_naive_length_limit(naive_limit);
            let engine = ComplexityEngine::new(config)?;

            let outcome = if utf8 {
                let symbols: Vec<char> = decode_utf8(&raw).chars().collect();
                let preview: String = symbols.iter().take(PREVIEW_SYMBOLS).collect();
                println!("Input length = {} characters", symbols.len());
                println!("\n{}...\n", preview);
                engine.compute(&symbols)
            } else {
                let preview = String::from_utf8_lossy(&raw[..raw.len().min(PREVIEW_SYMBOLS)]);
                println!("Input length = {} bytes", raw.len());
                println!("\n{}...\n", preview);
                engine.compute(&raw)
            };

            match outcome {
                Ok(result) => print_result(&result),
                Err(ComplexityError::ResourceExhausted { estimated, limit }) => {
                    eprintln!(
                        "Estimated memory for the transition table is {:.3} GB, limit is {:.3} GB.",
                        estimated as f64 / 1e9,
                        limit as f64 / 1e9
                    );
                    eprintln!("Use a smaller input, raise --memory-limit, or pick --strategy suffix-array.");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Generate { kind, size, seed } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match kind {
                GenerateKind::Const => writeln!(out, "{}", "ab".repeat(size))?,
                GenerateKind::Rnd => writeln!(out, "{}", random_letters(size, seed))?,
            }
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|err| {
        eprintln!("{}", read_error(path, &err));
        std::process::exit(1);
    })
}

fn read_error(path: &Path, err: &io::Error) -> String {
    format!("{}: {}", path.display(), err)
}

/// Decodes `raw` as UTF-8, warning when invalid sequences are replaced by U+FFFD.
fn decode_utf8(raw: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(text) => Cow::Borrowed(text),
        Err(err) => {
            log::warn!(
                "input is not valid UTF-8 after byte {}, invalid sequences are read as U+FFFD",
                err.valid_up_to()
            );
            String::from_utf8_lossy(raw)
        }
    }
}

fn prompt(stdin: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_interactive() -> io::Result<Vec<u8>> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    println!("Menu:\n");
    println!("Read from [F]ile\n");
    println!("Read from [K]eyboard\n");
    let choice = prompt(&mut stdin, "> ")?;

    if choice.trim().eq_ignore_ascii_case("f") {
        let name = prompt(&mut stdin, "What file: ")?;
        Ok(read_file(Path::new(name.trim())))
    } else {
        Ok(prompt(&mut stdin, "give me a string: ")?.into_bytes())
    }
}

fn print_result(result: &ComplexityResult) {
    println!("Lempel-Ziv complexity ({}) = {}", result.metric, result.count);
    println!("Elapsed time = {:.6} seconds", result.elapsed.as_secs_f64());
    println!("Strategy used = {}", result.strategy_used);
    if !result.discarded.is_zero() {
        println!(
            "Abandoned naive attempt after {:.6} seconds",
            result.discarded.as_secs_f64()
        );
    }
}

/// Letters from a linear congruential generator; reproducible for a given seed.
fn random_letters(size: usize, seed: u64) -> String {
    let letters = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut state = seed;
    (0..size)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            letters[((state >> 33) % letters.len() as u64) as usize] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_budget_default_follows_library() {
        let cli = Cli::try_parse_from(["lz76", "measure", "--text", "abab"]).unwrap();
        match cli.command {
            Command::Measure { time_budget_ms, .. } => {
                assert_eq!(
                    Duration::from_millis(time_budget_ms),
                    lz76_rs::DEFAULT_TIME_BUDGET
                );
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn test_read_error_keeps_the_cause() {
        let path = Path::new("data.bin");
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let message = read_error(path, &err);
        assert_eq!(message, "data.bin: permission denied");
        assert!(!message.contains("not found"));
    }

    #[test]
    fn test_decode_utf8() {
        assert!(matches!(decode_utf8("ab€".as_bytes()), Cow::Borrowed("ab€")));
        let lossy = decode_utf8(&[b'a', 0xff, 0xfe, b'b']);
        assert_eq!(lossy, "a\u{fffd}\u{fffd}b");
    }

    #[test]
    fn test_random_letters_are_reproducible() {
        assert_eq!(random_letters(64, 7), random_letters(64, 7));
        assert_ne!(random_letters(64, 7), random_letters(64, 8));
        assert_eq!(random_letters(64, 7).len(), 64);
    }
}
