//! Command-line front end for the blackjack outcome simulator.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bjsim::{Event, MAX_DECKS, MIN_DECKS, Simulation, SimulationError, SimulationOptions};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bjsim",
    version,
    about = "Estimate dealer/push/player frequencies for a fixed-policy blackjack round"
)]
struct Cli {
    /// Number of decks in the shoe (1-8). Prompted for when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    decks: Option<u8>,

    /// Number of rounds to play. Prompted for when omitted.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    iterations: Option<u64>,

    /// Seed for the shoe's generator. Uses system entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of initial rounds to print card by card.
    #[arg(long, default_value_t = 5)]
    show: u64,

    /// Number of progress lines printed over the run.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    progress_steps: u64,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (decks, iterations) = read_counts(cli, &mut io::stdin().lock())?;

    let options = SimulationOptions::default()
        .with_decks(decks)
        .with_iterations(iterations)
        .with_seed(cli.seed)
        .with_shown_rounds(cli.show)
        .with_progress_steps(cli.progress_steps);

    println!(
        "Playing {iterations} rounds with {decks} deck{}...",
        if decks == 1 { "" } else { "s" }
    );

    let mut simulation = Simulation::from_options(options)?;
    let tally = simulation.run(|event| match event {
        Event::Round { round, .. } => println!("{round}"),
        Event::Progress { tally, .. } => {
            if let Some(fractions) = tally.fractions() {
                println!("{fractions}");
            }
        }
    });

    println!("{tally}");
    Ok(())
}

/// Takes the deck and round counts from the flags, prompting for any that
/// are missing.
fn read_counts(cli: &Cli, input: &mut impl BufRead) -> io::Result<(u8, u64)> {
    let decks = match cli.decks {
        Some(decks) => decks,
        None => prompt_decks(input)?,
    };
    let iterations = match cli.iterations {
        Some(iterations) => iterations,
        None => prompt_iterations(input)?,
    };
    Ok((decks, iterations))
}

fn prompt_decks(input: &mut impl BufRead) -> io::Result<u8> {
    loop {
        let answer = prompt_line(
            input,
            &format!("With how many decks would you like to play ({MIN_DECKS}-{MAX_DECKS})?"),
        )?;
        match answer.parse::<u8>() {
            Ok(decks) if (MIN_DECKS..=MAX_DECKS).contains(&decks) => return Ok(decks),
            _ => println!("Please enter a number from {MIN_DECKS} to {MAX_DECKS}."),
        }
    }
}

fn prompt_iterations(input: &mut impl BufRead) -> io::Result<u64> {
    loop {
        let answer = prompt_line(input, "How many games would you like to play?")?;
        match answer.parse::<u64>() {
            Ok(iterations) if iterations > 0 => return Ok(iterations),
            _ => println!("Please enter a positive number."),
        }
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    println!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ));
    }
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("bjsim").chain(args.iter().copied()))
    }

    #[test]
    fn deck_prompt_retries_until_in_range() {
        let mut input = Cursor::new("0\n9\nx\n3\n");
        assert_eq!(prompt_decks(&mut input).unwrap(), 3);
    }

    #[test]
    fn iteration_prompt_rejects_zero_and_garbage() {
        let mut input = Cursor::new("0\nabc\n5\n");
        assert_eq!(prompt_iterations(&mut input).unwrap(), 5);
    }

    #[test]
    fn closed_input_is_an_error() {
        let err = prompt_decks(&mut Cursor::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

        let err = prompt_iterations(&mut Cursor::new("0\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn flags_skip_the_prompts() {
        let counts = read_counts(
            &cli(&["--decks", "2", "--iterations", "40"]),
            &mut Cursor::new(""),
        )
        .unwrap();
        assert_eq!(counts, (2, 40));

        let counts = read_counts(&cli(&["--decks", "8"]), &mut Cursor::new(" 12 \n")).unwrap();
        assert_eq!(counts, (8, 12));
    }

    #[test]
    fn flags_reject_out_of_range_values() {
        assert!(Cli::try_parse_from(["bjsim", "--decks", "9"]).is_err());
        assert!(Cli::try_parse_from(["bjsim", "--iterations", "0"]).is_err());
    }
}
