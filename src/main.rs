use battleship_round::{init_logging, RoundConfig, RoundEvaluator};
use clap::Parser;

/// Score one round of battleships: count the ships sunk by a set of guesses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ship placement as start and end cell, e.g. --ship 3:2,3:5
    #[arg(long = "ship", value_name = "R:C,R:C")]
    ships: Vec<String>,
    /// Guessed cell, e.g. --guess 7:0
    #[arg(long = "guess", value_name = "R:C")]
    guesses: Vec<String>,
    #[arg(long, help = "Reject single-cell ships such as 5:5,5:5")]
    strict_length: bool,
    #[arg(long, help = "Print the round result as JSON instead of the text summary")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = if cli.strict_length {
        RoundConfig::strict()
    } else {
        RoundConfig::default()
    };
    let evaluator = RoundEvaluator::new(config);

    if cli.json {
        let result = evaluator.evaluate(&cli.ships, &cli.guesses)?;
        println!("{}", serde_json::to_string(&result)?);
    } else {
        evaluator.play(&cli.ships, &cli.guesses)?;
    }
    Ok(())
}
