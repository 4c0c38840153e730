use clap::{Parser, Subcommand};
use seqsynth::{extend, Predictor};

#[derive(Parser)]
#[command(name = "seqsynth")]
#[command(about = "seqsynth - numeric sequence predictor")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the continuation of a numeric sequence
    Predict {
        /// Comma-separated sequence values, e.g. 2,4,6,8,10
        sequence: String,
        /// Number of values to predict
        #[arg(long, default_value = "5")]
        count: usize,
        /// Maximum depth of candidate expression trees
        #[arg(long, default_value = "3")]
        max_depth: usize,
        /// Maximum number of candidate expressions to try
        #[arg(long, default_value = "1000000")]
        max_attempts: u64,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Options for a prediction run
struct PredictOptions {
    count: usize,
    max_depth: usize,
    max_attempts: u64,
    seed: Option<u64>,
    verbose: bool,
}

fn parse_sequence(input: &str) -> Result<Vec<i64>, String> {
    let values: Result<Vec<i64>, String> = input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| format!("Invalid sequence value: '{}'", s))
        })
        .collect();

    let values = values?;
    if values.is_empty() {
        return Err("Sequence is empty".to_string());
    }
    Ok(values)
}

fn predict_sequence(
    sequence: &[i64],
    options: &PredictOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let predictor = Predictor::new()
        .with_max_depth(options.max_depth)
        .with_max_attempts(options.max_attempts)
        .with_seed_option(options.seed);

    if options.verbose {
        println!("Searching for a recurrence...");
        println!("  Max depth: {}", options.max_depth);
        println!("  Max attempts: {}", options.max_attempts);
        if let Some(seed) = options.seed {
            println!("  Seed: {}", seed);
        }
    }

    let matched = predictor.explain(sequence)?;
    println!("Matched expression: {}", matched.expression);

    if options.verbose {
        println!("\nSearch statistics:");
        print!("{}", matched.statistics.format_summary());
    }

    let rest = extend(sequence, &matched.expression, options.count)?;
    let rendered: Vec<String> = rest.iter().map(|v| v.to_string()).collect();
    println!("Predicted continuation: {}", rendered.join(", "));

    Ok(())
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Predict {
            sequence,
            count,
            max_depth,
            max_attempts,
            seed,
            verbose,
        } => {
            let values = match parse_sequence(&sequence) {
                Ok(values) => values,
                Err(e) => {
                    eprintln!("Error parsing sequence: {}", e);
                    std::process::exit(1);
                }
            };

            let options = PredictOptions {
                count,
                max_depth,
                max_attempts,
                seed,
                verbose,
            };

            if let Err(e) = predict_sequence(&values, &options) {
                eprintln!("Error during prediction: {}", e);
                std::process::exit(1);
            }
        }
    }
}
