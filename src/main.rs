use anyhow::Context;
use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use tiny_parser::arithmetic;
use tiny_parser::parser::Parser;

const DEFAULT_EXPRESSION: &str = "(1+2+3)*(4+5+6)";

/// Parse an integer arithmetic expression with a combinator grammar.
#[derive(Debug, clap::Parser)]
#[command(name = "tiny-parser", version)]
struct Cli {
    /// Expression made of integers, `+ - * /` and parentheses
    #[arg(default_value = DEFAULT_EXPRESSION)]
    expression: String,

    /// Print only the value, failing on parse errors, trailing input or arithmetic faults
    #[arg(long)]
    evaluate: bool,

    /// Report trailing input as a parse failure
    #[arg(long, conflicts_with = "evaluate")]
    complete: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.evaluate {
        let value = arithmetic::evaluate(&cli.expression)
            .with_context(|| format!("failed to evaluate `{}`", cli.expression))?;
        println!("{value}");
        return Ok(());
    }

    let grammar = arithmetic::grammar().context("failed to build the arithmetic grammar")?;
    let grammar = if cli.complete {
        grammar.complete()
    } else {
        grammar
    };

    println!("parsed: {}", grammar.parse(&cli.expression));

    Ok(())
}
