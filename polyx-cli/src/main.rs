use anyhow::Context;
use clap::{Parser, Subcommand};
use polyx_rs::expression::Expression;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Build the sample polynomials, then print, evaluate, and simplify them.
    Demo {
        /// The value substituted for X during evaluation.
        #[arg(short = 'x', long = "at", default_value_t = 2)]
        at: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo { at } => handle_demo(at)?,
    };

    Ok(())
}

fn handle_demo(at: i64) -> anyhow::Result<()> {
    let polynomial = original_polynomial();
    println!("Original polynomial: {polynomial}");

    let value = polynomial
        .evaluate(at)
        .context("Failed to evaluate the original polynomial.")?;
    println!("Evaluation for X={at}: {value}");
    println!("Simplified: {}", polynomial.into_simplified());

    let mixed = mixed_polynomial();
    println!("Test polynomial: {mixed}");
    let value = mixed
        .evaluate(4)
        .context("Failed to evaluate the test polynomial.")?;
    println!("Evaluation for X=4: {value}");

    // A zero divisor survives simplification untouched; the failure only
    // surfaces once the quotient is evaluated.
    let stuck = Expression::constant(6) / Expression::constant(0);
    println!("Zero divisor: {stuck} simplifies to {}", stuck.clone().into_simplified());
    match stuck.evaluate(at) {
        Ok(value) => println!("Evaluation for X={at}: {value}"),
        Err(error) => println!("Evaluation failed: {error}"),
    }

    Ok(())
}

/// `4 + 3 + X + 1 * (X * X + 1)`
fn original_polynomial() -> Expression {
    (Expression::constant(4) + Expression::constant(3))
        + (Expression::variable()
            + Expression::constant(1)
                * (Expression::variable() * Expression::variable() + Expression::constant(1)))
}

/// `2 * X - 1 + 6 / 2`
fn mixed_polynomial() -> Expression {
    (Expression::constant(2) * Expression::variable() - Expression::constant(1))
        + Expression::constant(6) / Expression::constant(2)
}
