//! Command-line surface for `autobahn-cli`.
//!
//! Two entry points mirror the two test harnesses this crate's algorithms
//! were validated against originally: a single `eval` computation for
//! interactive use, and a `vectors` batch runner that streams hex operand
//! pairs from files the way a test-vector-driven CI job would.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use crate::bigint::{Bigint, BigintError, Sign, add, karatsuba_multiply, schoolbook_multiply, sub};

#[derive(Parser)]
#[command(name = "autobahn-cli", author, version, about = "Arbitrary-precision arithmetic test harness")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a single operation on two hex operands and print the result.
    Eval(EvalArgs),
    /// Run an operation over paired hex operands read line-by-line from
    /// two files, writing one result per line.
    Vectors(VectorsArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    SchoolbookMul,
    Div,
}

#[derive(clap::Args)]
pub struct EvalArgs {
    #[arg(value_enum)]
    pub op: Operation,
    pub x: String,
    pub y: String,
}

#[derive(clap::Args)]
pub struct VectorsArgs {
    #[arg(value_enum)]
    pub op: Operation,

    /// File of big-endian hex values, one per line, for the X operand.
    #[arg(long)]
    pub operand_x: PathBuf,

    /// File of big-endian hex values, one per line, for the Y operand.
    #[arg(long)]
    pub operand_y: PathBuf,

    /// Where to write results (quotients, for `div`).
    #[arg(long)]
    pub output: PathBuf,

    /// Where to write remainders. Required when `op = div`.
    #[arg(long)]
    pub output_remainder: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Eval(args) => args.run(),
            Command::Vectors(args) => args.run(),
        }
    }
}

impl EvalArgs {
    pub fn run(self) -> Result<()> {
        let x = Bigint::parse_hex(&self.x, Sign::Positive);
        let y = Bigint::parse_hex(&self.y, Sign::Positive);

        match self.op {
            Operation::Add => println!("{}", add(&x, &y)),
            Operation::Sub => println!("{}", sub(&x, &y)),
            Operation::Mul => println!("{}", karatsuba_multiply(&x, &y)),
            Operation::SchoolbookMul => println!("{}", schoolbook_multiply(&x, &y)),
            Operation::Div => match crate::bigint::word_long_divide(&x, &y) {
                Ok(dr) => println!("{} r {}", dr.quotient, dr.remainder),
                Err(BigintError::DivisionByZero) => println!("DIV0!"),
                Err(e) => bail!(e),
            },
        }
        Ok(())
    }
}

impl VectorsArgs {
    pub fn run(self) -> Result<()> {
        if matches!(self.op, Operation::Div) && self.output_remainder.is_none() {
            bail!("div requires --output-remainder");
        }

        let xs = read_lines(&self.operand_x)?;
        let ys = read_lines(&self.operand_y)?;
        if xs.len() != ys.len() {
            bail!(
                "operand files have mismatched line counts: {} vs {}",
                xs.len(),
                ys.len()
            );
        }

        let mut out = File::create(&self.output)
            .with_context(|| format!("creating {}", self.output.display()))?;
        let mut remainder_out = match &self.output_remainder {
            Some(path) => {
                Some(File::create(path).with_context(|| format!("creating {}", path.display()))?)
            }
            None => None,
        };

        for (x_str, y_str) in xs.iter().zip(ys.iter()) {
            let x = Bigint::parse_hex(x_str, Sign::Positive);
            let y = Bigint::parse_hex(y_str, Sign::Positive);

            match self.op {
                Operation::Add => writeln!(out, "{}", add(&x, &y))?,
                Operation::Sub => writeln!(out, "{}", sub(&x, &y))?,
                Operation::Mul => writeln!(out, "{}", karatsuba_multiply(&x, &y))?,
                Operation::SchoolbookMul => writeln!(out, "{}", schoolbook_multiply(&x, &y))?,
                Operation::Div => match crate::bigint::word_long_divide(&x, &y) {
                    Ok(dr) => {
                        writeln!(out, "{}", dr.quotient)?;
                        writeln!(remainder_out.as_mut().unwrap(), "{}", dr.remainder)?;
                    }
                    Err(BigintError::DivisionByZero) => {
                        writeln!(out, "DIV0!")?;
                        writeln!(remainder_out.as_mut().unwrap(), "DIV0!")?;
                    }
                    Err(e) => bail!(e),
                },
            }
        }

        Ok(())
    }
}

fn read_lines(path: &PathBuf) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    BufReader::new(file)
        .lines()
        .map(|line| line.map_err(Into::into))
        .collect()
}
