/*
Copyright 2024 NetApp, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    https://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use crate::operand::{parse_half, parse_value};
use clap::{Parser, Subcommand};
use doubleints::SplitPair;
use log::{debug, error};
use std::error::Error;

mod operand;

#[derive(Parser, Debug)]
#[command(author, version, about="Splits doubles into two 32-bit integers and joins them back", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Splits a double into its low and high 32-bit halves
    Split {
        /// Decimal value (inf, NaN and -0 are accepted) or raw 64-bit pattern as 0x...
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Prints the halves as raw hex bits instead of signed decimals
        #[arg(long, action)]
        hex: bool,
    },
    /// Joins a low and a high 32-bit half into a double
    Ligate {
        /// Low half, decimal i32 or raw bits as 0x...
        #[arg(allow_hyphen_values = true)]
        low: String,

        /// High half, decimal i32 or raw bits as 0x...
        #[arg(allow_hyphen_values = true)]
        high: String,
    },
}

fn split_value(literal: &str, hex: bool) -> Result<String, Box<dyn Error>> {
    let value = parse_value(literal)?;
    debug!("Splitting {} (0x{:016x})", value, value.to_bits());
    let pair = SplitPair::from(value);
    debug!("Split into {}", pair);
    if hex {
        Ok(format!("0x{:08x} 0x{:08x}", pair.low_bits(), pair.high_bits()))
    } else {
        Ok(format!("{} {}", pair.low, pair.high))
    }
}

fn ligate_halves(low: &str, high: &str) -> Result<String, Box<dyn Error>> {
    let pair = SplitPair::new(parse_half(low)?, parse_half(high)?);
    debug!("Constructing double from {}", pair);
    let value = f64::from(pair);
    Ok(format!("{} 0x{:016x}", value, value.to_bits()))
}

/// Processes the given input based on the provided arguments.
fn process_args(arguments: &Args) -> Result<(), Box<dyn Error>> {
    let output = match &arguments.command {
        Command::Split { value, hex } => split_value(value, *hex)?,
        Command::Ligate { low, high } => ligate_halves(low, high)?,
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    let arguments = Args::parse();
    debug!("{:?}", arguments);

    if let Err(e) = process_args(&arguments) {
        error!("{}", e);
        std::process::exit(1);
    }
}
