// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command line METAR decoder.
//!
//! Decodes reports from a literal argument, a file or stdin and prints
//! them human-readable. A malformed report is diagnosed on stderr and
//! exits non-zero; well-formed lines ahead of the failure are not printed.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use metar::Report;

/// Decode aviation routine weather reports (METAR).
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Report to decode; stdin is read when neither this nor --file is given
    report: Option<String>,

    /// Read reports from a text file, one per line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable the decode trace
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("avparse: {err}");
            return ExitCode::FAILURE;
        }
    };

    match Report::decode(&input) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("avparse: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(cli: &Cli) -> io::Result<String> {
    if let Some(report) = &cli.report {
        Ok(report.clone())
    } else if let Some(file) = &cli.file {
        fs::read_to_string(file)
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }
}
