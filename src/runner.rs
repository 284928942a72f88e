// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fmt,
    io::{stdout, Write},
};

use log::info;

use clap::{Parser, ValueEnum};

use crate::errors::FastaError;
use crate::seq::fasta::read_fasta;
use crate::seq::map::SeqMap;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file
    fasta_fname: String,

    /// Output format
    #[arg(short, long = "format", default_value_t = OutputFormat::Tsv,
        help = "Output format [tsv|json|info] (or just t|j|i); default: tsv",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(name = "tsv")]
    #[clap(alias = "t")]
    Tsv,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
    #[clap(name = "info")]
    #[clap(alias = "i")]
    Info,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
            OutputFormat::Info => "info",
        };
        write!(f, "{}", s)
    }
}

pub fn render(name: &str, seqs: &SeqMap, format: OutputFormat) -> Result<String, FastaError> {
    let mut out = String::new();
    match format {
        OutputFormat::Tsv => {
            for rec in seqs {
                out.push_str(&rec.header);
                out.push('\t');
                out.push_str(&rec.sequence);
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(seqs)?;
            out.push('\n');
        }
        OutputFormat::Info => {
            out.push_str(&format!("name: {}\n", name));
            out.push_str(&format!("nb_sequences: {}\n", seqs.len()));
            out.push_str(&format!("total_length: {}\n", seqs.total_length()));
        }
    }
    Ok(out)
}

pub fn run() -> Result<(), FastaError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    info!("Output format: {}", cli.format);

    let seqs = read_fasta(&cli.fasta_fname)?;
    let text = render(&cli.fasta_fname, &seqs, cli.format)?;

    let mut handle = stdout().lock();
    handle.write_all(text.as_bytes())?;
    handle.flush()?;
    Ok(())
}
