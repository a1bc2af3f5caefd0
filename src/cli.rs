// src/cli.rs
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;
use crate::domain::{Auction, BidSource};
use crate::evaluator::{evaluate, EvaluationError};

/// Prints the highest, lowest and top three bids of an auction as JSON.
#[derive(Debug, Parser)]
#[command(name = "auction-evaluator", version)]
pub struct Args {
    /// Auction JSON document. Read from stdin when omitted.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse auction: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl Args {
    pub fn input(&self) -> Result<Box<dyn Read>, RunError> {
        match &self.path {
            Some(path) => Ok(Box::new(File::open(path)?)),
            None => Ok(Box::new(io::stdin())),
        }
    }
}

/// Reads one auction document and renders its evaluation.
pub fn run<R: Read>(mut input: R) -> Result<String, RunError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let auction: Auction = serde_json::from_str(&text)?;
    info!("Evaluating {} bids on {}", auction.bids().len(), auction.item());

    let evaluation = evaluate(&auction)?;
    Ok(serde_json::to_string_pretty(&evaluation)?)
}
