// src/evaluator.rs
use log::debug;
use serde::Serialize;
use thiserror::Error;
use crate::domain::{Bid, BidSource};
use crate::money::Amount;

/// How many bids `top_three` keeps.
pub const TOP_BIDS: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("auction already finalized")]
    AuctionAlreadyFinalized,

    #[error("cannot evaluate an empty auction")]
    EmptyAuction,

    #[error("no auction has been evaluated yet")]
    NotYetEvaluated,
}

/// Highest and lowest amounts plus the best bids, highest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    highest: Amount,
    lowest: Amount,
    #[serde(rename = "topThree")]
    top_three: Vec<Bid>,
}

impl Evaluation {
    pub fn highest(&self) -> Amount {
        self.highest
    }

    pub fn lowest(&self) -> Amount {
        self.lowest
    }

    pub fn top_three(&self) -> &[Bid] {
        &self.top_three
    }
}

pub fn evaluate<A: BidSource + ?Sized>(auction: &A) -> Result<Evaluation, EvaluationError> {
    if auction.is_finalized() {
        return Err(EvaluationError::AuctionAlreadyFinalized);
    }

    let bids = auction.bids();
    let first = bids.first().ok_or(EvaluationError::EmptyAuction)?.amount();

    // Strict comparisons: on ties the first amount seen is kept.
    let (highest, lowest) = bids[1..].iter().map(Bid::amount).fold(
        (first, first),
        |(highest, lowest), amount| {
            (
                if amount > highest { amount } else { highest },
                if amount < lowest { amount } else { lowest },
            )
        },
    );

    // Stable, so equal amounts keep the order they were placed in.
    let mut ranked = bids.to_vec();
    ranked.sort_by(|a, b| b.amount().cmp_value(&a.amount()));
    ranked.truncate(TOP_BIDS);

    debug!(
        "evaluated {} bids: highest {}, lowest {}",
        bids.len(),
        highest,
        lowest
    );

    Ok(Evaluation {
        highest,
        lowest,
        top_three: ranked,
    })
}

/// Keeps the result of the latest successful evaluation around for the
/// accessor style of use. A failed evaluation keeps the previous result.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    last: Option<Evaluation>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::default()
    }

    pub fn evaluate<A: BidSource + ?Sized>(&mut self, auction: &A) -> Result<&Evaluation, EvaluationError> {
        let evaluation = evaluate(auction)?;
        Ok(self.last.insert(evaluation))
    }

    pub fn last(&self) -> Result<&Evaluation, EvaluationError> {
        self.last.as_ref().ok_or(EvaluationError::NotYetEvaluated)
    }

    pub fn highest(&self) -> Result<Amount, EvaluationError> {
        self.last().map(Evaluation::highest)
    }

    pub fn lowest(&self) -> Result<Amount, EvaluationError> {
        self.last().map(Evaluation::lowest)
    }

    pub fn top_three(&self) -> Result<&[Bid], EvaluationError> {
        self.last().map(Evaluation::top_three)
    }
}
