// src/domain/auctions.rs
use log::debug;
use serde::{Deserialize, Serialize};
use super::bids::Bid;
use super::core::Errors;
use super::states::BidSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    item: String,
    #[serde(default)]
    finalized: bool,
    #[serde(default)]
    bids: Vec<Bid>,
}

impl Auction {
    pub fn new(item: impl Into<String>) -> Self {
        Auction {
            item: item.into(),
            finalized: false,
            bids: Vec::new(),
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    /// Appends a bid. Closed auctions take no more bids.
    pub fn receive_bid(&mut self, bid: Bid) -> Result<(), Errors> {
        if self.finalized {
            return Err(Errors::AuctionHasEnded(self.item.clone()));
        }
        debug!("{}: bid of {} from {}", self.item, bid.amount(), bid.bidder().user_id());
        self.bids.push(bid);
        Ok(())
    }

    pub fn finalize(&mut self) -> Result<(), Errors> {
        if self.finalized {
            return Err(Errors::AuctionHasEnded(self.item.clone()));
        }
        debug!("{}: finalized with {} bids", self.item, self.bids.len());
        self.finalized = true;
        Ok(())
    }
}

impl BidSource for Auction {
    fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn bids(&self) -> &[Bid] {
        &self.bids
    }
}
