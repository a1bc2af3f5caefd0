// src/domain/states.rs
use super::bids::Bid;

/// What the evaluator needs to know about an auction.
pub trait BidSource {
    fn is_finalized(&self) -> bool;
    /// Bids in the order they were received.
    fn bids(&self) -> &[Bid];
}
