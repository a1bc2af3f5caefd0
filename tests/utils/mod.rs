#![allow(dead_code)]
use auction_evaluator::domain::{Auction, Bid, User};
use auction_evaluator::money::Amount;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_item() -> String {
    "Fiat 147 0KM".to_string()
}

pub fn joao() -> User {
    User::new("joao", "João").expect("sample users are valid")
}

pub fn maria() -> User {
    User::new("maria", "Maria").expect("sample users are valid")
}

pub fn jose() -> User {
    User::new("jose", "Jose").expect("sample users are valid")
}

pub fn ana() -> User {
    User::new("ana", "Ana").expect("sample users are valid")
}

pub fn amount(value: f64) -> Amount {
    Amount::new(value).expect("sample amounts are positive")
}

pub fn bid(bidder: User, value: f64) -> Bid {
    Bid::new(bidder, amount(value))
}

pub fn auction_with(bids: Vec<Bid>) -> Auction {
    let mut auction = Auction::new(sample_item());
    for bid in bids {
        auction.receive_bid(bid).expect("open auction accepts bids");
    }
    auction
}

pub fn ascending_auction() -> Auction {
    auction_with(vec![
        bid(ana(), 1700.0),
        bid(joao(), 2000.0),
        bid(jose(), 2200.0),
        bid(maria(), 2500.0),
    ])
}

pub fn descending_auction() -> Auction {
    auction_with(vec![
        bid(maria(), 2500.0),
        bid(jose(), 2200.0),
        bid(joao(), 2000.0),
        bid(ana(), 1700.0),
    ])
}

pub fn shuffled_auction() -> Auction {
    auction_with(vec![
        bid(jose(), 2200.0),
        bid(maria(), 2500.0),
        bid(ana(), 1700.0),
        bid(joao(), 2000.0),
    ])
}

pub fn sample_auctions() -> Vec<Auction> {
    vec![ascending_auction(), descending_auction(), shuffled_auction()]
}

pub fn values(bids: &[Bid]) -> Vec<f64> {
    bids.iter().map(|bid| bid.amount().value()).collect()
}
