pub mod coordinate;
pub mod history;
pub mod voting;
