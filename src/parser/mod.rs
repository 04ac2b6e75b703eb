pub mod tournament;

pub use tournament::parse_tournament;
