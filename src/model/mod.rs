pub mod metadata;
pub mod pairing;
pub mod standings;
pub mod tournament;

pub use metadata::{TournamentMeta, TournamentMetadata};
pub use pairing::{title_case, GameResult, PairingRecord, Seating};
pub use standings::{StandingRow, StandingsSnapshot};
pub use tournament::{Division, Player, Roster, RoundControl, Tournament, TournamentData};
