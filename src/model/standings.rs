use serde::Deserialize;

/// Ranked win/loss/spread state of every player as of one round
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StandingsSnapshot {
    #[serde(default)]
    pub standings: Vec<StandingRow>,
}

impl StandingsSnapshot {
    pub fn row_for(&self, player_id: &str) -> Option<&StandingRow> {
        self.standings.iter().find(|row| row.player_id == player_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StandingRow {
    pub player_id: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    /// Cumulative point differential
    #[serde(default)]
    pub spread: i32,
}

impl StandingRow {
    /// Effective (wins, losses) with each draw counting half, formatted for display
    pub fn record(&self) -> (String, String) {
        let half = self.draws as f64 / 2.0;
        (
            format_count(self.wins as f64 + half),
            format_count(self.losses as f64 + half),
        )
    }
}

/// Whole numbers render without a fractional part; half wins render as `x.5`
fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
