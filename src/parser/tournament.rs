use crate::error::InputError;
use crate::model::{Division, TournamentData};

/// Decode and validate an already-fetched tournament document
pub fn parse_tournament(content: &str) -> Result<TournamentData, InputError> {
    let data: TournamentData = serde_json::from_str(content)?;

    for (name, division) in &data.t.divisions {
        validate_division(name, division)?;
    }

    log::debug!(
        "Parsed tournament {:?} with {} divisions",
        data.meta.metadata.name,
        data.t.divisions.len()
    );

    Ok(data)
}

/// Check that every pairing refers to real roster entries
fn validate_division(name: &str, division: &Division) -> Result<(), InputError> {
    for (index, player) in division.players.persons.iter().enumerate() {
        if player.id.is_empty() {
            return Err(InputError::EmptyPlayerId {
                division: name.to_string(),
                index,
            });
        }
    }

    let count = division.player_count();
    for (pairing_id, record) in &division.pairing_map {
        if record.players.is_empty() {
            return Err(InputError::EmptyPairing {
                division: name.to_string(),
                pairing: pairing_id.clone(),
            });
        }
        if let Some(&index) = record.players.iter().find(|&&idx| idx >= count) {
            return Err(InputError::PlayerIndexOutOfRange {
                division: name.to_string(),
                pairing: pairing_id.clone(),
                index,
                count,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "meta": {"metadata": {"name": "Spring Open", "slug": "/tournament/spring"}},
        "t": {"divisions": {
            "B": {"players": {"persons": [{"id": "u1:bea"}]}, "round_controls": [{}]},
            "A": {
                "players": {"persons": [{"id": "u2:ann", "rating": 1700}, {"id": "u3:cal"}]},
                "round_controls": [{}, {}],
                "pairing_map": {
                    "p1": {"players": [0, 1], "outcomes": ["WIN", "LOSS"], "games": [{"scores": [400, 350]}]}
                },
                "standings": {"0": {"standings": [{"player_id": "u2:ann", "wins": 1, "spread": 50}]}}
            }
        }}
    }"#;

    #[test]
    fn test_parse_preserves_division_order() {
        let data = parse_tournament(MINIMAL).unwrap();
        let names: Vec<&str> = data.t.divisions.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(data.meta.metadata.name, "Spring Open");

        let a = &data.t.divisions["A"];
        assert_eq!(a.round_count(), 2);
        assert_eq!(a.players.persons[0].rating, 1700);
        assert_eq!(a.players.persons[1].rating, 0);
        assert!(a.standings_for_round(0).is_some());
    }

    #[test]
    fn test_out_of_range_player_index() {
        let json = r#"{
            "meta": {"metadata": {"name": "X", "slug": "/t/x"}},
            "t": {"divisions": {"A": {
                "players": {"persons": [{"id": "u1:a"}]},
                "pairing_map": {"p": {"players": [0, 4]}}
            }}}
        }"#;
        let err = parse_tournament(json).unwrap_err();
        assert!(matches!(
            err,
            InputError::PlayerIndexOutOfRange { index: 4, count: 1, .. }
        ));
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"{"meta": {"metadata": {"name": "X"}}, "t": {"divisions": {}}}"#;
        assert!(matches!(parse_tournament(json), Err(InputError::Json(_))));
    }

    #[test]
    fn test_empty_player_id() {
        let json = r#"{
            "meta": {"metadata": {"name": "X", "slug": "/t/x"}},
            "t": {"divisions": {"A": {"players": {"persons": [{"id": ""}]}}}}
        }"#;
        assert!(matches!(
            parse_tournament(json),
            Err(InputError::EmptyPlayerId { index: 0, .. })
        ));
    }
}
