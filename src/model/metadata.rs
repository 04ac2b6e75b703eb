use serde::Deserialize;

/// Tournament-level metadata consumed once per document
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TournamentMetadata {
    pub name: String,
    /// URL path of the tournament, e.g. `/tournament/spring-open`
    pub slug: String,
    /// Logo location (URL or file path); empty means no logo
    #[serde(default)]
    pub logo: Option<String>,
}

impl TournamentMetadata {
    /// Logo location, treating an empty string as absent
    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Wrapper matching the `meta` object of the input document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentMeta {
    pub metadata: TournamentMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_logo_is_absent() {
        let meta = TournamentMetadata {
            name: "Open".to_string(),
            slug: "/tournament/open".to_string(),
            logo: Some("  ".to_string()),
        };
        assert_eq!(meta.logo_url(), None);
    }

    #[test]
    fn test_logo_defaults_to_none() {
        let meta: TournamentMetadata =
            serde_json::from_str(r#"{"name": "Open", "slug": "/tournament/open"}"#).unwrap();
        assert!(meta.logo.is_none());
    }
}
