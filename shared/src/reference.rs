use std::collections::BTreeMap;

use serde::Deserialize;

use crate::draft::{Draft, TeamEntry};

const BUNDLED_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    groups: BTreeMap<String, Vec<TeamEntry>>,
}

/// Read-only group/team data the draft starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDataset {
    defaults: Draft,
}

impl ReferenceDataset {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Ok(Self {
            defaults: Draft::new(raw.groups),
        })
    }

    /// The World Cup 2026 group draw shipped with the crate.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_TEAMS_JSON)
    }

    /// Fresh copy of the reference standings.
    pub fn draft(&self) -> Draft {
        self.defaults.clone()
    }

    pub fn defaults(&self) -> &Draft {
        &self.defaults
    }

    /// Every reference entry in group-letter order, capped at `limit`.
    pub fn roster(&self, limit: usize) -> Vec<&TeamEntry> {
        self.defaults
            .groups()
            .flat_map(|(_, teams)| teams.iter())
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ReferenceDataset;
    use crate::config::INTRO_TILE_LIMIT;
    use serde_json::json;

    #[test]
    fn bundled_dataset_has_twelve_groups_of_four() {
        let reference = ReferenceDataset::bundled().expect("bundled teams.json parses");
        let letters: Vec<&str> = reference.defaults().letters().collect();
        assert_eq!(
            letters,
            vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"]
        );
        for (letter, teams) in reference.defaults().groups() {
            assert_eq!(teams.len(), 4, "group {letter}");
        }
        assert_eq!(reference.roster(INTRO_TILE_LIMIT).len(), 48);
    }

    #[test]
    fn bundled_placeholders_carry_options() {
        let reference = ReferenceDataset::bundled().expect("bundled teams.json parses");
        let placeholders: Vec<_> = reference
            .defaults()
            .groups()
            .flat_map(|(_, teams)| teams.iter())
            .filter(|t| t.is_placeholder())
            .collect();
        assert_eq!(placeholders.len(), 6);
        assert!(placeholders.iter().all(|p| p.options().len() >= 3));
        assert_eq!(reference.defaults().completion_count(), 6);
    }

    #[test]
    fn roster_follows_letter_order_and_respects_limit() {
        let json = json!({
            "groups": {
                "B": [ { "id": "b1" }, { "id": "b2" } ],
                "A": [ { "id": "a1" }, { "id": "a2" } ]
            }
        });
        let reference = ReferenceDataset::from_json(&json.to_string()).expect("parses");
        let ids: Vec<&str> = reference.roster(3).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);
        assert!(reference.defaults().contains_group("A"));
        assert!(!reference.defaults().contains_group("C"));
    }

    #[test]
    fn missing_groups_key_yields_empty_dataset() {
        let reference = ReferenceDataset::from_json("{}").expect("parses");
        assert_eq!(reference.defaults().total_groups(), 0);
        assert!(ReferenceDataset::from_json("[1, 2]").is_err());
    }
}
