use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{FALLBACK_TEAM_COLORS, FALLBACK_TEAM_NAME};

/// A candidate team offered for a placeholder slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOption")]
pub struct TeamOption {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Team,
    /// Pending playoff decision. The entry's id is only a rendering key.
    Placeholder { options: Vec<TeamOption> },
}

/// One position in a group's predicted standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTeam", into = "RawTeam")]
pub struct TeamEntry {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
    pub slot: Slot,
}

impl TeamEntry {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.slot, Slot::Placeholder { .. })
    }

    pub fn options(&self) -> &[TeamOption] {
        match &self.slot {
            Slot::Placeholder { options } => options,
            Slot::Team => &[],
        }
    }
}

impl From<TeamOption> for TeamEntry {
    fn from(option: TeamOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
            colors: option.colors,
            slot: Slot::Team,
        }
    }
}

/// Dataset/storage record shape. Every field is optional on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing)]
    team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colors: Option<Vec<String>>,
    #[serde(default)]
    is_placeholder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder_options: Option<Vec<TeamOption>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawOption {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    team_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    colors: Option<Vec<String>>,
}

fn resolve_id(
    id: Option<String>,
    team_id: Option<String>,
    name: Option<&str>,
    fallback: &str,
) -> String {
    id.or(team_id)
        .unwrap_or_else(|| slugify(name.unwrap_or(fallback)))
}

fn fallback_colors() -> Vec<String> {
    FALLBACK_TEAM_COLORS.iter().map(|c| c.to_string()).collect()
}

impl From<RawOption> for TeamOption {
    fn from(raw: RawOption) -> Self {
        Self {
            id: resolve_id(raw.id, raw.team_id, raw.name.as_deref(), "option"),
            name: raw.name.unwrap_or_else(|| FALLBACK_TEAM_NAME.to_string()),
            colors: raw.colors.unwrap_or_else(fallback_colors),
        }
    }
}

impl From<RawTeam> for TeamEntry {
    fn from(raw: RawTeam) -> Self {
        let slot = if raw.is_placeholder {
            Slot::Placeholder {
                options: raw.placeholder_options.unwrap_or_default(),
            }
        } else {
            Slot::Team
        };
        Self {
            id: resolve_id(raw.id, raw.team_id, raw.name.as_deref(), "team"),
            name: raw.name.unwrap_or_else(|| FALLBACK_TEAM_NAME.to_string()),
            colors: raw.colors.unwrap_or_else(fallback_colors),
            slot,
        }
    }
}

impl From<TeamEntry> for RawTeam {
    fn from(entry: TeamEntry) -> Self {
        let (is_placeholder, placeholder_options) = match entry.slot {
            Slot::Team => (false, None),
            Slot::Placeholder { options } if options.is_empty() => (true, None),
            Slot::Placeholder { options } => (true, Some(options)),
        };
        Self {
            id: Some(entry.id),
            team_id: None,
            name: Some(entry.name),
            colors: Some(entry.colors),
            is_placeholder,
            placeholder_options,
        }
    }
}

/// Lowercase, hyphenate whitespace runs, drop anything outside `[a-z0-9_-]`.
pub fn slugify(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    UnknownGroup(String),
    SlotOutOfRange { group: String, index: usize },
    NotPlaceholder { group: String, index: usize },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGroup(group) => write!(f, "unknown group {group}"),
            Self::SlotOutOfRange { group, index } => write!(f, "group {group} lacks slot {index}"),
            Self::NotPlaceholder { group, index } => {
                write!(f, "slot {group}{} is not a placeholder", index + 1)
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Group letter to predicted standing. Letters iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft {
    groups: BTreeMap<String, Vec<TeamEntry>>,
}

impl Draft {
    pub fn new(groups: BTreeMap<String, Vec<TeamEntry>>) -> Self {
        Self { groups }
    }

    pub fn letters(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn group(&self, letter: &str) -> Option<&[TeamEntry]> {
        self.groups.get(letter).map(Vec::as_slice)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[TeamEntry])> {
        self.groups
            .iter()
            .map(|(letter, teams)| (letter.as_str(), teams.as_slice()))
    }

    pub fn contains_group(&self, letter: &str) -> bool {
        self.groups.contains_key(letter)
    }

    /// Overwrite one group's list wholesale. Used when overlaying stored data.
    pub(crate) fn set_group(&mut self, letter: &str, teams: Vec<TeamEntry>) {
        self.groups.insert(letter.to_string(), teams);
    }

    /// Move the entry at `from` so it ends up at `to`. Returns whether the
    /// list changed; equal or out-of-range indices leave it untouched.
    pub fn reorder(&mut self, letter: &str, from: usize, to: usize) -> bool {
        let Some(teams) = self.groups.get_mut(letter) else {
            return false;
        };
        if from == to || from >= teams.len() || to >= teams.len() {
            return false;
        }
        let moved = teams.remove(from);
        teams.insert(to, moved);
        true
    }

    /// Bind a placeholder slot to a concrete team. Non-placeholder slots are
    /// rejected and the draft is left as it was.
    pub fn replace_placeholder(
        &mut self,
        letter: &str,
        index: usize,
        option: TeamOption,
    ) -> Result<(), DraftError> {
        let teams = self
            .groups
            .get_mut(letter)
            .ok_or_else(|| DraftError::UnknownGroup(letter.to_string()))?;
        let slot = teams.get_mut(index).ok_or_else(|| DraftError::SlotOutOfRange {
            group: letter.to_string(),
            index,
        })?;
        if !slot.is_placeholder() {
            return Err(DraftError::NotPlaceholder {
                group: letter.to_string(),
                index,
            });
        }
        *slot = TeamEntry::from(option);
        Ok(())
    }

    pub fn is_complete(&self, letter: &str) -> bool {
        self.groups
            .get(letter)
            .is_some_and(|teams| !teams.is_empty() && teams.iter().all(|t| !t.is_placeholder()))
    }

    pub fn completion_count(&self) -> usize {
        self.letters()
            .filter(|letter| self.is_complete(letter))
            .count()
    }

    pub fn total_groups(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Draft, DraftError, Slot, TeamEntry, TeamOption, slugify};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn team(id: &str) -> TeamEntry {
        TeamEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            colors: vec!["#000".into(), "#fff".into()],
            slot: Slot::Team,
        }
    }

    fn option(id: &str) -> TeamOption {
        TeamOption {
            id: id.to_string(),
            name: id.to_uppercase(),
            colors: vec!["#111".into(), "#222".into(), "#333".into()],
        }
    }

    fn placeholder(id: &str, options: Vec<TeamOption>) -> TeamEntry {
        TeamEntry {
            id: id.to_string(),
            name: "Playoff".into(),
            colors: vec!["#6B7280".into(), "#9CA3AF".into()],
            slot: Slot::Placeholder { options },
        }
    }

    fn sample_draft() -> Draft {
        let mut groups = BTreeMap::new();
        groups.insert(
            "A".to_string(),
            vec![
                team("mex"),
                team("rsa"),
                placeholder("uefa-d", vec![option("den"), option("cze")]),
                team("kor"),
            ],
        );
        groups.insert(
            "B".to_string(),
            vec![team("can"), team("qat"), team("sui"), team("bih")],
        );
        Draft::new(groups)
    }

    fn ids(draft: &Draft, letter: &str) -> Vec<String> {
        draft
            .group(letter)
            .unwrap_or_default()
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn reorder_moves_entry_and_preserves_others() {
        let mut draft = sample_draft();
        assert!(draft.reorder("B", 0, 2));
        assert_eq!(ids(&draft, "B"), vec!["qat", "sui", "can", "bih"]);

        assert!(draft.reorder("B", 3, 0));
        assert_eq!(ids(&draft, "B"), vec!["bih", "qat", "sui", "can"]);
    }

    #[test]
    fn reorder_preserves_length_and_members_for_all_index_pairs() {
        let base = sample_draft();
        let mut expected = ids(&base, "A");
        expected.sort();
        for from in 0..4 {
            for to in 0..4 {
                let mut draft = base.clone();
                draft.reorder("A", from, to);
                let mut got = ids(&draft, "A");
                assert_eq!(got.len(), 4);
                got.sort();
                assert_eq!(got, expected, "from {from} to {to}");
                assert_eq!(
                    draft.group("A").map(|t| t[to].id.clone()),
                    Some(ids(&base, "A")[from].clone())
                );
            }
        }
    }

    #[test]
    fn reorder_same_index_or_out_of_range_is_noop() {
        let base = sample_draft();
        let mut draft = base.clone();
        assert!(!draft.reorder("A", 1, 1));
        assert!(!draft.reorder("A", 4, 0));
        assert!(!draft.reorder("A", 0, 9));
        assert!(!draft.reorder("Z", 0, 1));
        assert_eq!(draft, base);
    }

    #[test]
    fn replace_placeholder_binds_option_and_clears_options() {
        let mut draft = sample_draft();
        assert!(!draft.is_complete("A"));
        let before = draft.completion_count();

        draft
            .replace_placeholder("A", 2, option("cze"))
            .expect("slot 2 is a placeholder");

        let slot = &draft.group("A").expect("group A")[2];
        assert_eq!(slot.id, "cze");
        assert_eq!(slot.name, "CZE");
        assert_eq!(slot.colors.len(), 3);
        assert!(!slot.is_placeholder());
        assert!(slot.options().is_empty());
        assert!(draft.is_complete("A"));
        assert_eq!(draft.completion_count(), before + 1);
    }

    #[test]
    fn replace_placeholder_rejects_invalid_targets_without_mutation() {
        let base = sample_draft();
        let mut draft = base.clone();

        assert_eq!(
            draft.replace_placeholder("A", 0, option("den")),
            Err(DraftError::NotPlaceholder {
                group: "A".into(),
                index: 0
            })
        );
        assert_eq!(
            draft.replace_placeholder("A", 7, option("den")),
            Err(DraftError::SlotOutOfRange {
                group: "A".into(),
                index: 7
            })
        );
        assert_eq!(
            draft.replace_placeholder("Q", 0, option("den")),
            Err(DraftError::UnknownGroup("Q".into()))
        );
        assert_eq!(draft, base);
    }

    #[test]
    fn replacing_twice_never_reintroduces_placeholder() {
        let mut draft = sample_draft();
        draft
            .replace_placeholder("A", 2, option("den"))
            .expect("first replacement");
        assert!(draft.replace_placeholder("A", 2, option("cze")).is_err());
        assert_eq!(draft.group("A").expect("group A")[2].id, "den");
        assert!(draft.is_complete("A"));
    }

    #[test]
    fn empty_group_is_never_complete() {
        let mut groups = BTreeMap::new();
        groups.insert("X".to_string(), Vec::new());
        let draft = Draft::new(groups);
        assert!(!draft.is_complete("X"));
        assert!(!draft.is_complete("missing"));
        assert_eq!(draft.completion_count(), 0);
        assert_eq!(draft.total_groups(), 1);
    }

    #[test]
    fn records_fill_missing_fields_with_defaults() {
        let entries: Vec<TeamEntry> = serde_json::from_value(json!([
            { "team_id": "usa", "name": "United States", "colors": ["#002868", "#BF0A30"] },
            { "name": "Côte d'Ivoire" },
            { "is_placeholder": true, "placeholder_options": [ { "name": "New Caledonia" }, {} ] },
            { "id": "esp", "name": "Spain", "placeholder_options": [ { "id": "x" } ] }
        ]))
        .expect("records decode");

        assert_eq!(entries[0].id, "usa");
        assert_eq!(entries[1].id, "cte-divoire");
        assert_eq!(entries[1].colors, vec!["#6B7280", "#9CA3AF"]);
        assert_eq!(entries[2].id, "team");
        assert_eq!(entries[2].name, "Unknown");
        let options = entries[2].options();
        assert_eq!(options[0].id, "new-caledonia");
        assert_eq!(options[1].id, "option");
        assert_eq!(options[1].name, "Unknown");
        assert!(!entries[3].is_placeholder());
        assert!(entries[3].options().is_empty());
    }

    #[test]
    fn serializes_in_record_shape() {
        let value =
            serde_json::to_value(placeholder("uefa-d", vec![option("den")])).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "uefa-d",
                "name": "Playoff",
                "colors": ["#6B7280", "#9CA3AF"],
                "is_placeholder": true,
                "placeholder_options": [
                    { "id": "den", "name": "DEN", "colors": ["#111", "#222", "#333"] }
                ]
            })
        );

        let value = serde_json::to_value(team("mex")).expect("serialize");
        assert_eq!(value.get("placeholder_options"), None);
        assert_eq!(value["is_placeholder"], json!(false));
    }

    #[test]
    fn placeholder_without_options_omits_the_list() {
        let value = serde_json::to_value(placeholder("ic-1", Vec::new())).expect("serialize");
        assert_eq!(value["is_placeholder"], json!(true));
        assert_eq!(value.get("placeholder_options"), None);

        let back: TeamEntry = serde_json::from_value(value).expect("decode");
        assert!(back.is_placeholder());
        assert!(back.options().is_empty());
    }

    #[test]
    fn slugify_matches_ascii_word_rules() {
        assert_eq!(slugify("  Korea   Republic "), "korea-republic");
        assert_eq!(slugify("Curaçao"), "curaao");
        assert_eq!(slugify("Bosnia & Herzegovina"), "bosnia--herzegovina");
        assert_eq!(slugify("team"), "team");
    }
}
