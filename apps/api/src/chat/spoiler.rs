//! Spoiler level — the last book the user has finished.
//!
//! The per-turn constraint substituted into the master prompt. Variants are
//! ordered by publication, so `Ord` answers "has the user read past X".

use serde::{Deserialize, Serialize};

/// The published Stormlight Archive novels, in reading order.
/// Serialized as the exact book titles shown in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpoilerLevel {
    #[serde(rename = "The Way of Kings")]
    TheWayOfKings,
    #[serde(rename = "Words of Radiance")]
    WordsOfRadiance,
    #[serde(rename = "Oathbringer")]
    Oathbringer,
    #[serde(rename = "Rhythm of War")]
    RhythmOfWar,
}

impl SpoilerLevel {
    /// All levels in reading order — drives the selector.
    pub const ALL: [SpoilerLevel; 4] = [
        SpoilerLevel::TheWayOfKings,
        SpoilerLevel::WordsOfRadiance,
        SpoilerLevel::Oathbringer,
        SpoilerLevel::RhythmOfWar,
    ];

    /// The book title as substituted into the prompt.
    pub fn title(&self) -> &'static str {
        match self {
            SpoilerLevel::TheWayOfKings => "The Way of Kings",
            SpoilerLevel::WordsOfRadiance => "Words of Radiance",
            SpoilerLevel::Oathbringer => "Oathbringer",
            SpoilerLevel::RhythmOfWar => "Rhythm of War",
        }
    }
}

impl Default for SpoilerLevel {
    /// New sessions start at the first book — the most conservative boundary.
    fn default() -> Self {
        SpoilerLevel::TheWayOfKings
    }
}

impl std::fmt::Display for SpoilerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_ordered_by_publication() {
        assert!(SpoilerLevel::TheWayOfKings < SpoilerLevel::WordsOfRadiance);
        assert!(SpoilerLevel::WordsOfRadiance < SpoilerLevel::Oathbringer);
        assert!(SpoilerLevel::Oathbringer < SpoilerLevel::RhythmOfWar);
    }

    #[test]
    fn test_all_is_sorted_and_complete() {
        let mut sorted = SpoilerLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, SpoilerLevel::ALL);
        assert_eq!(SpoilerLevel::ALL.len(), 4);
    }

    #[test]
    fn test_serde_uses_exact_titles() {
        let json = serde_json::to_string(&SpoilerLevel::WordsOfRadiance).unwrap();
        assert_eq!(json, "\"Words of Radiance\"");

        let parsed: SpoilerLevel = serde_json::from_str("\"Rhythm of War\"").unwrap();
        assert_eq!(parsed, SpoilerLevel::RhythmOfWar);
    }

    #[test]
    fn test_unknown_title_is_rejected() {
        let parsed = serde_json::from_str::<SpoilerLevel>("\"Wind and Truth\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_display_matches_title() {
        for level in SpoilerLevel::ALL {
            assert_eq!(level.to_string(), level.title());
        }
    }
}
