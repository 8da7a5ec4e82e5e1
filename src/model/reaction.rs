// src/model/reaction.rs

use serde::Serialize;
use std::fmt;

/// Closed set of simulated customer moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Ecstatic,
    Content,
    Sad,
    Angry,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mood::Ecstatic => "ecstatic",
            Mood::Content => "content",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        };
        f.write_str(name)
    }
}

/// Static per-item thresholds used to simulate customer reactions.
///
/// These are configuration, not learned state: they never move during a run,
/// unlike the dynamic price bounds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionThresholds {
    pub cheap_upper: i64,
    pub perfect_upper: i64,
    pub expensive_upper: i64,
}

impl ReactionThresholds {
    /// Maps a price to a mood. Total over all of `i64`: every price lands in
    /// exactly one band.
    pub fn classify(&self, price: i64) -> Mood {
        if price <= self.cheap_upper {
            Mood::Ecstatic
        } else if price <= self.perfect_upper {
            Mood::Content
        } else if price <= self.expensive_upper {
            Mood::Sad
        } else {
            Mood::Angry
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.cheap_upper <= self.perfect_upper && self.perfect_upper <= self.expensive_upper
    }
}

/// Immutable record of one simulated customer encounter.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionEvent {
    pub shelf_id: usize,
    pub item: String,
    pub price: i64,
    pub mood: Mood,
}
