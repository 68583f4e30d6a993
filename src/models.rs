use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::WellnessStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoodLevel {
    VerySad = 1,
    Sad = 2,
    Neutral = 3,
    Good = 4,
    Excellent = 5,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Good,
        MoodLevel::Excellent,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "Very Sad",
            MoodLevel::Sad => "Sad",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Good => "Good",
            MoodLevel::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMood(pub i64);

impl fmt::Display for InvalidMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mood value must be between 1 and 5, got {}", self.0)
    }
}

impl std::error::Error for InvalidMood {}

impl TryFrom<i64> for MoodLevel {
    type Error = InvalidMood;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MoodLevel::VerySad),
            2 => Ok(MoodLevel::Sad),
            3 => Ok(MoodLevel::Neutral),
            4 => Ok(MoodLevel::Good),
            5 => Ok(MoodLevel::Excellent),
            other => Err(InvalidMood(other)),
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = InvalidMood;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodLevel::try_from(i64::from(value))
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.value()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSample {
    pub label: String,
    pub value: MoodLevel,
}

impl MoodSample {
    pub fn new(label: impl Into<String>, value: MoodLevel) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub streak_days: u32,
    pub last_check_in: NaiveDate,
}

impl UserProfile {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        title: "Mindfulness Meditation",
        description: "Guided 10-minute meditation for stress relief",
    },
    Recommendation {
        title: "Sleep Hygiene Tips",
        description: "Improve your sleep quality with these strategies",
    },
    Recommendation {
        title: "Study Break Exercises",
        description: "Quick physical activities to refresh your mind",
    },
];

pub const RESOURCE_GROUPS: [ResourceGroup; 2] = [
    ResourceGroup {
        title: "Coping Strategies",
        items: &[
            "Deep breathing exercises for immediate stress relief",
            "Progressive muscle relaxation technique",
            "Mindful walking for mental clarity",
            "Journaling to process emotions",
        ],
    },
    ResourceGroup {
        title: "Campus Resources",
        items: &[
            "Student Counseling Center: Open 9AM-5PM Weekdays",
            "24/7 Crisis Hotline: (555) 123-HELP",
            "Peer Support Groups: Tuesdays at 6PM",
            "Wellness Workshops: Weekly schedule available",
        ],
    },
];

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: UserProfile,
    pub wellness_score: i32,
    pub status: WellnessStatus,
    pub moods: Vec<MoodSample>,
    pub selected_mood: Option<MoodLevel>,
    pub check_in_notice: bool,
    pub recommendations: Vec<Recommendation>,
    pub resources: Vec<ResourceGroup>,
}
