use crate::models::{MoodLevel, MoodSample, UserProfile};
use chrono::NaiveDate;
use tracing::info;

pub trait DataProvider: Send + Sync {
    fn profile(&self) -> UserProfile;

    fn wellness_score(&self) -> i32;

    fn initial_moods(&self) -> Vec<MoodSample>;

    fn record_check_in(&self, sample: &MoodSample);
}

#[derive(Debug, Clone, Default)]
pub struct MockProvider;

const MOCK_WEEK: [(&str, MoodLevel); 7] = [
    ("Mon", MoodLevel::Good),
    ("Tue", MoodLevel::Neutral),
    ("Wed", MoodLevel::Excellent),
    ("Thu", MoodLevel::Sad),
    ("Fri", MoodLevel::Good),
    ("Sat", MoodLevel::Excellent),
    ("Sun", MoodLevel::Neutral),
];

impl DataProvider for MockProvider {
    fn profile(&self) -> UserProfile {
        UserProfile {
            name: "Alex Johnson".to_string(),
            streak_days: 7,
            last_check_in: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap_or_default(),
        }
    }

    fn wellness_score(&self) -> i32 {
        72
    }

    fn initial_moods(&self) -> Vec<MoodSample> {
        MOCK_WEEK
            .iter()
            .map(|(day, level)| MoodSample::new(*day, *level))
            .collect()
    }

    fn record_check_in(&self, sample: &MoodSample) {
        info!(label = %sample.label, value = sample.value.value(), "check-in recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_seed_matches_demo_week() {
        let moods: Vec<(String, u8)> = MockProvider
            .initial_moods()
            .into_iter()
            .map(|sample| (sample.label, sample.value.value()))
            .collect();
        let labels: Vec<&str> = moods.iter().map(|(label, _)| label.as_str()).collect();
        let values: Vec<u8> = moods.iter().map(|(_, value)| *value).collect();

        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(values, [4, 3, 5, 2, 4, 5, 3]);
    }

    #[test]
    fn mock_profile() {
        let profile = MockProvider.profile();
        assert_eq!(profile.initial(), 'A');
        assert_eq!(profile.streak_days, 7);
        assert_eq!(profile.last_check_in.to_string(), "2023-11-15");
        assert_eq!(MockProvider.wellness_score(), 72);
    }
}
