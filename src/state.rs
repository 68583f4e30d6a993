use crate::config::Config;
use crate::models::{DashboardResponse, MoodLevel, MoodSample, RECOMMENDATIONS, RESOURCE_GROUPS};
use crate::notice::CheckInNotice;
use crate::provider::DataProvider;
use crate::status::resolve;
use crate::tracker::MoodTracker;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::debug;

pub struct Dashboard {
    provider: Arc<dyn DataProvider>,
    tracker: MoodTracker,
    notice: CheckInNotice,
}

impl Dashboard {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        let tracker = MoodTracker::new(provider.initial_moods());
        Self {
            provider,
            tracker,
            notice: CheckInNotice::new(),
        }
    }

    pub fn tracker(&self) -> &MoodTracker {
        &self.tracker
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_visible()
    }

    pub fn select_mood(&mut self, level: MoodLevel) {
        debug!(value = level.value(), "mood selected");
        self.tracker.select_mood(level);
    }

    pub fn submit(&mut self, hold: Duration) -> Option<MoodSample> {
        let Some(sample) = self.tracker.submit_check_in() else {
            debug!("check-in submitted without a selection");
            return None;
        };
        self.notice.show(hold);
        self.provider.record_check_in(&sample);
        Some(sample)
    }

    pub fn close(&mut self) {
        self.notice.cancel();
        self.tracker.clear_selection();
    }

    pub fn snapshot(&self) -> DashboardResponse {
        let score = self.provider.wellness_score();
        DashboardResponse {
            profile: self.provider.profile(),
            wellness_score: score,
            status: resolve(score),
            moods: self.tracker.samples().cloned().collect(),
            selected_mood: self.tracker.selection(),
            check_in_notice: self.notice.is_visible(),
            recommendations: RECOMMENDATIONS.to_vec(),
            resources: RESOURCE_GROUPS.to_vec(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn DataProvider>) -> Self {
        Self {
            config,
            dashboard: Arc::new(Mutex::new(Dashboard::new(provider))),
        }
    }
}
