//! Statistics service

use crate::repositories::{FitnessRepository, FitnessStore};
use chrono::NaiveDate;
use fitness_tracker_shared::{Statistics, StatisticsSummary};

pub struct StatisticsService;

impl StatisticsService {
    /// Statistics view over the repository's current data
    pub fn statistics<S: FitnessStore>(repository: &FitnessRepository<S>, today: NaiveDate) -> Statistics<'_> {
        Statistics::new(repository.data(), today)
    }

    pub fn summary<S: FitnessStore>(repository: &FitnessRepository<S>, today: NaiveDate) -> StatisticsSummary {
        Self::statistics(repository, today).summary()
    }
}
