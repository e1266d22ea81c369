//! Profile service

use crate::error::AppResult;
use crate::repositories::{FitnessRepository, FitnessStore};
use fitness_tracker_shared::{validate_profile, ProfileMetrics, UserProfile};
use tracing::info;

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    pub fn get_profile<S: FitnessStore>(repository: &FitnessRepository<S>) -> &UserProfile {
        &repository.data().user_profile
    }

    /// Replace the profile after validating measurements and goals
    pub async fn update_profile<S: FitnessStore>(
        repository: &mut FitnessRepository<S>,
        profile: UserProfile,
    ) -> AppResult<()> {
        validate_profile(&profile)?;
        repository.update_profile(profile).await?;
        info!("Profile updated");
        Ok(())
    }

    /// BMR and recommended intake, when the profile has usable measurements
    pub fn metrics<S: FitnessStore>(repository: &FitnessRepository<S>) -> Option<ProfileMetrics> {
        ProfileMetrics::for_profile(&repository.data().user_profile)
    }
}
