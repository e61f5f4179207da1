//! SDK service implementations
//!
//! This module provides one service per admin API resource.

mod api_tokens;
mod feature_tags;
mod feature_toggles;
mod feature_types;
mod projects;
mod strategies;
mod users;
mod variants;

pub use api_tokens::ApiTokensService;
pub use feature_tags::FeatureTagsService;
pub use feature_toggles::FeatureTogglesService;
pub use feature_types::FeatureTypesService;
pub use projects::ProjectsService;
pub use strategies::StrategiesService;
pub use users::UsersService;
pub use variants::VariantsService;

use crate::error::{SdkError, SdkResult};

/// Fail fast on an empty identifier, before any request is built
pub(crate) fn require(param: &'static str, value: &str) -> SdkResult<()> {
    if value.is_empty() {
        return Err(SdkError::required(param));
    }
    Ok(())
}

/// Fail fast on a zero numeric identifier
pub(crate) fn require_id(param: &'static str, value: u64) -> SdkResult<()> {
    if value == 0 {
        return Err(SdkError::required(param));
    }
    Ok(())
}
