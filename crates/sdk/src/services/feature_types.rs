//! Feature types service

use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::AllFeatureTypesResponse;

/// Service for feature type operations
#[derive(Clone)]
pub struct FeatureTypesService {
    client: Client,
}

impl FeatureTypesService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all feature types
    pub async fn get_all_feature_types(&self) -> SdkResult<ApiResponse<AllFeatureTypesResponse>> {
        self.client.get(&["admin", "feature-types"]).await
    }
}
