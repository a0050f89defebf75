use async_trait::async_trait;
use student_records_core::{EthosMetadataService, ExtendedData, ResourceRoute, ServiceResult};

use crate::InMemoryStore;

#[async_trait]
impl EthosMetadataService for InMemoryStore {
    async fn data_privacy_list(
        &self,
        route: &ResourceRoute,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<String>> {
        Ok(self
            .ethos
            .get(&route.resource)
            .map(|m| m.privacy_paths.clone())
            .unwrap_or_default())
    }

    async fn extended_data(
        &self,
        route: &ResourceRoute,
        ids: &[String],
    ) -> ServiceResult<Vec<ExtendedData>> {
        let Some(metadata) = self.ethos.get(&route.resource) else {
            return Ok(Vec::new());
        };
        Ok(metadata
            .extended
            .iter()
            .filter(|e| ids.iter().any(|id| id.eq_ignore_ascii_case(&e.resource_id)))
            .cloned()
            .collect())
    }
}
