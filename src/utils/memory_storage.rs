//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// In-memory configuration store for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    organizations: Arc<RwLock<HashMap<Uuid, Organization>>>,
    configurations: Arc<RwLock<HashMap<Uuid, TaxConfiguration>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            organizations: Arc::new(RwLock::new(HashMap::new())),
            configurations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> TaxResult<()> {
        self.organizations.write().map_err(poisoned)?.clear();
        self.configurations.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> TaxError {
    TaxError::Storage("memory storage lock poisoned".to_string())
}

#[async_trait]
impl TaxConfigurationStore for MemoryStorage {
    async fn save_organization(&mut self, organization: &Organization) -> TaxResult<()> {
        self.organizations
            .write()
            .map_err(poisoned)?
            .insert(organization.id, organization.clone());
        Ok(())
    }

    async fn get_organization(&self, organization_id: Uuid) -> TaxResult<Option<Organization>> {
        Ok(self
            .organizations
            .read()
            .map_err(poisoned)?
            .get(&organization_id)
            .cloned())
    }

    async fn save_tax_configuration(&mut self, config: &TaxConfiguration) -> TaxResult<()> {
        if !self
            .organizations
            .read()
            .map_err(poisoned)?
            .contains_key(&config.organization_id)
        {
            return Err(TaxError::OrganizationNotFound(
                config.organization_id.to_string(),
            ));
        }

        self.configurations
            .write()
            .map_err(poisoned)?
            .insert(config.organization_id, config.clone());
        Ok(())
    }

    async fn get_tax_configuration(
        &self,
        organization_id: Uuid,
    ) -> TaxResult<Option<TaxConfiguration>> {
        Ok(self
            .configurations
            .read()
            .map_err(poisoned)?
            .get(&organization_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::tds::TdsNature;
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn test_save_and_get_configuration() {
        let mut storage = MemoryStorage::new();
        let org = Organization::new("Test Org".to_string(), Some("KA".to_string()));
        storage.save_organization(&org).await.unwrap();

        let config = TaxConfiguration::new(org.id)
            .with_tds_rate(TdsNature::Contractor, BigDecimal::from(10));
        storage.save_tax_configuration(&config).await.unwrap();

        let loaded = storage.get_tax_configuration(org.id).await.unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[tokio::test]
    async fn test_configuration_requires_organization() {
        let mut storage = MemoryStorage::new();
        let config = TaxConfiguration::new(Uuid::new_v4());

        let result = storage.save_tax_configuration(&config).await;
        assert!(matches!(result, Err(TaxError::OrganizationNotFound(_))));
    }

    #[tokio::test]
    async fn test_clones_share_data_and_clear() {
        let mut storage = MemoryStorage::new();
        let reader = storage.clone();
        let org = Organization::new("Shared".to_string(), None);
        storage.save_organization(&org).await.unwrap();

        assert!(reader.get_organization(org.id).await.unwrap().is_some());

        reader.clear().unwrap();
        assert!(storage.get_organization(org.id).await.unwrap().is_none());
    }
}
