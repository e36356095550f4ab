use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use deedflow_core::portfolio::valuation::{PropertyHistoryMap, ValuationPoint};
use deedflow_core::properties::{Property, PropertyDraft, PropertyRepositoryTrait};
use deedflow_core::Result;

use crate::store::MemoryStore;

pub struct PropertyRepository {
    store: Arc<MemoryStore>,
}

impl PropertyRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        PropertyRepository { store }
    }
}

#[async_trait]
impl PropertyRepositoryTrait for PropertyRepository {
    fn list(&self) -> Result<Vec<Property>> {
        Ok(self.store.properties.read()?.rows.clone())
    }

    fn get_by_id(&self, property_id: i64) -> Result<Option<Property>> {
        let table = self.store.properties.read()?;
        Ok(table.rows.iter().find(|p| p.id == property_id).cloned())
    }

    fn get_history(&self, property_id: i64) -> Result<Vec<ValuationPoint>> {
        let table = self.store.properties.read()?;
        Ok(table
            .histories
            .get(&property_id)
            .cloned()
            .unwrap_or_default())
    }

    fn get_histories(&self, property_ids: &[i64]) -> Result<PropertyHistoryMap> {
        let table = self.store.properties.read()?;
        Ok(property_ids
            .iter()
            .filter_map(|id| table.histories.get(id).map(|h| (*id, h.clone())))
            .collect())
    }

    async fn insert(&self, draft: PropertyDraft) -> Result<Property> {
        let mut table = self.store.properties.write()?;
        let id = table.next_id();
        let (property, history) = draft.into_property(id);
        debug!(
            "Storing property {} with {} history points",
            id,
            history.len()
        );
        table.rows.push(property.clone());
        table.histories.insert(id, history);
        Ok(property)
    }
}
