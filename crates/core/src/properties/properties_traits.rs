use crate::errors::Result;
use crate::portfolio::valuation::{PropertyHistoryMap, ValuationPoint};
use crate::properties::properties_model::{NewProperty, Property, PropertyDetail, PropertyDraft};
use async_trait::async_trait;

/// Trait for property repository operations
#[async_trait]
pub trait PropertyRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Property>>;
    fn get_by_id(&self, property_id: i64) -> Result<Option<Property>>;
    /// History for one property. Empty when none was generated.
    fn get_history(&self, property_id: i64) -> Result<Vec<ValuationPoint>>;
    /// Histories for the given ids. Ids without a history are left out.
    fn get_histories(&self, property_ids: &[i64]) -> Result<PropertyHistoryMap>;
    /// Appends the property and its history in one step, assigning the next id.
    async fn insert(&self, draft: PropertyDraft) -> Result<Property>;
}

/// Trait for property service operations
#[async_trait]
pub trait PropertyServiceTrait: Send + Sync {
    fn get_properties(&self) -> Result<Vec<Property>>;
    fn get_property_detail(&self, property_id: i64) -> Result<PropertyDetail>;
    async fn create_property(&self, new_property: NewProperty) -> Result<Property>;
}
