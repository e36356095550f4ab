//! Properties module - listed properties, their histories and detail views.

mod properties_model;
mod properties_service;
mod properties_traits;

pub use properties_model::{derive_symbol, NewProperty, Property, PropertyDetail, PropertyDraft};
pub use properties_service::PropertyService;
pub use properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
