use crate::constants::{
    DEFAULT_HISTORY_MONTHS, DEFAULT_HISTORY_VOLATILITY, DISPLAY_DECIMAL_PRECISION,
    MAX_PROPERTY_PRICE,
};
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::performance::calculate_valuation_metrics;
use crate::portfolio::valuation::{generate_history, HistoryParams};
use crate::properties::properties_model::{
    derive_symbol, NewProperty, Property, PropertyDetail, PropertyDraft,
};
use crate::properties::properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
use crate::utils::random::RandomSource;
use crate::utils::time_utils::current_month;
use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// Listing change is drawn from [-5, 5) percent
const CHANGE_SPREAD: Decimal = dec!(10);

pub struct PropertyService {
    repository: Arc<dyn PropertyRepositoryTrait>,
    random: Arc<dyn RandomSource>,
}

impl PropertyService {
    pub fn new(
        repository: Arc<dyn PropertyRepositoryTrait>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        PropertyService { repository, random }
    }

    fn validate(new_property: &NewProperty) -> Result<()> {
        if new_property.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if new_property.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Property price must be positive, got {}",
                new_property.price
            ))
            .into());
        }
        if new_property.price > MAX_PROPERTY_PRICE {
            return Err(ValidationError::InvalidInput(format!(
                "Property price must not exceed {}, got {}",
                MAX_PROPERTY_PRICE, new_property.price
            ))
            .into());
        }
        Ok(())
    }

    fn draw_change(&self) -> Decimal {
        ((self.random.next_decimal() - dec!(0.5)) * CHANGE_SPREAD).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

#[async_trait]
impl PropertyServiceTrait for PropertyService {
    fn get_properties(&self) -> Result<Vec<Property>> {
        self.repository.list()
    }

    fn get_property_detail(&self, property_id: i64) -> Result<PropertyDetail> {
        let property = self
            .repository
            .get_by_id(property_id)?
            .ok_or_else(|| Error::NotFound(format!("Property {} not found", property_id)))?;
        let history = self.repository.get_history(property_id)?;
        let metrics = calculate_valuation_metrics(&history, self.random.as_ref());
        Ok(PropertyDetail {
            property,
            history,
            metrics,
        })
    }

    async fn create_property(&self, new_property: NewProperty) -> Result<Property> {
        Self::validate(&new_property)?;

        let name = new_property.name.trim().to_string();
        let history = generate_history(
            HistoryParams {
                base: new_property.price,
                months: DEFAULT_HISTORY_MONTHS,
                volatility: DEFAULT_HISTORY_VOLATILITY,
            },
            current_month(),
            self.random.as_ref(),
        )?;

        let draft = PropertyDraft {
            symbol: derive_symbol(&name),
            change: Some(self.draw_change()),
            name,
            location: new_property.location.trim().to_string(),
            price: new_property.price,
            history,
        };

        let created = self.repository.insert(draft).await?;
        debug!(
            "Listed property {} ({}) at {}",
            created.id, created.name, created.price
        );
        Ok(created)
    }
}
