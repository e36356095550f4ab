use std::collections::HashMap;
use std::sync::RwLock;

use deedflow_core::markets::Market;
use deedflow_core::portfolio::valuation::ValuationPoint;
use deedflow_core::portfolio::Portfolio;
use deedflow_core::properties::Property;
use deedflow_core::users::User;

/// Properties and their generated histories, kept in one table so they are
/// always appended together.
#[derive(Debug, Default)]
pub struct PropertyTable {
    pub rows: Vec<Property>,
    pub histories: HashMap<i64, Vec<ValuationPoint>>,
}

impl PropertyTable {
    /// `max(existing id) + 1`, or 1 for an empty table.
    pub fn next_id(&self) -> i64 {
        self.rows.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

/// Process-lifetime state shared by every repository.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) properties: RwLock<PropertyTable>,
    pub(crate) portfolios: RwLock<Vec<Portfolio>>,
    pub(crate) markets: RwLock<Vec<Market>>,
    pub(crate) users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
