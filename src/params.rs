use std::str::FromStr;

use crate::models::{Medication, Order, OrderStatus};

pub const LOW_STOCK_CATEGORY: &str = "low-stock";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    LowStock,
    Category(String),
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "all" => CategoryFilter::All,
            LOW_STOCK_CATEGORY => CategoryFilter::LowStock,
            other => CategoryFilter::Category(other.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MedicationQuery {
    pub category: CategoryFilter,
    pub search: Option<String>,
}

impl MedicationQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: CategoryFilter::All,
            search: Some(term.into()),
        }
    }

    pub fn category(category: CategoryFilter) -> Self {
        Self {
            category,
            search: None,
        }
    }

    pub fn matches(&self, medication: &Medication) -> bool {
        let in_category = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::LowStock => medication.is_low_stock(),
            CategoryFilter::Category(name) => medication.category == *name,
        };
        if !in_category {
            return false;
        }

        let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        [
            Some(medication.name.as_str()),
            medication.generic_name.as_deref(),
            medication.manufacturer.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn apply<'a>(&self, medications: &'a [Medication]) -> Vec<&'a Medication> {
        medications.iter().filter(|m| self.matches(m)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFilter {
    #[default]
    All,
    Urgent,
    Status(OrderStatus),
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Urgent => order.is_urgent,
            OrderFilter::Status(status) => order.status == *status,
        }
    }
}

impl FromStr for OrderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(OrderFilter::All),
            "urgent" => Ok(OrderFilter::Urgent),
            other => other.parse().map(OrderFilter::Status),
        }
    }
}
