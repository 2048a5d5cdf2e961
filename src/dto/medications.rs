use serde::{Deserialize, Serialize};

use crate::models::{Medication, StockStatus};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicationRequest {
    pub name: String,
    pub generic_name: Option<String>,
    pub category: Option<String>,
    pub stock: i32,
    pub min_stock: i32,
    pub price: String,
    #[serde(default)]
    pub requires_prescription: bool,
    pub barcode: Option<String>,
    pub manufacturer: Option<String>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicationRequest {
    pub name: Option<String>,
    pub generic_name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub min_stock: Option<i32>,
    pub price: Option<String>,
    pub requires_prescription: Option<bool>,
    pub barcode: Option<String>,
    pub manufacturer: Option<String>,
    pub expiry_date: Option<String>,
}

/// A medication together with its derived stock status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationView {
    #[serde(flatten)]
    pub medication: Medication,
    pub stock_status: StockStatus,
}

impl From<Medication> for MedicationView {
    fn from(medication: Medication) -> Self {
        let stock_status = medication.stock_status();
        Self {
            medication,
            stock_status,
        }
    }
}
