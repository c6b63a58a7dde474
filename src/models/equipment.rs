//! Equipment model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EquipmentKind;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub equipment_type: EquipmentKind,
    /// Asset serial number, unique per unit
    pub serial_number: String,
    /// Room or lab where the unit is installed
    pub location: String,
    pub school: String,
    pub is_working: bool,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    pub equipment_type: EquipmentKind,
    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub school: String,
    #[serde(default = "default_true")]
    pub is_working: bool,
}

fn default_true() -> bool {
    true
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    pub equipment_type: Option<EquipmentKind>,
    #[validate(length(min = 1, max = 100))]
    pub serial_number: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,
    #[validate(length(max = 100))]
    pub school: Option<String>,
    pub is_working: Option<bool>,
}
