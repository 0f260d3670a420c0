use crate::domain::common::AggregateRoot;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{non_negative, require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    LandAndBuildings,
    PlantAndMachinery,
    FixturesAndFittings,
    MotorVehicles,
    ComputerEquipment,
    #[serde(other)]
    Unknown,
}

impl Categorical for AssetCategory {
    fn code(&self) -> &'static str {
        match self {
            AssetCategory::LandAndBuildings => "land_and_buildings",
            AssetCategory::PlantAndMachinery => "plant_and_machinery",
            AssetCategory::FixturesAndFittings => "fixtures_and_fittings",
            AssetCategory::MotorVehicles => "motor_vehicles",
            AssetCategory::ComputerEquipment => "computer_equipment",
            AssetCategory::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            AssetCategory::LandAndBuildings => "Land and buildings",
            AssetCategory::PlantAndMachinery => "Plant and machinery",
            AssetCategory::FixturesAndFittings => "Fixtures and fittings",
            AssetCategory::MotorVehicles => "Motor vehicles",
            AssetCategory::ComputerEquipment => "Computer equipment",
            AssetCategory::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            AssetCategory::LandAndBuildings,
            AssetCategory::PlantAndMachinery,
            AssetCategory::FixturesAndFittings,
            AssetCategory::MotorVehicles,
            AssetCategory::ComputerEquipment,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Active,
    FullyDepreciated,
    Disposed,
    #[serde(other)]
    Unknown,
}

impl Categorical for AssetStatus {
    fn code(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::FullyDepreciated => "fully_depreciated",
            AssetStatus::Disposed => "disposed",
            AssetStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::FullyDepreciated => "Fully depreciated",
            AssetStatus::Disposed => "Disposed",
            AssetStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            AssetStatus::Active,
            AssetStatus::FullyDepreciated,
            AssetStatus::Disposed,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationMethod {
    StraightLine,
    ReducingBalance,
    #[serde(other)]
    Unknown,
}

impl Categorical for DepreciationMethod {
    fn code(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "straight_line",
            DepreciationMethod::ReducingBalance => "reducing_balance",
            DepreciationMethod::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "Straight line",
            DepreciationMethod::ReducingBalance => "Reducing balance",
            DepreciationMethod::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            DepreciationMethod::StraightLine,
            DepreciationMethod::ReducingBalance,
        ]
    }
}

/// Item in the fixed asset register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    pub category: Option<AssetCategory>,
    pub status: Option<AssetStatus>,
    pub depreciation_method: Option<DepreciationMethod>,
    pub purchase_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub accumulated_depreciation: Option<f64>,
    pub net_book_value: Option<f64>,
}

impl FixedAsset {
    /// Share of cost already written off, in percent. `None` without a cost.
    pub fn depreciated_percent(&self) -> Option<f64> {
        let cost = self.cost.filter(|c| *c > 0.0)?;
        let acc = self.accumulated_depreciation.unwrap_or(0.0);
        Some((acc / cost * 100.0).clamp(0.0, 100.0))
    }
}

impl Validate for FixedAsset {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        non_negative("cost", self.cost)?;
        non_negative("accumulated_depreciation", self.accumulated_depreciation)?;
        non_negative("net_book_value", self.net_book_value)?;
        Ok(())
    }
}

impl AggregateRoot for FixedAsset {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "fixed_asset"
    }

    fn element_name() -> &'static str {
        "Fixed asset"
    }

    fn list_name() -> &'static str {
        "Fixed assets"
    }

    fn endpoint() -> &'static str {
        "/fixed-assets"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(cost: Option<f64>, acc: Option<f64>) -> FixedAsset {
        FixedAsset {
            id: "fa-1".into(),
            name: "Laptop".into(),
            category: Some(AssetCategory::ComputerEquipment),
            status: Some(AssetStatus::Active),
            depreciation_method: Some(DepreciationMethod::StraightLine),
            purchase_date: None,
            cost,
            accumulated_depreciation: acc,
            net_book_value: None,
        }
    }

    #[test]
    fn test_depreciated_percent() {
        assert_eq!(asset(Some(2000.0), Some(500.0)).depreciated_percent(), Some(25.0));
        assert_eq!(asset(Some(2000.0), None).depreciated_percent(), Some(0.0));
        assert_eq!(asset(None, Some(500.0)).depreciated_percent(), None);
        assert_eq!(asset(Some(0.0), Some(500.0)).depreciated_percent(), None);
    }
}
