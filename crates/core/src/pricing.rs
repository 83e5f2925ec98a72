//! # Pricing Catalog
//!
//! Vehicle types, the three wash plans offered for each of them and the optional
//! extra features. Prices are in whole currency units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Sedan Car")]
    Sedan,
    #[serde(rename = "Minivan Car")]
    Minivan,
    #[serde(rename = "Microbus")]
    Microbus,
    #[serde(rename = "SUV Car")]
    Suv,
    #[serde(rename = "Mid Size SUV")]
    MidSizeSuv,
    #[serde(rename = "Full Size SUV")]
    FullSizeSuv,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Sedan,
        VehicleType::Minivan,
        VehicleType::Microbus,
        VehicleType::Suv,
        VehicleType::MidSizeSuv,
        VehicleType::FullSizeSuv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan Car",
            VehicleType::Minivan => "Minivan Car",
            VehicleType::Microbus => "Microbus",
            VehicleType::Suv => "SUV Car",
            VehicleType::MidSizeSuv => "Mid Size SUV",
            VehicleType::FullSizeSuv => "Full Size SUV",
        }
    }

    /// Prices of the Basic, Full and General plans, in that order.
    pub fn prices(&self) -> [u32; 3] {
        match self {
            VehicleType::Sedan => [500, 1000, 2000],
            VehicleType::Minivan | VehicleType::Suv => [700, 1200, 2500],
            VehicleType::Microbus => [1000, 1500, 2800],
            VehicleType::MidSizeSuv => [800, 1300, 2400],
            VehicleType::FullSizeSuv => [1000, 1500, 2800],
        }
    }

    /// Wash durations in minutes, aligned with [`VehicleType::prices`].
    pub fn durations(&self) -> [u32; 3] {
        match self {
            VehicleType::Sedan => [20, 40, 80],
            VehicleType::Minivan | VehicleType::Suv => [30, 50, 90],
            VehicleType::Microbus => [40, 60, 100],
            VehicleType::MidSizeSuv => [40, 60, 90],
            VehicleType::FullSizeSuv => [50, 80, 120],
        }
    }

    pub fn price_for(&self, plan: WashPlan) -> u32 {
        self.prices()[plan.tier()]
    }

    pub fn duration_for(&self, plan: WashPlan) -> u32 {
        self.durations()[plan.tier()]
    }

    /// The plan sold at exactly `price` for this vehicle.
    pub fn plan_for_price(&self, price: u32) -> Option<WashPlan> {
        WashPlan::ALL
            .into_iter()
            .find(|plan| self.price_for(*plan) == price)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|vehicle| vehicle.as_str() == s.trim())
            .ok_or_else(|| BookingError::Validation(format!("Unknown vehicle type: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WashPlan {
    #[serde(rename = "Basic Wash")]
    Basic,
    #[serde(rename = "Full Wash")]
    Full,
    #[serde(rename = "General Wash")]
    General,
}

impl WashPlan {
    pub const ALL: [WashPlan; 3] = [WashPlan::Basic, WashPlan::Full, WashPlan::General];

    fn tier(self) -> usize {
        match self {
            WashPlan::Basic => 0,
            WashPlan::Full => 1,
            WashPlan::General => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WashPlan::Basic => "Basic Wash",
            WashPlan::Full => "Full Wash",
            WashPlan::General => "General Wash",
        }
    }

    /// Price band a booked price falls into, independent of vehicle type:
    /// below 1000 is Basic, below 2000 is Full, anything else is General.
    pub fn for_price_band(price: u32) -> WashPlan {
        match price {
            p if p >= 2000 => WashPlan::General,
            p if p >= 1000 => WashPlan::Full,
            _ => WashPlan::Basic,
        }
    }
}

impl fmt::Display for WashPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraFeature {
    #[serde(rename = "Tire Shine")]
    TireShine,
    #[serde(rename = "Express Interior")]
    ExpressInterior,
    #[serde(rename = "Interior Vacuum")]
    InteriorVacuum,
    #[serde(rename = "Dashboard Polish & Clean")]
    DashboardPolish,
    #[serde(rename = "Engine Wash")]
    EngineWash,
}

impl ExtraFeature {
    pub const ALL: [ExtraFeature; 5] = [
        ExtraFeature::TireShine,
        ExtraFeature::ExpressInterior,
        ExtraFeature::InteriorVacuum,
        ExtraFeature::DashboardPolish,
        ExtraFeature::EngineWash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraFeature::TireShine => "Tire Shine",
            ExtraFeature::ExpressInterior => "Express Interior",
            ExtraFeature::InteriorVacuum => "Interior Vacuum",
            ExtraFeature::DashboardPolish => "Dashboard Polish & Clean",
            ExtraFeature::EngineWash => "Engine Wash",
        }
    }
}

impl fmt::Display for ExtraFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraFeature {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtraFeature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s.trim())
            .ok_or_else(|| BookingError::Validation(format!("Unknown extra feature: {s}")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOption {
    pub plan: WashPlan,
    pub price: u32,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePricing {
    pub vehicle: VehicleType,
    pub plans: Vec<PlanOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCatalog {
    pub vehicles: Vec<VehiclePricing>,
    pub extra_features: Vec<ExtraFeature>,
}

impl PricingCatalog {
    pub fn standard() -> Self {
        let vehicles = VehicleType::ALL
            .into_iter()
            .map(|vehicle| VehiclePricing {
                vehicle,
                plans: WashPlan::ALL
                    .into_iter()
                    .map(|plan| PlanOption {
                        plan,
                        price: vehicle.price_for(plan),
                        duration_minutes: vehicle.duration_for(plan),
                    })
                    .collect(),
            })
            .collect();

        Self {
            vehicles,
            extra_features: ExtraFeature::ALL.to_vec(),
        }
    }
}
