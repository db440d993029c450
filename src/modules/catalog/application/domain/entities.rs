use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Kerosene,
    Lpg,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Kerosene => "kerosene",
            FuelType::Lpg => "lpg",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "petrol" => Some(FuelType::Petrol),
            "diesel" => Some(FuelType::Diesel),
            "kerosene" => Some(FuelType::Kerosene),
            "lpg" => Some(FuelType::Lpg),
            _ => None,
        }
    }
}
