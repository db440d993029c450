use serde::{Deserialize, Serialize};

/// Whether a driver can take a delivery right now. Assignment requires
/// `Available`; the assignment transaction flips it to `Busy` and delivery
/// completion flips it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DriverAvailability {
    Available,
    Busy,
    Offline,
}

impl DriverAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverAvailability::Available => "available",
            DriverAvailability::Busy => "busy",
            DriverAvailability::Offline => "offline",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(DriverAvailability::Available),
            "busy" => Some(DriverAvailability::Busy),
            "offline" => Some(DriverAvailability::Offline),
            _ => None,
        }
    }
}
