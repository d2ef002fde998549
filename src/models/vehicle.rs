use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Car,
    Motorcycle,
}

impl VehicleType {
    /// Value stored in the `vehicle_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(VehicleType::Car),
            "motorcycle" | "motorbike" => Ok(VehicleType::Motorcycle),
            _ => Err(format!("Invalid vehicle type: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_from_str() {
        assert_eq!("car".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!("CAR".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!(
            "motorcycle".parse::<VehicleType>().unwrap(),
            VehicleType::Motorcycle
        );
        assert_eq!(
            " Motorbike ".parse::<VehicleType>().unwrap(),
            VehicleType::Motorcycle
        );
        assert!("truck".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_vehicle_type_display_matches_column_value() {
        assert_eq!(VehicleType::Car.to_string(), "car");
        assert_eq!(VehicleType::Motorcycle.to_string(), "motorcycle");
    }

    #[test]
    fn test_vehicle_type_serde() {
        let json = serde_json::to_string(&VehicleType::Motorcycle).unwrap();
        assert_eq!(json, "\"motorcycle\"");
        let back: VehicleType = serde_json::from_str("\"car\"").unwrap();
        assert_eq!(back, VehicleType::Car);
    }

    #[test]
    fn test_vehicle_type_default() {
        assert_eq!(VehicleType::default(), VehicleType::Car);
    }
}
