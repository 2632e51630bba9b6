//! Parking spot domain entity

/// Vehicle category a spot is built for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParkingType {
    Car,
    Bike,
    /// Category name read from a boundary that this lot does not support
    Unknown(String),
}

impl ParkingType {
    /// Map the console menu selection (`1` car, `2` bike) to a category.
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            1 => Some(Self::Car),
            2 => Some(Self::Bike),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Car => "CAR",
            Self::Bike => "BIKE",
            Self::Unknown(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl std::fmt::Display for ParkingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical parking location
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    pub id: i32,
    pub parking_type: ParkingType,
    pub available: bool,
}

impl ParkingSpot {
    pub fn new(id: i32, parking_type: ParkingType, available: bool) -> Self {
        Self {
            id,
            parking_type,
            available,
        }
    }

    pub fn occupy(&mut self) {
        self.available = false;
    }

    pub fn release(&mut self) {
        self.available = true;
    }
}

// ── Tests ──────────────────────────────────────────────────────
