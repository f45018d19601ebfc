use serde::{Deserialize, Serialize};

/// One row of the reference table.
///
/// Pressure is in the table unit (MPa); volumes are m^3/kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub pressure: f64,
    pub liquid_volume: f64,
    pub vapor_volume: f64,
}

impl ReferencePoint {
    pub const fn new(pressure: f64, liquid_volume: f64, vapor_volume: f64) -> Self {
        Self {
            pressure,
            liquid_volume,
            vapor_volume,
        }
    }

    /// The row's volumes, copied verbatim.
    pub fn reading(&self) -> Reading {
        Reading {
            liquid_volume: self.liquid_volume,
            vapor_volume: self.vapor_volume,
        }
    }
}

/// Liquid and vapor specific volume at one pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub liquid_volume: f64,
    pub vapor_volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_copies_row() {
        let row = ReferencePoint::new(0.05, 0.00105, 30.0);
        let r = row.reading();
        assert_eq!(r.liquid_volume, 0.00105);
        assert_eq!(r.vapor_volume, 30.0);
    }
}
