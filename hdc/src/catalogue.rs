use anyhow::{Result, anyhow};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Physical properties of a wire type
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WireSpec {
    pub name: String,
    /// Cross-sectional area used by the quick diameter estimate, in mm²
    pub area_mm2: f64,
    /// Outer diameter including insulation, in mm
    pub diameter_mm: f64,
    /// Current a single wire may carry in free air, in A. Not defined for multi-conductor cables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_limit_a: Option<f64>,
}

impl WireSpec {
    pub fn new(name: &str, area_mm2: f64, diameter_mm: f64, current_limit_a: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            area_mm2,
            diameter_mm,
            current_limit_a,
        }
    }

    pub fn radius_mm(&self) -> f64 {
        self.diameter_mm / 2.0
    }
}

/// Table of the known wire types
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct WireCatalogue {
    pub wires: Vec<WireSpec>,
}

impl WireCatalogue {
    pub fn new(wires: Vec<WireSpec>) -> Self {
        Self { wires }
    }

    pub fn get(&self, name: &str) -> Result<&WireSpec> {
        self.wires.iter().find(|w| w.name == name).ok_or_else(|| {
            anyhow!(
                "unknown wire type: {name:?}, known types: [{}]",
                self.names().join(", ")
            )
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.wires.iter().map(|w| w.name.as_str())
    }
}

impl Default for WireCatalogue {
    /// Common gauges and MIL-DTL-27500 shielded cables
    fn default() -> Self {
        Self::new(vec![
            WireSpec::new("24 Gauge", 0.6939, 0.940, Some(2.0)),
            WireSpec::new("22 Gauge", 0.9331, 1.090, Some(3.0)),
            WireSpec::new("20 Gauge", 1.2668, 1.270, Some(5.0)),
            WireSpec::new("18 Gauge", 1.8140, 1.520, Some(7.0)),
            WireSpec::new("16 Gauge", 2.3500, 1.730, Some(10.0)),
            WireSpec::new("14 Gauge", 3.664, 2.160, Some(20.0)),
            WireSpec::new("12 Gauge", 4.7, 2.446, Some(30.0)),
            WireSpec::new("27500 Shielded 2 Wire 22ga", 10.080, 3.582, None),
            WireSpec::new("27500 Shielded 3 Wire 22ga", 11.241, 3.783, None),
        ])
    }
}
