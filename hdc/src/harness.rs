use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wirepack::entities::UnplacedCircle;

use crate::catalogue::WireCatalogue;

/// A cable harness: how many wires of each type run through the bundle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Harness {
    #[serde(default)]
    pub name: String,
    /// Thickness of the jacket or heat-shrink around the bundle, in mm
    #[serde(default)]
    pub margin: f64,
    pub wires: Vec<WireCount>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WireCount {
    pub wire_type: String,
    pub count: usize,
}

/// Identifies a single wire of a [Harness]: the `ordinal`-th wire of group `group`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireRef {
    pub group: usize,
    pub ordinal: usize,
}

impl Harness {
    pub fn n_wires(&self) -> usize {
        self.wires.iter().map(|w| w.count).sum()
    }

    /// One circle per wire, labeled with its wire type
    pub fn to_circles(
        &self,
        catalogue: &WireCatalogue,
    ) -> Result<Vec<UnplacedCircle<String, WireRef>>> {
        let mut circles = Vec::with_capacity(self.n_wires());
        for (group, wc) in self.wires.iter().enumerate() {
            let wire = catalogue
                .get(&wc.wire_type)
                .with_context(|| format!("harness {:?}, wire group {group}", self.name))?;
            circles.extend((0..wc.count).map(|ordinal| {
                UnplacedCircle::new(wire.radius_mm(), wire.name.clone(), WireRef { group, ordinal })
            }));
        }
        Ok(circles)
    }

    /// Sum of the cross-sectional areas of all wires, in mm²
    pub fn total_area(&self, catalogue: &WireCatalogue) -> Result<f64> {
        let mut total_area = 0.0;
        for wc in &self.wires {
            total_area += catalogue.get(&wc.wire_type)?.area_mm2 * wc.count as f64;
        }
        Ok(total_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> Harness {
        Harness {
            name: "test".to_string(),
            margin: 0.0,
            wires: vec![
                WireCount {
                    wire_type: "22 Gauge".to_string(),
                    count: 3,
                },
                WireCount {
                    wire_type: "16 Gauge".to_string(),
                    count: 0,
                },
                WireCount {
                    wire_type: "12 Gauge".to_string(),
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn expands_counts_into_circles() {
        let circles = harness().to_circles(&WireCatalogue::default()).unwrap();
        assert_eq!(circles.len(), 4);
        assert_eq!(circles[2].payload, WireRef { group: 0, ordinal: 2 });
        assert_eq!(circles[3].label, "12 Gauge");
        assert_eq!(circles[3].radius, 2.446 / 2.0);
    }

    #[test]
    fn unknown_wire_type_fails() {
        let mut harness = harness();
        harness.wires[1].wire_type = "7 Gauge".to_string();
        let catalogue = WireCatalogue::default();
        assert!(harness.to_circles(&catalogue).is_err());
        assert!(harness.total_area(&catalogue).is_err());
    }

    #[test]
    fn total_area() {
        let area = harness().total_area(&WireCatalogue::default()).unwrap();
        assert!((area - (3.0 * 0.9331 + 4.7)).abs() < 1e-12);
    }
}
