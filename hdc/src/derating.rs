//! Current limit of a wire inside a bundle.
//!
//! Wires bundled together dissipate heat worse than a single wire in free air. The current limit of a single
//! wire is multiplied by a coefficient that decays with the number of wires in the bundle towards a floor that
//! depends on the share of wires carrying current (the bundle loading).

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::catalogue::WireSpec;

/// Share of the wires in the bundle that carry current
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BundleLoading {
    Percent20,
    Percent40,
    Percent60,
    Percent80,
    Percent100,
}

impl BundleLoading {
    pub const ALL: [BundleLoading; 5] = [
        BundleLoading::Percent20,
        BundleLoading::Percent40,
        BundleLoading::Percent60,
        BundleLoading::Percent80,
        BundleLoading::Percent100,
    ];

    pub fn percentage(&self) -> u32 {
        match self {
            BundleLoading::Percent20 => 20,
            BundleLoading::Percent40 => 40,
            BundleLoading::Percent60 => 60,
            BundleLoading::Percent80 => 80,
            BundleLoading::Percent100 => 100,
        }
    }

    /// `(a, b, c)` of the derating curve `a + b * exp(-c * n_wires)`
    fn curve(&self) -> (f64, f64, f64) {
        match self {
            BundleLoading::Percent20 => (0.4566806, 0.5809375, 0.06637023),
            BundleLoading::Percent40 => (0.3831531, 0.674138, 0.09878993),
            BundleLoading::Percent60 => (0.3254571, 0.7533654, 0.1164914),
            BundleLoading::Percent80 => (0.3005456, 0.7738705, 0.1294528),
            BundleLoading::Percent100 => (0.2701568, 0.8338723, 0.1363069),
        }
    }

    /// Fraction of the single-wire current limit allowed in a bundle of `n_wires`
    pub fn coefficient(&self, n_wires: usize) -> f64 {
        let (a, b, c) = self.curve();
        a + b * (-c * n_wires as f64).exp()
    }
}

impl TryFrom<u32> for BundleLoading {
    type Error = anyhow::Error;

    fn try_from(percentage: u32) -> Result<Self> {
        match BundleLoading::ALL
            .into_iter()
            .find(|l| l.percentage() == percentage)
        {
            Some(loading) => Ok(loading),
            None => bail!("unsupported bundle loading: {percentage}%, expected one of 20, 40, 60, 80 or 100"),
        }
    }
}

/// Current limit of a single `wire` in a bundle of `n_wires`, in A
pub fn current_limit(
    wire: &WireSpec,
    n_wires: usize,
    loading: BundleLoading,
    safety_factor: f64,
) -> Result<f64> {
    ensure!(
        safety_factor.is_finite() && safety_factor > 0.0,
        "safety factor should be strictly positive, got {safety_factor}"
    );
    let Some(single_wire_limit) = wire.current_limit_a else {
        bail!("no current limit known for wire type {:?}", wire.name)
    };
    Ok(loading.coefficient(n_wires) * single_wire_limit / safety_factor)
}
