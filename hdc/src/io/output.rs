use serde::{Deserialize, Serialize};
use wirepack::entities::BundleResult;

use crate::config::HdcConfig;
use crate::harness::{Harness, WireRef};

/// Everything written to the solution file of the `diameter` command
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HdcOutput {
    pub harness: Harness,
    pub quick_estimate_mm: f64,
    pub bundle: BundleResult<String, WireRef>,
    pub config: HdcConfig,
}
