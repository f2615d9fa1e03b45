use serde::{Deserialize, Serialize};

/// Tip value carried by fabricated placeholder records.
pub const SEED_TIP: &str = "Seed";

/// Tip value carried by generated variation records. The literal is kept
/// from the source data format and passes through tip formatting unchanged.
pub const NEW_NUMBER_TIP: &str = "Număr nou";

/// One row of the working dataset.
///
/// Serde field names match the `Phone,Tip,Operator` CSV headers of the
/// source and output files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Tip")]
    pub tip: String,
    #[serde(rename = "Operator")]
    pub operator: String,
}

impl PhoneRecord {
    pub fn new(
        phone: impl Into<String>,
        tip: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            tip: tip.into(),
            operator: operator.into(),
        }
    }
}
