//! Post-hoc data-quality audit over a finished batch.
//!
//! The normalizer never rejects a row. Inverted ranges and nameless records
//! are reported here so the caller can decide what to do with them.

use crate::normalizer::Fallback;
use crate::types::Camp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    AgeRangeInverted { camp_id: u32, name: String, min: u32, max: u32 },
    PriceRangeInverted { camp_id: u32, name: String, min: u32, max: u32 },
    MissingName { camp_id: u32 },
    /// A cell no matcher rule recognised.
    Unrecognised { camp_id: u32, field: String, text: String },
}

impl Warning {
    /// Inverted ranges break the record's own invariants; the rest are hints.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            Warning::AgeRangeInverted { .. } | Warning::PriceRangeInverted { .. }
        )
    }

    pub fn camp_id(&self) -> u32 {
        match self {
            Warning::AgeRangeInverted { camp_id, .. }
            | Warning::PriceRangeInverted { camp_id, .. }
            | Warning::MissingName { camp_id }
            | Warning::Unrecognised { camp_id, .. } => *camp_id,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::AgeRangeInverted { camp_id, name, min, max } => {
                write!(f, "camp {camp_id} ({name}): ages_min {min} > ages_max {max}")
            }
            Warning::PriceRangeInverted { camp_id, name, min, max } => {
                write!(f, "camp {camp_id} ({name}): price_min {min} > price_max {max}")
            }
            Warning::MissingName { camp_id } => write!(f, "camp {camp_id}: empty name"),
            Warning::Unrecognised { camp_id, field, text } => {
                write!(f, "camp {camp_id}: unrecognised {field} {text:?}, default used")
            }
        }
    }
}

/// Check every record's range invariants and name.
pub fn audit(camps: &[Camp]) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for camp in camps {
        if camp.name.is_empty() {
            warnings.push(Warning::MissingName { camp_id: camp.id });
        }
        if camp.ages_min > camp.ages_max {
            warnings.push(Warning::AgeRangeInverted {
                camp_id: camp.id,
                name: camp.name.clone(),
                min: camp.ages_min,
                max: camp.ages_max,
            });
        }
        if let (Some(min), Some(max)) = (camp.price_min, camp.price_max) {
            if min > max {
                warnings.push(Warning::PriceRangeInverted {
                    camp_id: camp.id,
                    name: camp.name.clone(),
                    min,
                    max,
                });
            }
        }
    }
    warnings
}

/// Turn the normalizer's fallback list into warnings.
pub fn unrecognised(fallbacks: &[Fallback]) -> Vec<Warning> {
    fallbacks
        .iter()
        .map(|fb| Warning::Unrecognised {
            camp_id: fb.camp_id,
            field: fb.field.label().to_string(),
            text: fb.text.clone(),
        })
        .collect()
}
