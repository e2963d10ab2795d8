// src/analysis/error.rs
use thiserror::Error;
use crate::config::InputField;

/// Failures of the availability/requirement derivations.
///
/// None of these are fatal: they are carried in the derived state and drawn
/// next to the field that caused them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("La tasa de aprovechamiento es 0%: el requerimiento no está definido")]
    ZeroUtilization,

    #[error("{field} no es un número finito")]
    NonFinite { field: InputField },

    #[error("La tasa de aprovechamiento {0}% está fuera del rango 0-100%")]
    RateOutOfRange(u32),

    #[error("No se puede interpretar '{text}' como {quantity}")]
    Unparseable { quantity: &'static str, text: String },
}
