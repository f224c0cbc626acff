pub mod normalize;
pub mod standardize;
pub mod summary;
pub mod validate;

pub use normalize::{
    format_timestamp, NormalizedDocument, Normalizer, NormalizerOptions, CALCULATED_AREA,
    PROCESSED_AT,
};
pub use standardize::{standardize_keys, standardize_risk_values, RENAME_TABLE, RISK_VALUE_KEYS};
pub use summary::{representative_coordinate, summarize};
pub use validate::{check_document, is_valid};
