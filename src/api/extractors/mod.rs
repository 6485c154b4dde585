//! Custom extractors.

mod validated_json;

pub use validated_json::{lenient_string, ValidatedJson};
