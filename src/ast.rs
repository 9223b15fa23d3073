//! Result tree for parsed EDTF expressions
//!
//! Every node is an owned, immutable value built once by the grammar rule
//! that recognized it. `Display` renders a node back to EDTF text, and every
//! node derives `Serialize` for the structured output formats.

pub mod component;
pub mod date;
pub mod edtf;
pub mod interval;
pub mod precision;
pub mod season;
pub mod span;

pub use component::{Component, Day, Digits, Month, NumericField, Year};
pub use date::{Date, DatePrecision, DateTime, Sign, Time, Timezone};
pub use edtf::Edtf;
pub use interval::{Endpoint, Interval};
pub use precision::{DigitPrecision, LongYearForm, Mask, Precision, Qualifier};
pub use season::{Season, SeasonCode};
pub use span::Span;
