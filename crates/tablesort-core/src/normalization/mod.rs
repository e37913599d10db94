//! Cell value normalization shared by the classifier and the comparators.

mod datetime;
mod lookup;
mod numeric;

pub use datetime::{date_value, is_date, parse_date_millis};
pub use lookup::{month_rank, ordinal_rank};
pub use numeric::{is_numeric, numeric_value, parse_number, strip_cosmetics};
