//! Rule-based field extractors for receipt text.
//!
//! Each stage is an independent pass over the same normalized line list (or
//! the joined text, for dates) and returns a best-effort value; quality feeds
//! into the parser's confidence score rather than into errors.

pub mod amounts;
pub mod category;
pub mod dates;
pub mod items;
pub mod patterns;
pub mod vendor;

pub use amounts::{extract_amounts, ReceiptAmounts};
pub use category::{categorize_item, DEFAULT_CATEGORY};
pub use dates::extract_date;
pub use items::extract_line_items;
pub use vendor::{extract_vendor, UNKNOWN_VENDOR};
