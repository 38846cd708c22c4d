//! ICS stream generation according to RFC 5545.
//!
//! Folding counts characters rather than octets; a line of multi-byte text
//! can exceed 75 octets per physical line.

mod generate;
mod text;

pub use generate::{CALENDAR_NAME, PRODID, generate_ics, generate_ics_at};
pub use text::{FOLD_LIMIT, escape_text, fold_line, unescape_text, unfold};
