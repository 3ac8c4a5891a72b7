pub mod form;

pub use form::{parse_issue_body, ParsedForm, HEADING_MARKER};
