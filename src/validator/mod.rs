pub mod checkbox;
pub mod form;

pub use checkbox::{check_all_checked, check_any_checked};
pub use form::{FormValidator, RuleError};
