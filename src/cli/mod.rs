pub mod check;
pub mod run;
pub mod template;

use crate::models::FormKind;

/// Forms enabled for a run: one if restricted, otherwise all built-in forms
pub fn forms_for(restriction: Option<FormKind>) -> Vec<FormKind> {
    match restriction {
        Some(kind) => vec![kind],
        None => FormKind::ALL.to_vec(),
    }
}
