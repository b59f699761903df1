//! Bulk row-action form submitted from the listing checkboxes.

use serde::Deserialize;

use crate::forms::FormError;

/// `action=delete&ids=1&ids=4`; parsed with `serde_html_form` so repeated
/// `ids` keys collect into a vector.
#[derive(Debug, Deserialize)]
pub struct BulkActionForm {
    pub action: String,
    #[serde(default)]
    pub ids: Vec<i32>,
}

impl BulkActionForm {
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        let form: Self =
            serde_html_form::from_bytes(body).map_err(|err| FormError::Malformed(err.to_string()))?;

        if form.ids.is_empty() {
            return Err(FormError::NoRowsSelected);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_ids_are_collected() {
        let form = BulkActionForm::parse(b"action=delete&ids=1&ids=4").unwrap();

        assert_eq!(form.action, "delete");
        assert_eq!(form.ids, vec![1, 4]);
    }

    #[test]
    fn missing_ids_are_rejected() {
        assert!(matches!(
            BulkActionForm::parse(b"action=delete"),
            Err(FormError::NoRowsSelected)
        ));
    }

    #[test]
    fn non_numeric_ids_are_malformed() {
        assert!(matches!(
            BulkActionForm::parse(b"action=delete&ids=abc"),
            Err(FormError::Malformed(_))
        ));
    }
}
