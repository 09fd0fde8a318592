use thiserror::Error;

/// Failures of the browser calls behind the résumé export and the contact form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Could not open print window - popup blocked?")]
    PopupBlocked,
    #[error("Could not navigate to mail client: {0}")]
    Navigation(String),
    #[error("Browser call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SiteError::PopupBlocked.to_string(),
            "Could not open print window - popup blocked?"
        );
        assert_eq!(
            SiteError::Navigation("denied".to_string()).to_string(),
            "Could not navigate to mail client: denied"
        );
    }
}
