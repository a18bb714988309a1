//! Error types shared by the controller and the browser layer.
//!
//! Validation failures on the contact form are not errors; they are rendered
//! inline by [`crate::contact`]. The variants here cover DOM contract
//! violations and failed browser calls only.

/// Error returned while wiring or running page handlers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    /// An element required by the page's DOM contract was not found.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    /// An element handler was dispatched for a window-level event.
    #[error("{0:?} dispatched without a target element")]
    NoTarget(crate::registry::Action),
    /// A browser API call rejected the request.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl PageError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

/// Error returned by [`crate::config::PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON for [`crate::config::PageConfig`].
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field is outside its allowed range.
    #[error("invalid page config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[cfg(feature = "hydrate")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(feature = "hydrate")]
impl From<ConfigError> for wasm_bindgen::JsValue {
    fn from(err: ConfigError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
