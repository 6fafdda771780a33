use thiserror::Error;

/// Failure while wiring a component into the page.
///
/// Never shown to the user; `dom::start` logs it and moves on to the next
/// component.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("required element `{0}` not found")]
    MissingElement(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

/// Rejected planner input. The inline form collapses every variant into one
/// message; the homepage simulation shows the variant's text as an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TripInputError {
    #[error("❌ Error: Please enter a destination.")]
    EmptyDestination,

    #[error("❌ Error: Please enter a valid number of people.")]
    InvalidPeople,

    #[error("❌ Error: Please enter a valid budget.")]
    InvalidBudget,
}
