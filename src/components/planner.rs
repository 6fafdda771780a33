//! Inline trip planner form.

use crate::config::Selectors;
use crate::error::TripInputError;
use crate::numeric::{format_rupees, parse_float_prefix, parse_int_prefix};
use crate::trip::{compute_trip_plan, TripPlan, TripRequest};

/// Rendered when any field fails validation.
pub const ERROR_BLOCK: &str = r#"
    <h2 style="color: #ff3333;">Oops!</h2>
    <p>Please fill out all fields with valid information.</p>
"#;

/// Raw field values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlannerInput {
    pub destination: String,
    pub people: String,
    pub budget: String,
}

impl PlannerInput {
    /// Read the three fields through `lookup`, which returns the `value` of the
    /// element with the given id, or `None` when the page has no such element.
    /// Any element kind with a `value` counts (`<input>`, `<select>`,
    /// `<textarea>`). On failure, returns the ids that are missing.
    pub fn collect<F>(selectors: &Selectors, mut lookup: F) -> Result<Self, Vec<String>>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let ids = [
            &selectors.destination_input_id,
            &selectors.people_input_id,
            &selectors.budget_input_id,
        ];
        let mut missing = Vec::new();
        let mut values = Vec::with_capacity(ids.len());
        for id in ids {
            match lookup(id.as_str()) {
                Some(v) => values.push(v),
                None => missing.push(id.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut values = values.into_iter();
        Ok(Self {
            destination: values.next().unwrap_or_default(),
            people: values.next().unwrap_or_default(),
            budget: values.next().unwrap_or_default(),
        })
    }
}

/// Parse a group size: an integer prefix greater than zero.
pub fn parse_people(raw: &str) -> Result<u64, TripInputError> {
    parse_int_prefix(raw)
        .filter(|&n| n > 0)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or(TripInputError::InvalidPeople)
}

/// Parse a total budget: a finite decimal prefix greater than zero.
pub fn parse_budget(raw: &str) -> Result<f64, TripInputError> {
    parse_float_prefix(raw)
        .filter(|b| b.is_finite() && *b > 0.0)
        .ok_or(TripInputError::InvalidBudget)
}

/// Check the fields in form order: destination, people, budget.
pub fn validate(input: &PlannerInput) -> Result<TripRequest, TripInputError> {
    if input.destination.is_empty() {
        return Err(TripInputError::EmptyDestination);
    }
    let people = parse_people(&input.people)?;
    let budget = parse_budget(&input.budget)?;
    Ok(TripRequest {
        destination: input.destination.clone(),
        people,
        budget,
    })
}

/// Results block for a computed plan. The destination is escaped; the tier
/// message is trusted markup.
pub fn render_plan(request: &TripRequest, plan: &TripPlan) -> String {
    format!(
        r#"
    <h2>Your Trip Plan is Ready!</h2>
    <p><strong>Destination:</strong> {destination}</p>
    <p><strong>Group Size:</strong> {people} people</p>
    <p><strong>Total Budget:</strong> {total} (approx. {share} per person)</p>
    <hr style="margin: 15px 0; border-top: 1px solid #ccc;">
    <p><strong>Itinerary Focus:</strong> {focus}</p>
"#,
        destination = escape_html(&request.destination),
        people = request.people,
        total = format_rupees(request.budget),
        share = format_rupees(plan.per_person_budget),
        focus = plan.tier.form_message(),
    )
}

/// Full replacement content for the results area after a submit.
pub fn submit(input: &PlannerInput) -> String {
    match validate(input) {
        Ok(request) => render_plan(&request, &compute_trip_plan(&request)),
        Err(_) => ERROR_BLOCK.to_string(),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Intercept submits of the planner form and render into the results area.
/// Pages without the form or the results area are left alone.
#[cfg(target_arch = "wasm32")]
pub fn install(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<(), crate::error::SiteError> {
    use crate::dom;

    let sel = config.selectors.clone();
    let (Some(form), Some(results)) = (
        dom::query(document, &sel.planner_form),
        dom::query(document, &sel.results),
    ) else {
        return Ok(());
    };

    let doc = document.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();

        // A present element without a string `value` reads as empty and
        // fails validation.
        let input = PlannerInput::collect(&sel, |id| {
            doc.get_element_by_id(id).map(|el| {
                js_sys::Reflect::get(&el, &"value".into())
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default()
            })
        });
        let input = match input {
            Ok(input) => input,
            Err(missing) => {
                dom::error(&format!(
                    "planner: form inputs not found; missing ids `{}`",
                    missing.join("`, `")
                ));
                return;
            }
        };

        results.set_inner_html(&submit(&input));
    })?;
    dom::debug(config, "planner: form wired");
    Ok(())
}
