//! Homepage call-to-action: a three-question trip planning walkthrough.
//!
//! The questions are asked one at a time through [`Dialogs`]. [`PromptFlow`]
//! is the state machine behind them; every answer either advances it or ends
//! it in `Aborted`.

use crate::error::TripInputError;
use crate::numeric::format_rupees;
use crate::trip::{compute_trip_plan, TripPlan, TripRequest};

use super::planner::{parse_budget, parse_people};

pub const DESTINATION_PROMPT: &str =
    "Step 1/3: Enter your Destination (e.g., Manali, Local Cafe):";
pub const PEOPLE_PROMPT: &str = "Step 2/3: Enter number of people in your group (e.g., 3):";
pub const BUDGET_PROMPT: &str =
    "Step 3/3: Enter your total approximate budget (in ₹, e.g., 5000):";

/// Where the page is, as far as homepage detection cares.
#[derive(Clone, Debug, PartialEq)]
pub struct PageContext {
    pub title: String,
    pub pathname: String,
}

impl PageContext {
    pub fn is_homepage(&self, title_marker: &str, default_document: &str) -> bool {
        self.title.contains(title_marker)
            || self.pathname.ends_with(default_document)
            || self.pathname == "/"
    }
}

/// Blocking question/answer surface. `prompt` returns `None` on cancel.
pub trait Dialogs {
    fn prompt(&mut self, message: &str) -> Option<String>;
    fn alert(&mut self, message: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum PromptFlow {
    AwaitDestination,
    AwaitPeople { destination: String },
    AwaitBudget { destination: String, people: u64 },
    Done(TripRequest),
    Aborted,
}

/// Result of feeding one answer to the flow.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub next: PromptFlow,
    /// Set when the answer was rejected and the user must be told.
    pub alert: Option<TripInputError>,
}

impl PromptFlow {
    pub fn start() -> Self {
        PromptFlow::AwaitDestination
    }

    /// Question for the current state; `None` once the flow has ended.
    pub fn question(&self) -> Option<&'static str> {
        match self {
            PromptFlow::AwaitDestination => Some(DESTINATION_PROMPT),
            PromptFlow::AwaitPeople { .. } => Some(PEOPLE_PROMPT),
            PromptFlow::AwaitBudget { .. } => Some(BUDGET_PROMPT),
            PromptFlow::Done(_) | PromptFlow::Aborted => None,
        }
    }

    /// Feed the answer to the current question. `None` means cancelled.
    pub fn answer(self, reply: Option<&str>) -> Transition {
        let (next, alert) = match self {
            PromptFlow::AwaitDestination => match reply {
                // Cancel or an empty answer ends the flow without a message.
                None | Some("") => (PromptFlow::Aborted, None),
                Some(d) => (
                    PromptFlow::AwaitPeople {
                        destination: d.to_string(),
                    },
                    None,
                ),
            },
            PromptFlow::AwaitPeople { destination } => {
                match parse_people(reply.unwrap_or_default()) {
                    Ok(people) => (
                        PromptFlow::AwaitBudget {
                            destination,
                            people,
                        },
                        None,
                    ),
                    Err(e) => (PromptFlow::Aborted, Some(e)),
                }
            }
            PromptFlow::AwaitBudget {
                destination,
                people,
            } => match parse_budget(reply.unwrap_or_default()) {
                Ok(budget) => (
                    PromptFlow::Done(TripRequest {
                        destination,
                        people,
                        budget,
                    }),
                    None,
                ),
                Err(e) => (PromptFlow::Aborted, Some(e)),
            },
            ended @ (PromptFlow::Done(_) | PromptFlow::Aborted) => (ended, None),
        };
        Transition { next, alert }
    }
}

/// Leading indent of every summary line, blank ones included.
const SUMMARY_INDENT: &str = "          ";

/// Multi-line summary shown once all three answers are in.
pub fn summary(request: &TripRequest, plan: &TripPlan) -> String {
    let lines = [
        "✨ WALK TRIP PLANNER RESULTS ✨".to_string(),
        "---------------------------------".to_string(),
        format!("Destination: {}", request.destination),
        format!("Group Size: {}", request.people),
        format!("Total Budget: {}", format_rupees(request.budget)),
        format!("Budget Per Person: {}", format_rupees(plan.per_person_budget)),
        String::new(),
        format!("Your Custom Itinerary Focus: {}", plan.tier.summary_message()),
        String::new(),
        "✅ Next: You will now be taken to the full planner page!".to_string(),
    ];

    let mut out = String::from("\n");
    for line in &lines {
        out.push_str(SUMMARY_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(SUMMARY_INDENT);
    out
}

/// Run the walkthrough. Returns `true` only when it completed and the summary
/// was shown; off the homepage nothing is asked and the result is `false`.
pub fn run<D: Dialogs>(
    page: &PageContext,
    config: &crate::config::SiteConfig,
    dialogs: &mut D,
) -> bool {
    if !page.is_homepage(&config.homepage_title_marker, &config.default_document) {
        return false;
    }

    let mut flow = PromptFlow::start();
    while let Some(question) = flow.question() {
        let reply = dialogs.prompt(question);
        let Transition { next, alert } = flow.answer(reply.as_deref());
        if let Some(e) = alert {
            dialogs.alert(&e.to_string());
        }
        flow = next;
    }

    match flow {
        PromptFlow::Done(request) => {
            let plan = compute_trip_plan(&request);
            dialogs.alert(&summary(&request, &plan));
            true
        }
        _ => false,
    }
}

/// `window.prompt` / `window.alert`.
#[cfg(target_arch = "wasm32")]
pub struct WindowDialogs(pub web_sys::Window);

#[cfg(target_arch = "wasm32")]
impl Dialogs for WindowDialogs {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.0.prompt_with_message(message).ok().flatten()
    }

    fn alert(&mut self, message: &str) {
        let _ = self.0.alert_with_message(message);
    }
}

/// Run the walkthrough on clicks of the call-to-action. The link's own
/// navigation is never cancelled, whatever the walkthrough returns.
#[cfg(target_arch = "wasm32")]
pub fn install(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<(), crate::error::SiteError> {
    use crate::dom;

    let Some(cta) = dom::query(document, &config.selectors.cta_button) else {
        return Ok(());
    };
    let Some(window) = web_sys::window() else {
        return Ok(());
    };

    let doc = document.clone();
    let config = config.clone();
    dom::listen(&cta, "click", move |_| {
        let page = PageContext {
            title: doc.title(),
            pathname: doc
                .location()
                .and_then(|l| l.pathname().ok())
                .unwrap_or_default(),
        };
        let completed = run(&page, &config, &mut WindowDialogs(window.clone()));
        dom::debug(&config, &format!("simulation: completed={completed}"));
    })?;
    Ok(())
}
