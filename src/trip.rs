//! Trip budget classification shared by the planner form and the homepage
//! simulation. Pure functions only.

/// Budgets strictly below this are a local outing.
pub const LOCAL_LIMIT: f64 = 1000.0;
/// Budgets strictly below this (and at least `LOCAL_LIMIT`) are a weekend trip.
pub const WEEKEND_LIMIT: f64 = 5000.0;

/// Itinerary category selected by total budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Local,
    Weekend,
    FullItinerary,
}

impl Tier {
    /// First matching threshold wins.
    pub fn for_budget(budget: f64) -> Self {
        if budget < LOCAL_LIMIT {
            Tier::Local
        } else if budget < WEEKEND_LIMIT {
            Tier::Weekend
        } else {
            Tier::FullItinerary
        }
    }

    /// Markup shown in the planner results block.
    pub fn form_message(self) -> &'static str {
        match self {
            Tier::Local => {
                "Focus on a **local outing** (Cafe/Movie/Quick Bite). Remember to check our \
                 <a href='discounts.html'>Local Vendor Discounts</a> for amazing deals in this area!"
            }
            Tier::Weekend => {
                "Perfect for a **short weekend trip**. We'll suggest budget transport options \
                 and student-friendly stays."
            }
            Tier::FullItinerary => {
                "Ideal for a **full itinerary trip/trek**. We'll include suggested travel routes, \
                 trusted local guides, and specialty highlights."
            }
        }
    }

    /// Plain text shown in the homepage summary dialog.
    pub fn summary_message(self) -> &'static str {
        match self {
            Tier::Local => {
                "Local outing plan (Cafe/Movie/Quick Bite). Check our **Local Vendor Discounts** \
                 for this area!"
            }
            Tier::Weekend => {
                "Short weekend trip itinerary. Includes budget transport options and \
                 student-friendly stays."
            }
            Tier::FullItinerary => {
                "Full itinerary for a long trip/trek. Includes suggested travel routes, \
                 trusted local guides, and specialty highlights."
            }
        }
    }
}

/// A validated planner request. Callers guarantee `people > 0` and a finite
/// `budget > 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRequest {
    pub destination: String,
    pub people: u64,
    pub budget: f64,
}

/// Derived plan for a [`TripRequest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripPlan {
    /// Budget per person. Rendered to two decimals by
    /// [`format_rupees`](crate::numeric::format_rupees), the same rounding as
    /// the total, so both amounts always agree for a group of one.
    pub per_person_budget: f64,
    pub tier: Tier,
}

/// Compute the plan for a request. Depends on nothing but the request.
pub fn compute_trip_plan(request: &TripRequest) -> TripPlan {
    TripPlan {
        per_person_budget: request.budget / request.people as f64,
        tier: Tier::for_budget(request.budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::format_rupees;

    fn request(people: u64, budget: f64) -> TripRequest {
        TripRequest {
            destination: "Goa".into(),
            people,
            budget,
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::for_budget(999.99), Tier::Local);
        assert_eq!(Tier::for_budget(1000.0), Tier::Weekend);
        assert_eq!(Tier::for_budget(4999.99), Tier::Weekend);
        assert_eq!(Tier::for_budget(5000.0), Tier::FullItinerary);
    }

    #[test]
    fn tier_extremes() {
        assert_eq!(Tier::for_budget(0.01), Tier::Local);
        assert_eq!(Tier::for_budget(1e12), Tier::FullItinerary);
    }

    #[test]
    fn per_person_rounds_to_cents() {
        let plan = compute_trip_plan(&request(3, 1000.0));
        assert_eq!(format_rupees(plan.per_person_budget), "₹333.33");
        assert_eq!(plan.tier, Tier::Weekend);
    }

    #[test]
    fn per_person_even_split() {
        let plan = compute_trip_plan(&request(4, 8000.0));
        assert_eq!(plan.per_person_budget, 2000.0);
        assert_eq!(plan.tier, Tier::FullItinerary);
    }

    #[test]
    fn half_cent_share_rounds_like_total() {
        let plan = compute_trip_plan(&request(1, 1000.125));
        assert_eq!(format_rupees(plan.per_person_budget), "₹1000.13");
        assert_eq!(format_rupees(1000.125), "₹1000.13");

        let plan = compute_trip_plan(&request(1, 0.045));
        assert_eq!(format_rupees(plan.per_person_budget), "₹0.04");
    }

    #[test]
    fn single_person_keeps_budget() {
        let plan = compute_trip_plan(&request(1, 750.5));
        assert_eq!(plan.per_person_budget, 750.5);
        assert_eq!(plan.tier, Tier::Local);
    }

    #[test]
    fn destination_does_not_affect_plan() {
        let a = compute_trip_plan(&request(2, 3000.0));
        let mut other = request(2, 3000.0);
        other.destination = "Manali".into();
        assert_eq!(a, compute_trip_plan(&other));
    }

    #[test]
    fn local_form_message_links_discounts() {
        assert!(Tier::Local.form_message().contains("href='discounts.html'"));
        assert!(Tier::Local.summary_message().contains("Local Vendor Discounts"));
    }

    #[test]
    fn messages_are_distinct_per_tier() {
        let tiers = [Tier::Local, Tier::Weekend, Tier::FullItinerary];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.form_message(), b.form_message());
                assert_ne!(a.summary_message(), b.summary_message());
            }
        }
    }
}
