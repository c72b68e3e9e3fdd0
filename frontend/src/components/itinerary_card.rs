use trip_planner_lib::trip::{DayPlan, TripPlan};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TripCardProps {
    pub plan: TripPlan,
}

#[function_component]
pub fn TripCard(props: &TripCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <div class="trip-card">
            <h2>{format!("{} to {}", plan.origin, plan.destination)}</h2>
            <label>
                {format!(
                    "{} to {} ({} days, {} travelers)",
                    plan.start_date, plan.end_date, plan.duration_days, plan.travelers
                )}
            </label>
            <label>
                {format!("Estimated cost: {:.2} {}", plan.total_estimated_cost, plan.currency)}
                if plan.budget_adjusted {
                    {" (scaled to budget)"}
                }
            </label>
            { for plan.itinerary.iter().map(|day| html! { <DayCard day={day.clone()} /> }) }
            if !plan.local_tips.is_empty() {
                <h3>{"Local tips"}</h3>
                <ul>
                    { for plan.local_tips.iter().map(|tip| html! { <li>{tip.clone()}</li> }) }
                </ul>
            }
            <label class="emergency">
                {format!(
                    "Emergency: police {}, ambulance {}, tourist helpline {}",
                    plan.emergency_contacts.police,
                    plan.emergency_contacts.ambulance,
                    plan.emergency_contacts.tourist_helpline
                )}
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DayCardProps {
    pub day: DayPlan,
}

#[function_component]
fn DayCard(props: &DayCardProps) -> Html {
    let day = &props.day;

    html! {
        <div class="day-card">
            <h3>{format!("Day {} - {}", day.day, day.title)}</h3>
            <p>{day.description.clone()}</p>
            { for day.activities.iter().map(|activity| html! {
                <div class="activity-card">
                    <strong>{format!("{}: {}", activity.time_slot, activity.name)}</strong>
                    <p>{activity.description.clone()}</p>
                    <small>{format!("{:.1} h, {:.2} per person", activity.duration_hours, activity.cost_per_person)}</small>
                </div>
            }) }
        </div>
    }
}
