use chrono::NaiveDate;
use trip_planner_lib::trip::{TripPlan, TripRequest, TripTheme};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, itinerary_card::TripCard, response_view::ResponseView};
use crate::api::{self, ApiResponse};

fn parse_date(field: &str, value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{field} must be a date like 2025-03-01"))
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<Option<T>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| format!("{field} must be a number"))
}

#[function_component]
pub fn TripPlanner() -> Html {
    let origin = use_state(|| "NYC".to_string());
    let destination = use_state(|| "LA".to_string());
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let travelers = use_state(String::new);
    let budget = use_state(String::new);
    let themes = use_state(Vec::<TripTheme>::new);
    let response = use_state(|| None::<ApiResponse>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let toggle_theme = {
        let themes = themes.clone();
        move |theme: TripTheme| {
            let themes = themes.clone();
            Callback::from(move |_: Event| {
                let mut selected = (*themes).clone();
                if let Some(index) = selected.iter().position(|t| *t == theme) {
                    selected.remove(index);
                } else {
                    selected.push(theme);
                }
                themes.set(selected);
            })
        }
    };

    let on_submit = {
        let (origin, destination) = (origin.clone(), destination.clone());
        let (start_date, end_date) = (start_date.clone(), end_date.clone());
        let (travelers, budget, themes) = (travelers.clone(), budget.clone(), themes.clone());
        let (response, error, loading) = (response.clone(), error.clone(), loading.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = (|| -> Result<TripRequest, String> {
                Ok(TripRequest {
                    origin: (*origin).clone(),
                    destination: (*destination).clone(),
                    start_date: parse_date("Start date", &start_date)?,
                    end_date: parse_date("End date", &end_date)?,
                    travelers: parse_number("Travelers", &travelers)?,
                    budget: parse_number("Budget", &budget)?,
                    themes: (*themes).clone(),
                })
            })();

            let request = match request {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let (response, error, loading) = (response.clone(), error.clone(), loading.clone());
            loading.set(true);
            spawn_local(async move {
                match api::plan_trip(&request).await {
                    Ok(result) => {
                        error.set(None);
                        response.set(Some(result));
                    }
                    Err(message) => {
                        error.set(Some(message));
                        response.set(None);
                    }
                }
                loading.set(false);
            });
        })
    };

    let plan = (*response)
        .as_ref()
        .filter(|r| r.is_success())
        .and_then(|r| serde_json::from_value::<TripPlan>(r.body.clone()).ok());

    html! {
        <div class="planner">
            <form class="form" onsubmit={on_submit}>
                <input type="text" placeholder="Origin" value={(*origin).clone()} oninput={bind_input(&origin)} />
                <input type="text" placeholder="Destination" value={(*destination).clone()} oninput={bind_input(&destination)} />
                <input type="date" value={(*start_date).clone()} oninput={bind_input(&start_date)} />
                <input type="date" value={(*end_date).clone()} oninput={bind_input(&end_date)} />
                <input type="number" min="1" placeholder="Travelers" value={(*travelers).clone()} oninput={bind_input(&travelers)} />
                <input type="number" min="0" placeholder="Budget" value={(*budget).clone()} oninput={bind_input(&budget)} />
                <div class="themes">
                    { for TripTheme::ALL.into_iter().map(|theme| html! {
                        <label>
                            <input
                                type="checkbox"
                                checked={themes.contains(&theme)}
                                onchange={toggle_theme(theme)}
                            />
                            {theme.as_str()}
                        </label>
                    }) }
                </div>
                <button type="submit" disabled={*loading}>
                    {if *loading { "Planning..." } else { "Plan trip" }}
                </button>
            </form>
            if let Some(plan) = plan {
                <TripCard {plan} />
            }
            <ResponseView response={(*response).clone()} error={(*error).clone()} />
        </div>
    }
}
