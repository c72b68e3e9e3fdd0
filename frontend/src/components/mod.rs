use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub mod chat_panel;
pub mod itinerary_card;
pub mod payment_panel;
pub mod response_view;
pub mod trip_planner;

/// Callback that copies the value of a text input into a state handle.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}
