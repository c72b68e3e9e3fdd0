use trip_planner_lib::payment::{PaymentIntentRequest, PaymentMethod};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, bind_select, response_view::ResponseView};
use crate::api::{self, ApiResponse};

const METHODS: [(&str, PaymentMethod); 5] = [
    ("upi", PaymentMethod::Upi),
    ("credit_card", PaymentMethod::CreditCard),
    ("debit_card", PaymentMethod::DebitCard),
    ("net_banking", PaymentMethod::NetBanking),
    ("wallet", PaymentMethod::Wallet),
];

/// Converts an amount typed in major units ("1250.50") into minor units.
fn to_minor_units(amount: &str) -> Result<Option<u64>, String> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Ok(None);
    }
    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some((value * 100.0).round() as u64)),
        _ => Err("Amount must be a positive number".to_string()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

#[function_component]
pub fn PaymentPanel() -> Html {
    let amount = use_state(String::new);
    let currency = use_state(|| "INR".to_string());
    let booking_id = use_state(String::new);
    let method = use_state(String::new);
    let response = use_state(|| None::<ApiResponse>);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let (amount, currency, booking_id, method) =
            (amount.clone(), currency.clone(), booking_id.clone(), method.clone());
        let (response, error) = (response.clone(), error.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let amount = match to_minor_units(&amount) {
                Ok(amount) => amount,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let request = PaymentIntentRequest {
                amount,
                currency: non_empty(&currency),
                booking_id: non_empty(&booking_id),
                payment_method: METHODS.iter().find(|(name, _)| *name == *method).map(|(_, m)| *m),
                description: None,
            };

            let (response, error) = (response.clone(), error.clone());
            spawn_local(async move {
                match api::create_payment_intent(&request).await {
                    Ok(result) => {
                        error.set(None);
                        response.set(Some(result));
                    }
                    Err(message) => {
                        error.set(Some(message));
                        response.set(None);
                    }
                }
            });
        })
    };

    html! {
        <div class="payment">
            <form class="form" onsubmit={on_submit}>
                <input type="text" placeholder="Amount (e.g. 1250.50)" value={(*amount).clone()} oninput={bind_input(&amount)} />
                <input type="text" placeholder="Currency" value={(*currency).clone()} oninput={bind_input(&currency)} />
                <input type="text" placeholder="Booking id" value={(*booking_id).clone()} oninput={bind_input(&booking_id)} />
                <select onchange={bind_select(&method)}>
                    <option value="" selected={method.is_empty()}>{"No payment method"}</option>
                    { for METHODS.iter().map(|(name, _)| html! {
                        <option value={*name} selected={*method == *name}>{*name}</option>
                    }) }
                </select>
                <button type="submit">{"Create payment intent"}</button>
            </form>
            <ResponseView response={(*response).clone()} error={(*error).clone()} />
        </div>
    }
}
