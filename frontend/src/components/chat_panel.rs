use trip_planner_lib::chat::{ChatContext, ChatReply, ChatRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, response_view::ResponseView};
use crate::api::{self, ApiResponse};

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_user: bool,
    text: String,
}

#[function_component]
pub fn ChatPanel() -> Html {
    let message = use_state(String::new);
    let destination = use_state(String::new);
    let conversation_id = use_state(|| None::<String>);
    let history = use_state(Vec::<ChatLine>::new);
    let response = use_state(|| None::<ApiResponse>);
    let error = use_state(|| None::<String>);

    let on_send = {
        let (message, destination) = (message.clone(), destination.clone());
        let (conversation_id, history) = (conversation_id.clone(), history.clone());
        let (response, error) = (response.clone(), error.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let text = (*message).clone();
            let destination = Some(destination.trim().to_string()).filter(|d| !d.is_empty());
            let request = ChatRequest::new(text.clone()).with_context(ChatContext {
                conversation_id: (*conversation_id).clone(),
                destination,
                language: None,
            });
            message.set(String::new());

            let mut lines = (*history).clone();
            lines.push(ChatLine { from_user: true, text });
            history.set(lines.clone());

            let (conversation_id, history) = (conversation_id.clone(), history.clone());
            let (response, error) = (response.clone(), error.clone());
            spawn_local(async move {
                match api::chat(&request).await {
                    Ok(result) => {
                        if let Ok(reply) = serde_json::from_value::<ChatReply>(result.body.clone()) {
                            conversation_id.set(Some(reply.conversation_id));
                            lines.push(ChatLine { from_user: false, text: reply.reply });
                            history.set(lines);
                        }
                        error.set(None);
                        response.set(Some(result));
                    }
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <div class="chat">
            <div class="chat-history">
                { for history.iter().map(|line| html! {
                    <div class={if line.from_user { "chat-line user" } else { "chat-line assistant" }}>
                        {line.text.clone()}
                    </div>
                }) }
            </div>
            <form class="form" onsubmit={on_send}>
                <input type="text" placeholder="Destination (optional)" value={(*destination).clone()} oninput={bind_input(&destination)} />
                <input type="text" placeholder="Ask something..." value={(*message).clone()} oninput={bind_input(&message)} />
                <button type="submit">{"Send"}</button>
            </form>
            <ResponseView response={(*response).clone()} error={(*error).clone()} />
        </div>
    }
}
