use yew::prelude::*;

use crate::api::ApiResponse;

#[derive(Properties, PartialEq)]
pub struct ResponseProps {
    pub response: Option<ApiResponse>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Status line and pretty printed JSON of the last call.
#[function_component]
pub fn ResponseView(props: &ResponseProps) -> Html {
    html! { <>
        if let Some(error) = &props.error {
            <div class="error">{error.clone()}</div>
        }
        if let Some(response) = &props.response {
            <div class={if response.is_success() { "status ok" } else { "status error" }}>
                {format!("HTTP {}", response.status)}
            </div>
            <pre class="response">{response.pretty_body()}</pre>
        }
    </> }
}
