use components::{chat_panel::ChatPanel, payment_panel::PaymentPanel, trip_planner::TripPlanner};
use gloo_console::info;
use yew::prelude::*;

mod api;
mod components;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Planner,
    Chat,
    Payment,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Planner, Tab::Chat, Tab::Payment];

    fn label(&self) -> &'static str {
        match self {
            Tab::Planner => "Trip planner",
            Tab::Chat => "Chat",
            Tab::Payment => "Payment",
        }
    }
}

enum MainMsg {
    SelectTab(Tab),
}

struct Model {
    active_tab: Tab,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        info!(format!("Using API at {}", api::api_base_url()));

        Self {
            active_tab: Tab::Planner,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::SelectTab(tab) => {
                if self.active_tab == tab {
                    return false;
                }
                info!(format!("Selected tab: {:?}", tab));
                self.active_tab = tab;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="dashboard">
                <header>
                    <h1>{"Trip Planner"}</h1>
                    <span class="api-base">{format!("API: {}", api::api_base_url())}</span>
                </header>
                <div class="tabs">
                    { for Tab::ALL.into_iter().map(|tab| html! {
                        <button
                            class={if tab == self.active_tab { "active" } else { "" }}
                            onclick={link.callback(move |_| MainMsg::SelectTab(tab))}
                        >
                            {tab.label()}
                        </button>
                    }) }
                </div>
                <div class="tab-content">
                    {match self.active_tab {
                        Tab::Planner => html! { <TripPlanner /> },
                        Tab::Chat => html! { <ChatPanel /> },
                        Tab::Payment => html! { <PaymentPanel /> },
                    }}
                </div>
            </div>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
