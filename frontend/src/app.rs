//! Root component: mode selector, shared error banner and the active
//! workflow.
//!
//! Switching modes swaps the keyed workflow component, which destroys the
//! previous one and with it any claim its in-flight request had on the UI.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::config::ClientConfig;

use crate::api::fetch_client_config;
use crate::components::anonymization::csv::CsvAnonymizationComponent;
use crate::components::anonymization::error_banner::ErrorBanner;
use crate::components::anonymization::selector::ModeSelectorComponent;
use crate::components::anonymization::text::TextAnonymizationComponent;
use crate::workflow::error_channel::ErrorChannel;
use crate::workflow::mode::{Mode, ModeSelector};

pub enum Msg {
    SelectMode(Mode),
    ErrorChanged,
    DismissError,
    ConfigLoaded(ClientConfig),
}

pub struct App {
    selector: ModeSelector,
    errors: ErrorChannel,
    config: ClientConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let errors = ErrorChannel::with_listener(move || link.send_message(Msg::ErrorChanged));
        Self {
            selector: ModeSelector::default(),
            errors,
            config: ClientConfig::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectMode(mode) => self.selector.select(mode),
            Msg::ErrorChanged => true,
            Msg::DismissError => {
                self.errors.clear();
                false
            }
            Msg::ConfigLoaded(config) => {
                let changed = self.config != config;
                self.config = config;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let service_base_url = AttrValue::from(self.config.service_base_url.clone());
        let errors = self.errors.clone();

        html! {
            <div class="app">
                <header>
                    <h1>{"Data Anonymization Tool"}</h1>
                </header>
                <ModeSelectorComponent
                    selected={self.selector.active()}
                    on_select={link.callback(Msg::SelectMode)}
                />
                if let Some(message) = self.errors.current() {
                    <ErrorBanner
                        message={message}
                        on_dismiss={link.callback(|_| Msg::DismissError)}
                    />
                }
                <main>
                    {
                        match self.selector.active() {
                            Mode::Text => html! {
                                <TextAnonymizationComponent key="text" {service_base_url} {errors} />
                            },
                            Mode::Csv => html! {
                                <CsvAnonymizationComponent key="csv" {service_base_url} {errors} />
                            },
                        }
                    }
                </main>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ConfigLoaded(fetch_client_config().await));
            });
        }
    }
}
