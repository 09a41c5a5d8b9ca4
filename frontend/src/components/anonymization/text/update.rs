//! Update function for the text anonymization form.
//!
//! Submissions run on `spawn_local`; their outcome comes back as
//! `Msg::Settled` carrying the ticket issued at submit time, so a response
//! for a superseded or torn-down form is dropped by the workflow.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::HttpAnonymizationService;
use crate::components::anonymization::log_settlement;
use crate::workflow::controller::{AnonymizationService, Settlement};

use super::messages::Msg;
use super::state::TextAnonymizationComponent;

pub fn update(
    component: &mut TextAnonymizationComponent,
    ctx: &Context<TextAnonymizationComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateText(text) => {
            component.workflow.set_text(text);
            true
        }
        Msg::Submit => {
            let Some((ticket, request)) = component.workflow.prepare_submit() else {
                return false;
            };
            let service = HttpAnonymizationService::new(ctx.props().service_base_url.to_string());
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = service.send(&request).await;
                link.send_message(Msg::Settled(ticket, outcome));
            });
            true
        }
        Msg::Settled(ticket, outcome) => {
            let settlement = component.workflow.apply(ticket, outcome);
            log_settlement("text", &settlement);
            !matches!(settlement, Settlement::Stale)
        }
    }
}
