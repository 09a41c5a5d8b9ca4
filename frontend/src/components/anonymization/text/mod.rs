//! Free-text anonymization: a textarea, a submit button, and the returned
//! text shown read-only.
//!
//! The component owns a `TextWorkflow`; tearing it down (mode switch)
//! deactivates the workflow so a late response cannot touch shared state.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::props::WorkflowProps;
pub use messages::Msg;
pub use state::TextAnonymizationComponent;

impl Component for TextAnonymizationComponent {
    type Message = Msg;
    type Properties = WorkflowProps;

    fn create(ctx: &Context<Self>) -> Self {
        TextAnonymizationComponent::new(ctx.props().errors.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.workflow.deactivate();
    }
}
