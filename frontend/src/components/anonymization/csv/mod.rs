//! CSV anonymization: file picker, column classification grid, and the
//! anonymized rows returned by the service.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

use super::props::WorkflowProps;
pub use messages::Msg;
pub use state::CsvAnonymizationComponent;

impl Component for CsvAnonymizationComponent {
    type Message = Msg;
    type Properties = WorkflowProps;

    fn create(ctx: &Context<Self>) -> Self {
        CsvAnonymizationComponent::new(ctx.props().errors.clone())
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
