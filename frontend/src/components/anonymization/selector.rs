use yew::prelude::*;

use crate::workflow::mode::Mode;

#[derive(Properties, PartialEq)]
pub struct ModeSelectorProps {
    pub selected: Mode,
    pub on_select: Callback<Mode>,
}

/// Toggle between the text and CSV workflows.
pub struct ModeSelectorComponent;

impl Component for ModeSelectorComponent {
    type Message = ();
    type Properties = ModeSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ModeSelectorComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="mode-selector">
                { for Mode::ALL.iter().map(|&mode| {
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            type="button"
                            class={classes!("mode-btn", (props.selected == mode).then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(mode))}
                        >
                            { mode.label() }
                        </button>
                    }
                }) }
            </div>
        }
    }
}
