use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Shows the current error until the user dismisses it or a new submission
/// starts.
pub struct ErrorBanner;

impl Component for ErrorBanner {
    type Message = ();
    type Properties = ErrorBannerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ErrorBanner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_dismiss = props.on_dismiss.reform(|_: MouseEvent| ());
        html! {
            <div class="error-banner" role="alert">
                <span>{ props.message.clone() }</span>
                <button type="button" class="icon-btn" title="Close" onclick={on_dismiss}>
                    <i class="material-icons">{"close"}</i>
                </button>
            </div>
        }
    }
}
