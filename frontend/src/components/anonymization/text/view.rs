use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TextAnonymizationComponent;

pub fn view(component: &TextAnonymizationComponent, ctx: &Context<TextAnonymizationComponent>) -> Html {
    let link = ctx.link();
    let workflow = &component.workflow;

    html! {
        <div class="workflow">
            <form
                class="card"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <label for="text">{"Text"}</label>
                <textarea
                    id="text"
                    placeholder="Enter text to anonymize"
                    rows="5"
                    value={workflow.text().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateText(input.value())
                    })}
                />
                <div class="actions">
                    <button type="submit" disabled={!workflow.can_submit()}>{"Anonymize"}</button>
                </div>
            </form>
            <div class="card">
                <label for="anonymized-text">{"Anonymized Text"}</label>
                { result_area(component) }
            </div>
        </div>
    }
}

fn result_area(component: &TextAnonymizationComponent) -> Html {
    let workflow = &component.workflow;
    let previous = match workflow.result() {
        Some(text) => html! {
            <textarea id="anonymized-text" readonly=true rows="5" value={text.to_string()} />
        },
        None if workflow.is_submitting() => html! {},
        None => html! { <p class="hint">{"The anonymized text will appear here."}</p> },
    };

    html! {
        <>
            if workflow.is_submitting() {
                <p class="hint">{"Loading..."}</p>
            }
            { previous }
        </>
    }
}
