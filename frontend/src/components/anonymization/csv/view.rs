use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::column::{Classification, ColumnDescriptor, DataType, SensitivityType};

use crate::workflow::presenter::TablePresentation;

use super::helpers::choice_value;
use super::messages::Msg;
use super::state::CsvAnonymizationComponent;

pub fn view(component: &CsvAnonymizationComponent, ctx: &Context<CsvAnonymizationComponent>) -> Html {
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
                <label for="csv-file">{"CSV file"}</label>
                <input
                    id="csv-file"
                    type="file"
                    accept=".csv"
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
                    })}
                />
                { metadata_grid(component, ctx) }
                <div class="actions">
                    <button type="submit" disabled={!workflow.can_submit()}>{"Anonymize"}</button>
                </div>
            </form>
            <div class="card">
                <h3>{"Anonymized Data"}</h3>
                { result_grid(component, ctx) }
            </div>
        </div>
    }
}

fn metadata_grid(component: &CsvAnonymizationComponent, ctx: &Context<CsvAnonymizationComponent>) -> Html {
    let workflow = &component.workflow;
    if workflow.file().is_none() {
        return html! {};
    }
    if workflow.columns().is_empty() {
        return html! { <p class="hint">{"No columns detected"}</p> };
    }

    let unclassified: Vec<&str> = workflow.editor().unclassified().collect();
    html! {
        <>
            <table class="grid metadata-grid">
                <thead>
                    <tr>
                        <th>{"Column"}</th>
                        <th>{"Data type"}</th>
                        <th>{"Sensitivity"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for workflow.columns().iter().map(|column| metadata_row(column, ctx)) }
                </tbody>
            </table>
            if !unclassified.is_empty() {
                <p class="hint">
                    { format!("Not yet classified: {}", unclassified.join(", ")) }
                </p>
            }
        </>
    }
}

fn metadata_row(column: &ColumnDescriptor, ctx: &Context<CsvAnonymizationComponent>) -> Html {
    let link = ctx.link();
    let name = column.name.clone();
    let on_data_type = {
        let name = name.clone();
        link.callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::EditDataType {
                column: name.clone(),
                value: select.value(),
            }
        })
    };
    let on_sensitivity = {
        let name = name.clone();
        link.callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::EditSensitivity {
                column: name.clone(),
                value: select.value(),
            }
        })
    };

    html! {
        <tr key={name.clone()}>
            <td>{ column.name.clone() }</td>
            <td>{ options::<DataType>(column.data_type, on_data_type) }</td>
            <td>{ options::<SensitivityType>(column.sensitivity_type, on_sensitivity) }</td>
        </tr>
    }
}

fn options<T: Classification>(current: Option<T>, onchange: Callback<Event>) -> Html {
    let selected = choice_value(current);
    html! {
        <select {onchange}>
            <option value="" selected={selected.is_empty()}>{"(not set)"}</option>
            { for T::ALL.iter().map(|value| {
                let value = value.as_str();
                html! { <option {value} selected={value == selected}>{ value }</option> }
            }) }
        </select>
    }
}

fn result_grid(component: &CsvAnonymizationComponent, ctx: &Context<CsvAnonymizationComponent>) -> Html {
    let workflow = &component.workflow;
    let loading = if workflow.is_submitting() {
        html! { <p class="hint">{"Loading..."}</p> }
    } else {
        html! {}
    };

    let previous = match workflow.result() {
        None if workflow.is_submitting() => html! {},
        None => html! { <p class="hint">{"The anonymized rows will appear here."}</p> },
        Some(table) if table.is_empty() => html! { <p class="hint">{"No rows returned."}</p> },
        Some(table) => table_view(table, ctx),
    };

    html! {
        <>
            { loading }
            { previous }
        </>
    }
}

fn table_view(table: &TablePresentation, ctx: &Context<CsvAnonymizationComponent>) -> Html {
    html! {
        <>
            <div class="grid-toolbar">
                <span>{ table.row_count_label() }</span>
                <button type="button" onclick={ctx.link().callback(|_: MouseEvent| Msg::Export)}>
                    {"Export CSV"}
                </button>
            </div>
            <table class="grid result-grid">
                <thead>
                    <tr>
                        { for table.columns.iter().map(|column| html! { <th>{ column.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows.iter().map(|row| html! {
                        <tr key={row.id}>
                            { for table.columns.iter().map(|column| html! {
                                <td>{ TablePresentation::cell_text(row, column) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}
