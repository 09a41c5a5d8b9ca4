//! Update function for the CSV anonymization component.
//!
//! File bytes are read asynchronously with `gloo-file`; every read is tagged
//! by the workflow so only the latest selection lands in the grid. Grid edits
//! go straight to the workflow's editor, and submissions follow the same
//! ticketed round trip as the text form.

use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::model::column::{DataType, SensitivityType};

use crate::api::HttpAnonymizationService;
use crate::components::anonymization::log_settlement;
use crate::workflow::controller::{AnonymizationService, Settlement};
use crate::workflow::csv::CsvWorkflow;
use crate::workflow::editor::ColumnEdit;
use crate::workflow::request::SelectedFile;

use super::helpers::{download_text, parse_choice, EXPORT_FILE_NAME};
use super::messages::Msg;
use super::state::CsvAnonymizationComponent;

pub fn update(
    component: &mut CsvAnonymizationComponent,
    ctx: &Context<CsvAnonymizationComponent>,
    msg: Msg,
) -> bool {
    let workflow = &mut component.workflow;
    match msg {
        Msg::FileSelected(None) => {
            workflow.clear_file();
            true
        }
        Msg::FileSelected(Some(file)) => {
            let read = workflow.begin_file_read();
            let name = file.name();
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => link.send_message(Msg::FileLoaded { read, name, bytes }),
                    Err(err) => link.send_message(Msg::FileReadFailed {
                        read,
                        reason: err.to_string(),
                    }),
                }
            });
            false
        }
        Msg::FileLoaded { read, name, bytes } => {
            workflow.finish_file_read(read, SelectedFile { name, bytes })
        }
        Msg::FileReadFailed { read, reason } => {
            gloo_console::error!(format!("Could not read the selected file: {}", reason));
            workflow.abandon_file_read(read)
        }
        Msg::EditDataType { column, value } => {
            let edit = ColumnEdit::DataType(parse_choice::<DataType>(&value));
            apply_edit(workflow, &column, edit)
        }
        Msg::EditSensitivity { column, value } => {
            let edit = ColumnEdit::SensitivityType(parse_choice::<SensitivityType>(&value));
            apply_edit(workflow, &column, edit)
        }
        Msg::Submit => {
            let Some((ticket, request)) = workflow.prepare_submit() else {
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
            let settlement = workflow.apply(ticket, outcome);
            log_settlement("csv", &settlement);
            !matches!(settlement, Settlement::Stale)
        }
        Msg::Export => {
            let Some(table) = workflow.result() else {
                return false;
            };
            let exported = table
                .to_csv()
                .map_err(|err| err.to_string())
                .and_then(|contents| {
                    download_text(EXPORT_FILE_NAME, "text/csv", &contents)
                        .map_err(|err| format!("{:?}", err))
                });
            if let Err(reason) = exported {
                gloo_console::error!(format!("Export failed: {}", reason));
            }
            false
        }
    }
}

fn apply_edit(workflow: &mut CsvWorkflow, column: &str, edit: ColumnEdit) -> bool {
    match workflow.edit(column, edit) {
        Ok(()) => true,
        Err(err) => {
            gloo_console::warn!(err.to_string());
            false
        }
    }
}
