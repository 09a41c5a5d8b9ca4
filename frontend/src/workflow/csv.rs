use std::rc::Rc;

use common::model::column::ColumnDescriptor;
use common::responses::ServiceResponse;

use super::controller::{Expected, Settlement, SubmissionController, Ticket, TransportError};
use super::editor::{ColumnEdit, ColumnMetadataEditor, EditError};
use super::error_channel::ErrorChannel;
use super::extractor::extract_columns_from_bytes;
use super::presenter::TablePresentation;
use super::request::{AnonymizationRequest, SelectedFile};

/// Tags an asynchronous file read so only the most recent one is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRead(u64);

/// CSV submission instance: selected file, column classification and the
/// last presented result.
#[derive(Debug)]
pub struct CsvWorkflow {
    file: Option<Rc<SelectedFile>>,
    editor: ColumnMetadataEditor,
    result: Option<TablePresentation>,
    controller: SubmissionController,
    reads_started: u64,
}

impl CsvWorkflow {
    pub fn new(errors: ErrorChannel) -> Self {
        Self {
            file: None,
            editor: ColumnMetadataEditor::new(),
            result: None,
            controller: SubmissionController::new(errors),
            reads_started: 0,
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_deref()
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        self.editor.columns()
    }

    pub fn editor(&self) -> &ColumnMetadataEditor {
        &self.editor
    }

    pub fn result(&self) -> Option<&TablePresentation> {
        self.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Call when the user picks a file, before its bytes are read.
    pub fn begin_file_read(&mut self) -> FileRead {
        self.reads_started += 1;
        FileRead(self.reads_started)
    }

    /// Installs the file and replaces the descriptor list in full. Returns
    /// `false` and changes nothing when a newer read has been started since.
    pub fn finish_file_read(&mut self, read: FileRead, file: SelectedFile) -> bool {
        if read != FileRead(self.reads_started) {
            return false;
        }
        self.editor.replace_all(extract_columns_from_bytes(&file.bytes));
        self.file = Some(Rc::new(file));
        true
    }

    /// The bytes of `read` could not be loaded. When it is still the latest
    /// read, the previous file is dropped so the grid never shows columns of a
    /// file the user no longer has selected.
    pub fn abandon_file_read(&mut self, read: FileRead) -> bool {
        if read != FileRead(self.reads_started) {
            return false;
        }
        self.file = None;
        self.editor.clear();
        true
    }

    /// The selection was emptied; drops the file and its columns.
    pub fn clear_file(&mut self) {
        self.reads_started += 1;
        self.file = None;
        self.editor.clear();
    }

    pub fn edit(&mut self, name: &str, edit: ColumnEdit) -> Result<(), EditError> {
        self.editor.update(name, edit)
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.controller.is_submitting()
    }

    pub fn prepare_submit(&mut self) -> Option<(Ticket, AnonymizationRequest)> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        let ticket = self.controller.begin()?;
        Some((ticket, AnonymizationRequest::csv(file, self.editor.columns())))
    }

    pub fn apply(
        &mut self,
        ticket: Ticket,
        outcome: Result<ServiceResponse, TransportError>,
    ) -> Settlement {
        let settlement = self.controller.settle(ticket, outcome, Expected::Table);
        if let Settlement::Succeeded(ServiceResponse::TableResult(rows)) = &settlement {
            self.result = Some(TablePresentation::from_rows(rows.clone()));
        }
        settlement
    }

    pub fn deactivate(&mut self) {
        self.controller.deactivate();
    }
}
