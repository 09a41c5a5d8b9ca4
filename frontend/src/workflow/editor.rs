//! User-revisable classification state for the columns of the selected file.

use common::model::column::{ColumnDescriptor, DataType, SensitivityType};
use thiserror::Error;

/// A single field change coming from the metadata grid. `None` clears the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEdit {
    DataType(Option<DataType>),
    SensitivityType(Option<SensitivityType>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no column named '{0}'")]
    UnknownColumn(String),
    #[error("column '{from}' cannot be renamed to '{to}'")]
    RenameRejected { from: String, to: String },
}

/// Holds the descriptor list shown in the grid. The list is only ever
/// replaced as a whole (new file) or edited one field at a time; names are
/// fixed once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMetadataEditor {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnMetadataEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Discards the current list in favour of a freshly extracted one.
    pub fn replace_all(&mut self, columns: Vec<ColumnDescriptor>) {
        self.columns = columns;
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Applies `edit` to the descriptor called `name`, leaving every other
    /// descriptor and the list order untouched.
    pub fn update(&mut self, name: &str, edit: ColumnEdit) -> Result<(), EditError> {
        let mut row = self
            .get(name)
            .cloned()
            .ok_or_else(|| EditError::UnknownColumn(name.to_string()))?;

        match edit {
            ColumnEdit::DataType(value) => row.data_type = value,
            ColumnEdit::SensitivityType(value) => row.sensitivity_type = value,
        }
        self.update_row(name, row)
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Replaces the descriptor keyed by `original_name` with a whole edited row,
    /// as a grid row commit does. The row may not carry a different name.
    pub fn update_row(&mut self, original_name: &str, row: ColumnDescriptor) -> Result<(), EditError> {
        if row.name != original_name {
            return Err(EditError::RenameRejected {
                from: original_name.to_string(),
                to: row.name,
            });
        }
        let slot = self
            .columns
            .iter_mut()
            .find(|column| column.name == original_name)
            .ok_or_else(|| EditError::UnknownColumn(original_name.to_string()))?;
        *slot = row;
        Ok(())
    }

    /// Names of columns still missing a data type or sensitivity type.
    /// Informational only: partially classified lists may still be submitted.
    pub fn unclassified(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|column| !column.is_classified())
            .map(|column| column.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::extractor::extract_columns;

    fn editor_for(header: &str) -> ColumnMetadataEditor {
        let mut editor = ColumnMetadataEditor::new();
        editor.replace_all(extract_columns(header));
        editor
    }

    #[test]
    fn editing_one_column_leaves_the_others_alone() {
        let mut editor = editor_for("a,b,c");
        editor.update("a", ColumnEdit::DataType(Some(DataType::Number))).unwrap();
        let before = editor.columns().to_vec();

        editor
            .update("b", ColumnEdit::SensitivityType(Some(SensitivityType::Sensitive)))
            .unwrap();

        let after = editor.columns();
        let names: Vec<&str> = after.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].sensitivity_type, Some(SensitivityType::Sensitive));
        assert_eq!(after[1].data_type, None);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut editor = editor_for("a,b");
        let err = editor
            .update("z", ColumnEdit::DataType(Some(DataType::Date)))
            .unwrap_err();
        assert_eq!(err, EditError::UnknownColumn("z".to_string()));
    }

    #[test]
    fn row_edits_cannot_rename() {
        let mut editor = editor_for("a,b");
        let err = editor
            .update_row("a", ColumnDescriptor::unclassified("renamed"))
            .unwrap_err();
        assert!(matches!(err, EditError::RenameRejected { .. }));
        assert_eq!(editor.columns()[0].name, "a");
    }

    #[test]
    fn row_edit_replaces_classification() {
        let mut editor = editor_for("id,dob");
        let row = ColumnDescriptor {
            name: "dob".to_string(),
            data_type: Some(DataType::Date),
            sensitivity_type: Some(SensitivityType::QuasiIdentifier),
        };
        editor.update_row("dob", row.clone()).unwrap();
        assert_eq!(editor.columns()[1], row);
    }

    #[test]
    fn clearing_a_value_makes_the_column_unclassified_again() {
        let mut editor = editor_for("a");
        editor.update("a", ColumnEdit::DataType(Some(DataType::String))).unwrap();
        editor
            .update("a", ColumnEdit::SensitivityType(Some(SensitivityType::Insensitive)))
            .unwrap();
        assert_eq!(editor.unclassified().count(), 0);

        editor.update("a", ColumnEdit::DataType(None)).unwrap();
        assert_eq!(editor.unclassified().collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn replacing_the_list_drops_previous_edits() {
        let mut editor = editor_for("a,b");
        editor.update("a", ColumnEdit::DataType(Some(DataType::Date))).unwrap();
        editor.replace_all(extract_columns("a,c"));
        assert!(editor.columns().iter().all(|c| c.data_type.is_none()));
        assert_eq!(editor.columns()[1].name, "c");
    }
}
