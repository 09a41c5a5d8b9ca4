/// The two workflows the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Text,
    Csv,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Text, Mode::Csv];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Text => "Text Anonymization",
            Mode::Csv => "CSV Anonymization",
        }
    }
}

/// Mutually exclusive selection of the active workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeSelector {
    active: Mode,
}

impl ModeSelector {
    pub fn active(&self) -> Mode {
        self.active
    }

    /// Returns `true` when the active workflow changed. The caller tears down
    /// the previous workflow instance, dropping its edits and results.
    pub fn select(&mut self, mode: Mode) -> bool {
        if self.active == mode {
            return false;
        }
        self.active = mode;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_text_mode_and_reports_changes() {
        let mut selector = ModeSelector::default();
        assert_eq!(selector.active(), Mode::Text);
        assert!(!selector.select(Mode::Text));
        assert!(selector.select(Mode::Csv));
        assert_eq!(selector.active(), Mode::Csv);
    }
}
