use crate::workflow::csv::CsvWorkflow;
use crate::workflow::error_channel::ErrorChannel;

pub struct CsvAnonymizationComponent {
    pub workflow: CsvWorkflow,
}

impl CsvAnonymizationComponent {
    pub fn new(errors: ErrorChannel) -> Self {
        Self {
            workflow: CsvWorkflow::new(errors),
        }
    }
}
