use serde::{Deserialize, Serialize};

/// Multiple-choice questions always carry four options.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice item as produced by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: String,
}

impl Question {
    /// A question is usable when it carries exactly four options and
    /// `correct_answer` points at one of them.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_COUNT
            && self.correct_answer >= 0
            && (self.correct_answer as usize) < self.options.len()
    }
}
