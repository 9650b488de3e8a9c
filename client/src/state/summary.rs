//! Summary-builder and decomposer form state.
//!
//! Validation never reaches the network: a draft with blank required fields
//! produces an itemized message naming exactly the missing ones.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// Shown when Decompose is pressed with an empty input.
pub const EMPTY_DECOMPOSE_ERROR: &str = "Please enter Summarized Output to decompose.";

/// The four structured fields of a problem report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryDraft {
    pub problem: String,
    pub impact: String,
    pub root_cause: String,
    pub fix: String,
}

impl SummaryDraft {
    /// Labels of blank required fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.problem.is_empty() {
            missing.push("Problem Statement");
        }
        if self.impact.is_empty() {
            missing.push("Impact of Problem");
        }
        if self.root_cause.is_empty() {
            missing.push("Root Cause");
        }
        if self.fix.is_empty() {
            missing.push("Fix of Problem");
        }
        missing
    }

    /// Itemized validation message, or `None` when every field is filled.
    pub fn validation_message(&self) -> Option<String> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            None
        } else {
            Some(format!(
                "Please fill in the following field(s): {}.",
                missing.join(", ")
            ))
        }
    }
}

/// Summary-builder panel state.
#[derive(Clone, Debug, Default)]
pub struct SummaryState {
    pub draft: SummaryDraft,
    pub result: String,
    pub error: String,
    pub loading: bool,
}

/// Decomposer panel state.
#[derive(Clone, Debug, Default)]
pub struct DecomposeState {
    pub input: String,
    pub fields: SummaryDraft,
    pub error: String,
    pub loading: bool,
}
