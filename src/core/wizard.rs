// src/core/wizard.rs

//! The scan-configuration wizard as an explicit state machine.
//!
//! Three linear steps (type selection, target & options, review) accumulate
//! a `ScanRequest` which is submitted once. Every transition is a plain
//! method on `Wizard`, so the whole flow is unit-testable without a
//! terminal, an event loop, or a network. The UI layer only reads the state
//! and forwards key presses into these methods; submission results come
//! back in through `resolve_submit`.

use crate::core::catalog;
use crate::core::models::{Depth, ScanOptions, ScanRequest, ScanType};

/// The three visible wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectType,
    ConfigureTarget,
    Review,
}

/// Submission lifecycle. `InFlight` doubles as the re-entry guard: while a
/// request is outstanding the submit action is disabled, so a scan can
/// never be posted twice from the same review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    InFlight,
    /// Terminal. The backend accepted the scan and returned its id; the
    /// caller navigates to the scan-detail view and discards the wizard.
    Done { scan_id: String },
}

/// Which field owns keystrokes on the configure step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Target,
    Tools,
    Depth,
    Timeout,
    Concurrent,
}

impl ConfigField {
    pub fn next(self) -> Self {
        match self {
            ConfigField::Target => ConfigField::Tools,
            ConfigField::Tools => ConfigField::Depth,
            ConfigField::Depth => ConfigField::Timeout,
            ConfigField::Timeout => ConfigField::Concurrent,
            ConfigField::Concurrent => ConfigField::Target,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ConfigField::Target => ConfigField::Concurrent,
            ConfigField::Tools => ConfigField::Target,
            ConfigField::Depth => ConfigField::Tools,
            ConfigField::Timeout => ConfigField::Depth,
            ConfigField::Concurrent => ConfigField::Timeout,
        }
    }
}

/// Raw option inputs as typed by the user. Timeout and concurrency stay
/// text until submission, when `parse_options` turns them into positive
/// integers or blocks the submit with a field error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsForm {
    pub depth: Depth,
    pub timeout: String,
    pub concurrent: String,
}

impl Default for OptionsForm {
    fn default() -> Self {
        Self {
            depth: Depth::Normal,
            timeout: "300".to_string(),
            concurrent: "10".to_string(),
        }
    }
}

/// The wizard state. Created fresh when the new-scan view is entered and
/// discarded when it is left; it is never reused after a successful submit.
#[derive(Debug, Clone)]
pub struct Wizard {
    pub step: WizardStep,
    pub scan_type: Option<ScanType>,
    pub target: String,
    pub tools: Vec<String>,
    pub options: OptionsForm,
    pub submit: SubmitState,
    /// User-visible message from a failed submission or invalid options.
    pub error: Option<String>,
    // Cursor state for the UI; never affects transition semantics.
    pub type_cursor: usize,
    pub tool_cursor: usize,
    pub focus: ConfigField,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectType,
            scan_type: None,
            target: String::new(),
            tools: Vec::new(),
            options: OptionsForm::default(),
            submit: SubmitState::Idle,
            error: None,
            type_cursor: 0,
            tool_cursor: 0,
            focus: ConfigField::Target,
        }
    }

    /// Sets the scan type and resets the tool selection to that type's full
    /// default set. This is a deliberate reset, not a merge: prior manual
    /// tool edits are discarded whenever the type changes.
    pub fn select_type(&mut self, scan_type: ScanType) {
        self.scan_type = Some(scan_type);
        self.tools = catalog::default_tools(scan_type);
        self.tool_cursor = 0;
    }

    /// Toggles one tool in or out of the selection. Only tools from the
    /// chosen type's catalog set can be present.
    pub fn toggle_tool(&mut self, tool: &str) {
        if let Some(pos) = self.tools.iter().position(|t| t == tool) {
            self.tools.remove(pos);
        } else if let Some(scan_type) = self.scan_type {
            if catalog::info_for(scan_type).default_tools.contains(&tool) {
                self.tools.push(tool.to_string());
            }
        }
    }

    /// Whether the Next action is enabled for the current step. Submission
    /// from the review step has its own predicate, `can_submit`.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::SelectType => self.scan_type.is_some(),
            WizardStep::ConfigureTarget => !self.target.trim().is_empty(),
            WizardStep::Review => false,
        }
    }

    /// Advances one step. A no-op when the step's requirement is unmet, so
    /// invoking it programmatically with missing fields cannot skip ahead.
    pub fn next(&mut self) {
        if !self.can_advance() {
            return;
        }
        self.step = match self.step {
            WizardStep::SelectType => WizardStep::ConfigureTarget,
            WizardStep::ConfigureTarget => WizardStep::Review,
            WizardStep::Review => WizardStep::Review,
        };
    }

    /// Returns to the previous step without clearing any accumulated field.
    /// Disabled while a submission is in flight.
    pub fn back(&mut self) {
        if self.submit == SubmitState::InFlight {
            return;
        }
        self.step = match self.step {
            WizardStep::SelectType => WizardStep::SelectType,
            WizardStep::ConfigureTarget => WizardStep::SelectType,
            WizardStep::Review => WizardStep::ConfigureTarget,
        };
    }

    /// The submit predicate: review step, type chosen, non-empty target, at
    /// least one tool, and nothing already in flight or finished. Enabling
    /// is a pure function of this state.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Review
            && self.scan_type.is_some()
            && !self.target.trim().is_empty()
            && !self.tools.is_empty()
            && self.submit == SubmitState::Idle
    }

    /// Parses the text option fields into typed values. Non-numeric, zero
    /// or overflowing input rejects the submission rather than clamping.
    pub fn parse_options(&self) -> Result<ScanOptions, String> {
        let timeout_secs = parse_positive(&self.options.timeout, "Timeout")?;
        let concurrency = parse_positive(&self.options.concurrent, "Concurrent scans")?;
        Ok(ScanOptions {
            depth: self.options.depth,
            timeout_secs,
            concurrency,
        })
    }

    /// Starts a submission. Returns the request snapshot to post, or `None`
    /// when the action is disabled or the options fail validation — in both
    /// cases no request must be sent. On success the wizard is `InFlight`
    /// until `resolve_submit` is called.
    pub fn begin_submit(&mut self) -> Option<ScanRequest> {
        if !self.can_submit() {
            return None;
        }
        let scan_type = self.scan_type?;
        let options = match self.parse_options() {
            Ok(options) => options,
            Err(message) => {
                self.error = Some(message);
                return None;
            }
        };
        self.error = None;
        self.submit = SubmitState::InFlight;
        Some(ScanRequest {
            scan_type,
            target: self.target.trim().to_string(),
            tools: self.tools.clone(),
            options,
        })
    }

    /// Applies the outcome of the in-flight submission. Success is
    /// terminal; failure returns to an editable review step with every
    /// field intact and the submit action re-enabled. Outcomes arriving
    /// when nothing is in flight (e.g. after the wizard was rebuilt) are
    /// dropped.
    pub fn resolve_submit(&mut self, result: Result<String, String>) {
        if self.submit != SubmitState::InFlight {
            return;
        }
        match result {
            Ok(scan_id) => {
                self.submit = SubmitState::Done { scan_id };
                self.error = None;
            }
            Err(message) => {
                self.submit = SubmitState::Idle;
                self.error = Some(message);
            }
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_positive(input: &str, field: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{field} must be a positive integer")),
    }
}
