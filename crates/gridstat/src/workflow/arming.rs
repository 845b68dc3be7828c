//! Arming gate: a two-state guard against premature computation.
//!
//! A consumer selects its inputs, explicitly arms the gate, and only then may
//! fire the computation. Any change to the selection disarms the gate.

use serde::{Deserialize, Serialize};

use crate::error::{GridstatError, Result};

/// Gate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Unarmed,
    Armed,
}

/// An explicit confirmation gate over a selection of type `S` (for example a
/// column choice, or a chart type plus axis columns).
#[derive(Debug, Clone)]
pub struct ArmingGate<S> {
    selection: Option<S>,
    state: GateState,
}

impl<S> ArmingGate<S> {
    /// A fresh gate: no selection, unarmed.
    pub fn new() -> Self {
        Self {
            selection: None,
            state: GateState::Unarmed,
        }
    }

    /// Replace the selection. Always disarms: the operator must re-arm after
    /// any change.
    pub fn select(&mut self, selection: S) {
        self.selection = Some(selection);
        self.state = GateState::Unarmed;
    }

    /// Drop the selection and disarm.
    pub fn clear(&mut self) {
        self.selection = None;
        self.state = GateState::Unarmed;
    }

    /// Arm the gate. Fails when nothing is selected.
    pub fn arm(&mut self) -> Result<()> {
        if self.selection.is_none() {
            return Err(GridstatError::Validation(
                "Please make a selection before arming".to_string(),
            ));
        }
        self.state = GateState::Armed;
        Ok(())
    }

    /// Access the selection for computation. Only valid while armed.
    pub fn fire(&self) -> Result<&S> {
        match (self.state, self.selection.as_ref()) {
            (GateState::Armed, Some(selection)) => Ok(selection),
            _ => Err(GridstatError::Validation(
                "Please arm before generating results".to_string(),
            )),
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == GateState::Armed
    }
}

impl<S> Default for ArmingGate<S> {
    fn default() -> Self {
        Self::new()
    }
}
