//! Canonical demo script data model.
//!
//! A script is the fixed, ordered list of stages a guided demo walks
//! through. It is authored statically per screen, validated once at
//! construction, and never mutated afterwards; players share it by `Arc`.

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

/// A single stage of a guided demo.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StepDefinition {
    pub id: String,
    /// Short display title (e.g. "Risk Score Calculated").
    pub title: String,
    pub description: String,
    /// Time the player stays on this step during autoplay, in milliseconds.
    /// Must be positive.
    #[serde(rename = "duration")]
    pub duration_ms: u32,
    /// Opaque render data passed through to the screen, never interpreted
    /// by the player.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// An ordered, validated step sequence for one demo screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DemoScript {
    pub name: String,
    pub steps: Vec<StepDefinition>,
}

impl DemoScript {
    /// Build a script, rejecting sequences a player could not traverse.
    pub fn new(name: impl Into<String>, steps: Vec<StepDefinition>) -> Result<Self, ScriptError> {
        let script = Self {
            name: name.into(),
            steps,
        };
        script.validate_basic()?;
        Ok(script)
    }

    /// Validate basic invariants (at least one step, positive durations).
    pub fn validate_basic(&self) -> Result<(), ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::EmptyScript {
                name: self.name.clone(),
            });
        }
        for (index, step) in self.steps.iter().enumerate() {
            if step.duration_ms == 0 {
                return Err(ScriptError::ZeroDuration {
                    index,
                    title: step.title.clone(),
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    /// Index of the final step. Valid because construction rejects empty
    /// sequences.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Sum of all step durations in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.duration_ms)).sum()
    }
}
