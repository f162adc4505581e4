//! Scheduled reply scripts.

use std::time::Duration;

use advisor_core::conversation::ChatMessage;

/// One scripted message, delivered `delay` after the previous step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub delay: Duration,
    pub message: ChatMessage,
}

/// An ordered sequence of delayed messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyScript {
    steps: Vec<ScriptStep>,
}

impl ReplyScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step delivered `delay` after the previous one.
    pub fn then(mut self, delay: Duration, message: ChatMessage) -> Self {
        self.steps.push(ScriptStep { delay, message });
        self
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.steps.iter().map(|step| &step.message)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<ScriptStep> {
        self.steps
    }
}
