//! Pattern-to-handler dispatch for scenario sentences

use log::{debug, trace};
use regex::Regex;

use crate::error::{StepError, StepResult};

/// Handler invoked with the capture groups of its pattern
pub type StepHandler = Box<dyn Fn(&[&str]) -> StepResult<()> + Send + Sync>;

/// Hook invoked when a scenario ends, pass or fail
pub type AfterScenarioHook = Box<dyn Fn() + Send + Sync>;

struct StepBinding {
    pattern: Regex,
    handler: StepHandler,
}

/// Registry of sentence patterns and scenario lifecycle hooks
///
/// Sentences are matched in registration order and the first hit wins, so
/// narrower patterns must be registered before broader ones.
pub struct StepRegistry {
    steps: Vec<StepBinding>,
    after_hooks: Vec<AfterScenarioHook>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            after_hooks: Vec::new(),
        }
    }

    /// Register a sentence pattern and its handler
    ///
    /// Patterns are unanchored unless they anchor themselves, so a step may
    /// match anywhere inside a longer sentence.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Patterns are
    /// fixed at wiring time, so a bad one is a programming error.
    pub fn step(
        &mut self,
        pattern: &str,
        handler: impl Fn(&[&str]) -> StepResult<()> + Send + Sync + 'static,
    ) {
        let pattern = Regex::new(pattern).expect("step pattern must compile");

        self.steps.push(StepBinding {
            pattern,
            handler: Box::new(handler),
        });
    }

    /// Register a hook that runs whenever a scenario ends
    pub fn after_scenario(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.after_hooks.push(Box::new(hook));
    }

    /// Dispatch a sentence to the first matching step
    ///
    /// Capture groups are passed to the handler in pattern order; a group
    /// that did not participate in the match arrives as an empty string.
    pub fn dispatch(&self, sentence: &str) -> StepResult<()> {
        for binding in &self.steps {
            if let Some(captures) = binding.pattern.captures(sentence) {
                let args: Vec<&str> = captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map_or("", |m| m.as_str()))
                    .collect();

                debug!("Sentence '{}' matched /{}/", sentence, binding.pattern.as_str());
                trace!("Captured arguments: {:?}", args);

                return (binding.handler)(&args);
            }
        }

        Err(StepError::NoMatch(sentence.to_string()))
    }

    /// Run the after-scenario hooks in registration order
    pub fn end_scenario(&self) {
        for hook in &self.after_hooks {
            hook();
        }
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::new()
    }
}
