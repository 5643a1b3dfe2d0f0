use std::collections::HashSet;

use log::debug;

use crate::expression::Expression;

/// Distinct rendered solutions collected during one search
///
/// Solutions come back in the order they were first found.
#[derive(Debug, Default)]
pub struct Aggregator {
    seen: HashSet<String>,
    solutions: Vec<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `expr` and keep it unless the same string was already collected.
    /// Returns whether it was new.
    pub fn add(&mut self, expr: &Expression) -> bool {
        let rendered = expr.render(false);
        if self.seen.contains(&rendered) {
            return false;
        }
        debug!("New solution: {}", rendered);
        self.seen.insert(rendered.clone());
        self.solutions.push(rendered);
        true
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<String> {
        self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}
