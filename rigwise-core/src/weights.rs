//! Task weights: per-task user priorities on a `0..=10` integer scale.
//!
//! Every recognised task is always present; unspecified tasks sit at the
//! mid-scale default. Setters clamp into range so a weight vector read from
//! any front-end is usable as-is.

use std::collections::HashMap;

use crate::Task;

/// Default weight assigned to every task until the caller says otherwise.
pub const DEFAULT_WEIGHT: u8 = 5;

/// Upper bound of the weight scale.
pub const MAX_WEIGHT: u8 = 10;

/// User priority weighting across tasks.
///
/// # Examples
/// ```
/// use rigwise_core::{Task, TaskWeights};
///
/// let weights = TaskWeights::new()
///     .with_weight(Task::Gaming, 8)
///     .with_weight(Task::Hpc, 2);
/// assert_eq!(weights.weight(Task::Gaming), 8);
/// assert_eq!(weights.weight(Task::MlAi), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "HashMap<Task, u8>", into = "HashMap<Task, u8>")
)]
pub struct TaskWeights {
    weights: HashMap<Task, u8>,
}

impl TaskWeights {
    /// Construct a weight vector with every task at [`DEFAULT_WEIGHT`].
    ///
    /// # Examples
    /// ```
    /// use rigwise_core::{Task, TaskWeights};
    ///
    /// let weights = TaskWeights::new();
    /// assert_eq!(weights.weight(Task::Hpc), 5);
    /// ```
    pub fn new() -> Self {
        Self {
            weights: Task::ALL.into_iter().map(|t| (t, DEFAULT_WEIGHT)).collect(),
        }
    }

    /// Return the weight for a task.
    ///
    /// Every task is always present, so this never fails.
    pub fn weight(&self, task: Task) -> u8 {
        self.weights.get(&task).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Set a task weight, clamping into `0..=10`.
    ///
    /// # Examples
    /// ```
    /// use rigwise_core::{Task, TaskWeights};
    ///
    /// let mut weights = TaskWeights::new();
    /// weights.set_weight(Task::Gaming, 15);
    /// assert_eq!(weights.weight(Task::Gaming), 10);
    /// ```
    pub fn set_weight(&mut self, task: Task, weight: u8) {
        self.weights.insert(task, weight.min(MAX_WEIGHT));
    }

    /// Set a task weight while returning `self` for chaining.
    pub fn with_weight(mut self, task: Task, weight: u8) -> Self {
        self.set_weight(task, weight);
        self
    }

    /// Iterate over every task and its weight, in [`Task::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Task, u8)> + '_ {
        Task::ALL.into_iter().map(|task| (task, self.weight(task)))
    }

    /// Report whether every task weight is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, w)| w == 0)
    }
}

impl Default for TaskWeights {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<Task, u8>> for TaskWeights {
    /// Build a full weight vector from a possibly-partial map.
    ///
    /// Missing tasks take the default weight; present ones are clamped.
    fn from(partial: HashMap<Task, u8>) -> Self {
        let mut weights = Self::new();
        for (task, weight) in partial {
            weights.set_weight(task, weight);
        }
        weights
    }
}

impl From<TaskWeights> for HashMap<Task, u8> {
    fn from(weights: TaskWeights) -> Self {
        weights.weights
    }
}
