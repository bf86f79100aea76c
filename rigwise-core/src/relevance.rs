//! The relevance matrix: how much each component category matters for each
//! task.
//!
//! The coefficients are process-wide constants in spirit, but the matrix is
//! modelled as an immutable value passed explicitly into every call that
//! needs it, keeping the pipeline pure and testable.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Category, Task, TaskWeights};

/// Errors returned by [`RelevanceMatrix::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelevanceMatrixError {
    /// A coefficient was outside `[0.0, 1.0]` or not finite.
    #[error("relevance coefficient for {category}/{task} must be within 0.0..=1.0")]
    InvalidCoefficient {
        /// Component category of the offending entry.
        category: Category,
        /// Task of the offending entry.
        task: Task,
    },
}

/// Fixed mapping from component category to per-task relevance coefficients.
///
/// [`RelevanceMatrix::default`] carries the shipped constants; callers with
/// bespoke coefficient sets construct their own via [`RelevanceMatrix::new`].
///
/// # Examples
/// ```
/// use rigwise_core::{Category, RelevanceMatrix, Task};
///
/// let matrix = RelevanceMatrix::default();
/// assert_eq!(matrix.coefficient(Category::Gpu, Task::Gaming), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelevanceMatrix {
    coefficients: HashMap<Category, HashMap<Task, f64>>,
}

impl RelevanceMatrix {
    /// Validates and constructs a matrix from explicit coefficients.
    ///
    /// # Errors
    /// Returns [`RelevanceMatrixError::InvalidCoefficient`] when any entry is
    /// not finite or falls outside `[0.0, 1.0]`.
    pub fn new(
        coefficients: HashMap<Category, HashMap<Task, f64>>,
    ) -> Result<Self, RelevanceMatrixError> {
        for (&category, tasks) in &coefficients {
            for (&task, &value) in tasks {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(RelevanceMatrixError::InvalidCoefficient { category, task });
                }
            }
        }
        Ok(Self { coefficients })
    }

    /// Return the coefficient for a category/task pair.
    ///
    /// Pairs absent from the matrix contribute nothing, so this returns 0.
    pub fn coefficient(&self, category: Category, task: Task) -> f64 {
        self.coefficients
            .get(&category)
            .and_then(|tasks| tasks.get(&task))
            .copied()
            .unwrap_or(0.0)
    }

    /// Collapse the user's task weights into one scalar weight for a
    /// category: `Σ_task weights[task] * coefficient(category, task)`.
    ///
    /// Recompute whenever the weights change; the result is independent of
    /// which specific components are under consideration.
    ///
    /// # Examples
    /// ```
    /// use rigwise_core::{Category, RelevanceMatrix, Task, TaskWeights};
    ///
    /// let matrix = RelevanceMatrix::default();
    /// let weights = TaskWeights::new(); // all tasks at 5
    /// // 5 * (0.5 + 0.4 + 0.2 + 0.4)
    /// assert!((matrix.category_weight(Category::Gpu, &weights) - 7.5).abs() < 1e-9);
    /// ```
    pub fn category_weight(&self, category: Category, weights: &TaskWeights) -> f64 {
        weights
            .iter()
            .map(|(task, weight)| f64::from(weight) * self.coefficient(category, task))
            .sum()
    }
}

impl Default for RelevanceMatrix {
    /// The shipped coefficient set.
    fn default() -> Self {
        let coefficients = HashMap::from([
            (
                Category::Gpu,
                HashMap::from([
                    (Task::Gaming, 0.5),
                    (Task::MlAi, 0.4),
                    (Task::Hpc, 0.2),
                    (Task::Rendering3d, 0.4),
                ]),
            ),
            (
                Category::Cpu,
                HashMap::from([
                    (Task::Gaming, 0.3),
                    (Task::MlAi, 0.3),
                    (Task::Hpc, 0.5),
                    (Task::Rendering3d, 0.3),
                ]),
            ),
            (
                Category::Ram,
                HashMap::from([
                    (Task::Gaming, 0.2),
                    (Task::MlAi, 0.3),
                    (Task::Hpc, 0.3),
                    (Task::Rendering3d, 0.3),
                ]),
            ),
        ]);
        Self { coefficients }
    }
}
