//! Tasks describing the usage profiles components are scored against.
//!
//! The enum offers compile-time safety for weight and score lookups.
//!
//! # Examples
//! ```
//! use rigwise_core::Task;
//!
//! assert_eq!(Task::Gaming.as_str(), "gaming");
//! assert_eq!(Task::MlAi.to_string(), "ml-ai");
//! ```

/// A usage profile against which components are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    /// Interactive gaming workloads.
    #[cfg_attr(feature = "serde", serde(rename = "gaming"))]
    Gaming,
    /// Machine-learning training and inference.
    #[cfg_attr(feature = "serde", serde(rename = "ml-ai"))]
    MlAi,
    /// High-precision computing workloads.
    #[cfg_attr(feature = "serde", serde(rename = "hpc"))]
    Hpc,
    /// 3D modelling and rendering.
    #[cfg_attr(feature = "serde", serde(rename = "3d-rendering"))]
    Rendering3d,
}

impl Task {
    /// Every recognised task, in display order.
    pub const ALL: [Self; 4] = [Self::Gaming, Self::MlAi, Self::Hpc, Self::Rendering3d];

    /// Return the task as a lowercase identifier.
    ///
    /// # Examples
    /// ```
    /// use rigwise_core::Task;
    ///
    /// assert_eq!(Task::Hpc.as_str(), "hpc");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::MlAi => "ml-ai",
            Self::Hpc => "hpc",
            Self::Rendering3d => "3d-rendering",
        }
    }

    /// Return the human-readable label used in front-ends.
    ///
    /// # Examples
    /// ```
    /// use rigwise_core::Task;
    ///
    /// assert_eq!(Task::Rendering3d.label(), "3D Rendering");
    /// ```
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gaming => "Gaming",
            Self::MlAi => "ML/AI",
            Self::Hpc => "HPC",
            Self::Rendering3d => "3D Rendering",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gaming" => Ok(Self::Gaming),
            "ml-ai" | "ml/ai" => Ok(Self::MlAi),
            "hpc" => Ok(Self::Hpc),
            "3d-rendering" | "3d rendering" => Ok(Self::Rendering3d),
            _ => Err(format!("unknown task '{s}'")),
        }
    }
}
