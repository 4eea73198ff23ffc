//! Task model and the fixed resource-cost lookup.
//!
//! A task is a unit of work characterized only by its workload class; the
//! class maps to a processing-power unit (a MIPS-like rate) through a
//! fixed table. Tasks are immutable and supplied externally as an ordered
//! sequence — generating them is the caller's concern.

/// Reference instruction length of a task.
pub const CLOUDLET_LENGTH: f64 = 10_000.0;

/// Cost per unit of processing time.
pub const COST_PER_MIPS: f64 = 0.5;

/// Cost per MB of RAM held during execution.
pub const COST_PER_RAM: f64 = 0.05;

/// Cost per unit of bandwidth consumed.
pub const COST_PER_BW: f64 = 0.1;

/// RAM held by every task (MB).
pub const RAM_USAGE: f64 = 512.0;

/// Bandwidth consumed by every task.
pub const BANDWIDTH_USAGE: f64 = 1_000.0;

/// Workload class of a task.
///
/// Maps to a processing-power unit via [`power_unit`](Self::power_unit).
/// Parsing via [`FromStr`](std::str::FromStr) is lenient: an
/// unrecognized class falls back to `Medium` (power unit 500).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeightClass {
    /// Light workload: power unit 400.
    Light,
    /// Medium workload: power unit 500. Also the fallback for
    /// unrecognized class names.
    Medium,
    /// Heavy workload: power unit 600.
    Heavy,
}

impl std::str::FromStr for WeightClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "light" => WeightClass::Light,
            "heavy" => WeightClass::Heavy,
            _ => WeightClass::Medium,
        })
    }
}

impl WeightClass {
    /// Processing-power unit for this class.
    pub fn power_unit(self) -> f64 {
        match self {
            WeightClass::Light => 400.0,
            WeightClass::Medium => 500.0,
            WeightClass::Heavy => 600.0,
        }
    }

    /// Execution time of one task of this class on any worker.
    pub fn exec_time(self) -> f64 {
        CLOUDLET_LENGTH / self.power_unit()
    }
}

/// A task to be assigned to a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Workload class, determining execution time on a worker.
    pub weight_class: WeightClass,
}

impl Task {
    /// Creates a task with the given workload class.
    pub fn new(weight_class: WeightClass) -> Self {
        Self { weight_class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_units() {
        assert_eq!(WeightClass::Light.power_unit(), 400.0);
        assert_eq!(WeightClass::Medium.power_unit(), 500.0);
        assert_eq!(WeightClass::Heavy.power_unit(), 600.0);
    }

    #[test]
    fn test_exec_time() {
        assert!((WeightClass::Light.exec_time() - 25.0).abs() < 1e-12);
        assert!((WeightClass::Medium.exec_time() - 20.0).abs() < 1e-12);
        assert!((WeightClass::Heavy.exec_time() - 10_000.0 / 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_task_construction() {
        let task = Task::new(WeightClass::Heavy);
        assert_eq!(task.weight_class, WeightClass::Heavy);
    }

    #[test]
    fn test_parse_known_classes() {
        assert_eq!("light".parse::<WeightClass>().unwrap(), WeightClass::Light);
        assert_eq!("medium".parse::<WeightClass>().unwrap(), WeightClass::Medium);
        assert_eq!("heavy".parse::<WeightClass>().unwrap(), WeightClass::Heavy);
    }

    #[test]
    fn test_parse_unrecognized_defaults_to_medium() {
        assert_eq!("colossal".parse::<WeightClass>().unwrap(), WeightClass::Medium);
        assert_eq!("".parse::<WeightClass>().unwrap(), WeightClass::Medium);
    }
}
