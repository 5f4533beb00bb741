use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::simulator::errors::SimulatorIdError;
use crate::domain::simulator::errors::SimulatorNameError;
use crate::domain::simulator::errors::WeightRangeError;

/// A named weight-progression configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    pub id: SimulatorId,
    pub name: SimulatorName,
    pub description: Option<String>,
    pub weight_range: WeightRange,
    pub created_at: DateTime<Utc>,
}

/// Simulator identifier assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimulatorId(pub i64);

impl SimulatorId {
    /// Parse a simulator ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, SimulatorIdError> {
        s.parse::<i64>()
            .map(SimulatorId)
            .map_err(|e| SimulatorIdError::InvalidFormat(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for SimulatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Simulator name value type. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulatorName(String);

impl SimulatorName {
    /// # Errors
    /// * `Empty` - Name is the empty string
    pub fn new(name: String) -> Result<Self, SimulatorNameError> {
        if name.is_empty() {
            return Err(SimulatorNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SimulatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Inclusive weight bounds plus the signed step between them.
///
/// Only constructible through [`WeightRange::new`], so every instance
/// satisfies the progression rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    min_weight: f64,
    max_weight: f64,
    weight_increment: f64,
}

impl WeightRange {
    /// Validate a weight progression.
    ///
    /// Rules are checked in order and the first violation is returned:
    /// 1. both weights are non-negative
    /// 2. the increment is non-zero
    /// 3. the bounds differ
    /// 4. `|max - min| >= increment`
    /// 5. an ascending range has a positive increment
    /// 6. a descending range has a negative increment
    ///
    /// # Errors
    /// * `NegativeWeight` - Rule 1
    /// * `ZeroIncrement` - Rule 2
    /// * `InvalidRange` - Rules 3 to 6, with an explanation
    // Each rule is written as the condition that must hold, so NaN fails it.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(
        min_weight: f64,
        max_weight: f64,
        weight_increment: f64,
    ) -> Result<Self, WeightRangeError> {
        if !(min_weight >= 0.0 && max_weight >= 0.0) {
            return Err(WeightRangeError::NegativeWeight {
                min: min_weight,
                max: max_weight,
            });
        }

        if weight_increment == 0.0 {
            return Err(WeightRangeError::ZeroIncrement);
        }

        if min_weight == max_weight {
            return Err(WeightRangeError::InvalidRange(format!(
                "min weight ({min_weight}) and max weight ({max_weight}) cannot be equal"
            )));
        }

        if !((max_weight - min_weight).abs() >= weight_increment) {
            return Err(WeightRangeError::InvalidRange(format!(
                "max weight ({max_weight}) and min weight ({min_weight}) are too close for increment ({weight_increment})"
            )));
        }

        if min_weight < max_weight && !(weight_increment > 0.0) {
            return Err(WeightRangeError::InvalidRange(format!(
                "weight increment ({weight_increment}) must be positive when min weight ({min_weight}) is less than max weight ({max_weight})"
            )));
        }

        if min_weight > max_weight && !(weight_increment < 0.0) {
            return Err(WeightRangeError::InvalidRange(format!(
                "weight increment ({weight_increment}) must be negative when min weight ({min_weight}) is greater than max weight ({max_weight})"
            )));
        }

        Ok(Self {
            min_weight,
            max_weight,
            weight_increment,
        })
    }

    pub fn min_weight(&self) -> f64 {
        self.min_weight
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn weight_increment(&self) -> f64 {
        self.weight_increment
    }
}

/// A simulator that has not been stored yet; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewSimulator {
    pub name: SimulatorName,
    pub description: Option<String>,
    pub weight_range: WeightRange,
    pub created_at: DateTime<Utc>,
}

/// Command to create a simulator from raw request values.
#[derive(Debug, Clone)]
pub struct CreateSimulatorCommand {
    pub name: String,
    pub description: Option<String>,
    pub min_weight: f64,
    pub max_weight: f64,
    pub weight_increment: f64,
}

/// Patch for an existing simulator.
///
/// Supplied fields replace stored ones; empty strings count as absent. The
/// merged weights are validated again before anything is written.
#[derive(Debug, Clone, Default)]
pub struct UpdateSimulatorCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub weight_increment: Option<f64>,
}

impl UpdateSimulatorCommand {
    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            && self.description.as_deref().map_or(true, str::is_empty)
            && self.min_weight.is_none()
            && self.max_weight.is_none()
            && self.weight_increment.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_message(result: Result<WeightRange, WeightRangeError>) -> String {
        match result {
            Err(WeightRangeError::InvalidRange(message)) => message,
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_ascending_range_accepted() {
        let range = WeightRange::new(0.0, 100.0, 10.0).unwrap();

        assert_eq!(range.min_weight(), 0.0);
        assert_eq!(range.max_weight(), 100.0);
        assert_eq!(range.weight_increment(), 10.0);
    }

    #[test]
    fn test_descending_range_accepted() {
        assert!(WeightRange::new(100.0, 0.0, -5.0).is_ok());
    }

    #[test]
    fn test_increment_equal_to_span_accepted() {
        assert!(WeightRange::new(20.0, 30.0, 10.0).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        assert_eq!(
            WeightRange::new(-1.0, 100.0, 10.0),
            Err(WeightRangeError::NegativeWeight {
                min: -1.0,
                max: 100.0
            })
        );
        assert!(matches!(
            WeightRange::new(10.0, -100.0, -10.0),
            Err(WeightRangeError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_negative_weight_checked_before_increment() {
        assert!(matches!(
            WeightRange::new(-1.0, 100.0, 0.0),
            Err(WeightRangeError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_zero_increment() {
        assert_eq!(
            WeightRange::new(0.0, 100.0, 0.0),
            Err(WeightRangeError::ZeroIncrement)
        );
    }

    #[test]
    fn test_equal_bounds() {
        let message = range_message(WeightRange::new(50.0, 50.0, 5.0));
        assert!(message.contains("cannot be equal"));
    }

    #[test]
    fn test_increment_larger_than_span() {
        let message = range_message(WeightRange::new(0.0, 5.0, 10.0));
        assert!(message.contains("too close"));
    }

    #[test]
    fn test_ascending_range_with_negative_increment() {
        let message = range_message(WeightRange::new(0.0, 100.0, -5.0));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn test_descending_range_with_positive_increment() {
        let message = range_message(WeightRange::new(100.0, 0.0, 5.0));
        assert!(message.contains("must be negative"));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(WeightRange::new(f64::NAN, 100.0, 10.0).is_err());
        assert!(WeightRange::new(0.0, 100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_update_command_is_empty() {
        assert!(UpdateSimulatorCommand::default().is_empty());
        assert!(UpdateSimulatorCommand {
            name: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
        assert!(!UpdateSimulatorCommand {
            max_weight: Some(120.0),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_simulator_name_rejects_empty() {
        assert_eq!(
            SimulatorName::new(String::new()),
            Err(SimulatorNameError::Empty)
        );
    }
}
