//! Input-size sequences for measurement runs.
//!
//! A [`Stepper`] produces the ordered sequence of N values the harness will
//! feed into the routine under test. Two implementations are provided: a
//! numeric range with a fixed increment, and an explicit list of sizes.
//!
//! Steppers are single-pass and stateful. They are not restartable, and a
//! single instance must not be driven from more than one place; `&mut self`
//! on [`Stepper::next`] encodes that precondition.

use thiserror::Error;

/// Construction errors for steppers.
///
/// These surface before the first step is emitted, so an invalid sequence
/// can never reach a measurement run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepperError {
    /// The step size of a range stepper was zero or negative.
    #[error("step size must be positive")]
    InvalidStepSize,
    /// The range bounds of a range stepper were not strictly increasing.
    #[error("range must satisfy min < max")]
    UnorderedRange,
    /// An array stepper was given an empty sequence of steps.
    #[error("steps array must not be empty")]
    EmptySteps,
}

/// Produces the next N to test, or `None` once the sequence is exhausted.
///
/// Exhaustion is idempotent: after the first `None`, every further call
/// also returns `None`.
pub trait Stepper {
    /// Advance the sequence and return the next N.
    fn next(&mut self) -> Option<f64>;
}

/// Steps from `min` to `max` (inclusive) by a fixed increment.
#[derive(Debug, Clone)]
pub struct RangeStepper {
    max: f64,
    step_size: f64,
    current: f64,
}

impl RangeStepper {
    /// Create a stepper emitting `min, min + step_size, …` for every value
    /// `<= max`.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::InvalidStepSize`] when `step_size <= 0` and
    /// [`StepperError::UnorderedRange`] when `min >= max`.
    pub fn new(min: f64, max: f64, step_size: f64) -> Result<Self, StepperError> {
        if step_size <= 0.0 {
            return Err(StepperError::InvalidStepSize);
        }
        if min >= max {
            return Err(StepperError::UnorderedRange);
        }

        Ok(Self {
            max,
            step_size,
            current: min,
        })
    }
}

impl Stepper for RangeStepper {
    fn next(&mut self) -> Option<f64> {
        if self.current > self.max {
            return None;
        }
        let value = self.current;
        self.current += self.step_size;

        Some(value)
    }
}

/// Steps through an explicit, caller-ordered list of N values.
#[derive(Debug, Clone)]
pub struct ArrayStepper {
    steps: Vec<f64>,
    current: usize,
}

impl ArrayStepper {
    /// Create a stepper emitting `steps` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::EmptySteps`] for an empty input.
    pub fn new(steps: Vec<f64>) -> Result<Self, StepperError> {
        if steps.is_empty() {
            return Err(StepperError::EmptySteps);
        }

        Ok(Self { steps, current: 0 })
    }
}

impl Stepper for ArrayStepper {
    fn next(&mut self) -> Option<f64> {
        let value = self.steps.get(self.current).copied();
        if value.is_some() {
            self.current += 1;
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(stepper: &mut impl Stepper) -> Vec<f64> {
        let mut emitted = Vec::new();
        while let Some(n) = stepper.next() {
            emitted.push(n);
        }
        emitted
    }

    #[test]
    fn range_stepper_emits_inclusive_sequence() {
        let mut stepper = RangeStepper::new(-1.0, 1.0, 1.0).unwrap();
        assert_eq!(drain(&mut stepper), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn range_stepper_is_strictly_increasing_and_bounded() {
        let mut stepper = RangeStepper::new(2.0, 10.0, 2.5).unwrap();
        let emitted = drain(&mut stepper);

        assert!(emitted.windows(2).all(|w| w[0] < w[1]));
        assert!(emitted.iter().all(|&n| n <= 10.0 + 2.5));
        assert_eq!(emitted, vec![2.0, 4.5, 7.0, 9.5]);
    }

    #[test]
    fn range_stepper_exhaustion_is_idempotent() {
        let mut stepper = RangeStepper::new(0.0, 1.0, 1.0).unwrap();
        drain(&mut stepper);

        assert_eq!(stepper.next(), None);
        assert_eq!(stepper.next(), None);
    }

    #[test]
    fn range_stepper_rejects_non_positive_step_size() {
        assert_eq!(
            RangeStepper::new(0.0, 3.0, 0.0).unwrap_err(),
            StepperError::InvalidStepSize
        );
        assert_eq!(
            RangeStepper::new(0.0, 3.0, -1.0).unwrap_err(),
            StepperError::InvalidStepSize
        );
    }

    #[test]
    fn range_stepper_rejects_unordered_range() {
        assert_eq!(
            RangeStepper::new(3.0, 3.0, 1.0).unwrap_err(),
            StepperError::UnorderedRange
        );
        assert_eq!(
            RangeStepper::new(4.0, 3.0, 1.0).unwrap_err(),
            StepperError::UnorderedRange
        );
    }

    #[test]
    fn array_stepper_emits_input_in_order() {
        let mut stepper = ArrayStepper::new(vec![-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(drain(&mut stepper), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn array_stepper_exhaustion_is_idempotent() {
        let mut stepper = ArrayStepper::new(vec![1.0]).unwrap();
        drain(&mut stepper);

        assert_eq!(stepper.next(), None);
        assert_eq!(stepper.next(), None);
    }

    #[test]
    fn array_stepper_rejects_empty_input() {
        assert_eq!(
            ArrayStepper::new(Vec::new()).unwrap_err(),
            StepperError::EmptySteps
        );
    }
}
