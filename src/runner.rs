//! The routine under measurement.

use crate::result::Measurements;

/// User-supplied routine whose complexity is being measured.
///
/// The harness calls [`step`](Runner::step) once per N produced by the
/// stepper and records whatever comes back. A runner must return at least
/// one [`Measurement`](crate::Measurement) per call; it may return several,
/// e.g. to sample sub-scales of the same N.
///
/// The call is treated as opaque and blocking: it may run arbitrarily long
/// and have side effects (that is exactly the code being measured), but it
/// must not touch the harness or stepper driving it. Failures are not
/// caught; a panic unwinds through the harness and abandons the run.
pub trait Runner {
    /// Execute the routine for input size `n` and report its cost.
    fn step(&mut self, n: f64) -> Measurements;
}

/// Any `FnMut(f64) -> Measurements` closure is a runner.
impl<F> Runner for F
where
    F: FnMut(f64) -> Measurements,
{
    fn step(&mut self, n: f64) -> Measurements {
        self(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Measurement;

    #[test]
    fn closures_are_runners() {
        let mut runner = |n: f64| vec![Measurement::new(n * 2.0)];
        let measurements = runner.step(3.0);

        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements[0].o, 6.0);
    }

    #[test]
    fn struct_runners_keep_state_across_steps() {
        struct Counting {
            calls: usize,
        }

        impl Runner for Counting {
            fn step(&mut self, n: f64) -> Measurements {
                self.calls += 1;
                vec![Measurement::new(n)]
            }
        }

        let mut runner = Counting { calls: 0 };
        runner.step(1.0);
        runner.step(2.0);

        assert_eq!(runner.calls, 2);
    }
}
