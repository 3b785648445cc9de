//! Input arrays: validated generation parameters and a seedable generator.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use shared::error::VisualizerError;

pub const MAX_ARRAY_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySpec {
    pub len: usize,
    pub min_value: i64,
    pub max_value: i64,
}

impl Default for ArraySpec {
    fn default() -> Self {
        Self {
            len: 20,
            min_value: 5,
            max_value: 100,
        }
    }
}

impl ArraySpec {
    pub fn validate(&self) -> Result<(), VisualizerError> {
        if self.len == 0 || self.len > MAX_ARRAY_LEN {
            return Err(VisualizerError::InvalidSettings(format!(
                "array length must be between 1 and {MAX_ARRAY_LEN}, got {}",
                self.len
            )));
        }
        if self.min_value > self.max_value {
            return Err(VisualizerError::InvalidSettings(format!(
                "value range is empty: {}..={}",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

/// Produces fresh arrays for resets. With a seed the sequence of arrays is
/// reproducible across runs.
#[derive(Debug)]
pub struct ArrayGenerator {
    spec: ArraySpec,
    rng: StdRng,
}

impl ArrayGenerator {
    pub fn new(spec: ArraySpec, seed: Option<u64>) -> Result<Self, VisualizerError> {
        spec.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(len = spec.len, seeded = seed.is_some(), "array generator ready");
        Ok(Self { spec, rng })
    }

    pub fn spec(&self) -> ArraySpec {
        self.spec
    }

    pub fn next_values(&mut self) -> Vec<i64> {
        let ArraySpec {
            len,
            min_value,
            max_value,
        } = self.spec;
        (0..len)
            .map(|_| self.rng.gen_range(min_value..=max_value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let spec = ArraySpec::default();
        let mut a = ArrayGenerator::new(spec, Some(7)).expect("valid spec");
        let mut b = ArrayGenerator::new(spec, Some(7)).expect("valid spec");
        assert_eq!(a.next_values(), b.next_values());
        assert_eq!(a.next_values(), b.next_values());
    }

    #[test]
    fn values_stay_in_range() {
        let spec = ArraySpec {
            len: 50,
            min_value: -3,
            max_value: 3,
        };
        let values = ArrayGenerator::new(spec, Some(1))
            .expect("valid spec")
            .next_values();
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (-3..=3).contains(v)));
    }

    #[test]
    fn rejects_empty_range_and_bad_length() {
        let inverted = ArraySpec {
            len: 5,
            min_value: 10,
            max_value: 1,
        };
        assert!(matches!(
            inverted.validate(),
            Err(VisualizerError::InvalidSettings(_))
        ));

        let too_long = ArraySpec {
            len: MAX_ARRAY_LEN + 1,
            ..ArraySpec::default()
        };
        assert!(ArrayGenerator::new(too_long, None).is_err());

        let empty = ArraySpec {
            len: 0,
            ..ArraySpec::default()
        };
        assert!(empty.validate().is_err());
    }
}
