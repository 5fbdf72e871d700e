//! Box bounds of decision vectors and normalization utilities.

use std::borrow::Cow;

use itertools::{izip, Itertools};
use rand::Rng;

use crate::error::{BoundsError, EvaluationError, EvaluationResult};

/// Lower and upper bound vectors of equal length, one pair per variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
  lower: Vec<f64>,
  upper: Vec<f64>,
}

impl Bounds {
  /// Creates bounds from a lower and an upper vector.
  ///
  /// # Panics
  ///
  /// Panics if [`Bounds::try_new`] fails.
  pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
    Self::try_new(lower, upper).unwrap_or_else(|e| panic!("{e}"))
  }

  /// Creates bounds from a lower and an upper vector.
  ///
  /// Fails if vectors have different lengths, if `lower[i] > upper[i]` or if
  /// an interval is not finite, i.e. it has an infinite end or its width
  /// overflows.
  pub fn try_new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, BoundsError> {
    if lower.len() != upper.len() {
      return Err(BoundsError::LengthMismatch {
        lower: lower.len(),
        upper: upper.len(),
      });
    }
    for (index, (lo, hi)) in lower.iter().zip(&upper).enumerate() {
      if !(lo <= hi) {
        return Err(BoundsError::Inverted { index });
      }
      if !(hi - lo).is_finite() {
        return Err(BoundsError::NotFinite { index });
      }
    }
    Ok(Self { lower, upper })
  }

  /// The unit hypercube `[0, 1]^nx`.
  pub fn unit(nx: usize) -> Self {
    Self::uniform(nx, 0.0, 1.0)
  }

  /// `nx` variables sharing the same interval.
  pub fn uniform(nx: usize, lower: f64, upper: f64) -> Self {
    Self::new(vec![lower; nx], vec![upper; nx])
  }

  /// Number of variables.
  pub fn len(&self) -> usize {
    self.lower.len()
  }

  /// Returns `true` if there are no variables.
  pub fn is_empty(&self) -> bool {
    self.lower.is_empty()
  }

  /// Lower bound vector.
  pub fn lower(&self) -> &[f64] {
    &self.lower
  }

  /// Upper bound vector.
  pub fn upper(&self) -> &[f64] {
    &self.upper
  }

  /// Checks that `x` has the right length and lies within the bounds.
  /// `NaN` components are always out of bounds.
  pub fn check(&self, x: &[f64]) -> EvaluationResult<()> {
    if x.len() != self.len() {
      return Err(EvaluationError::DimensionMismatch {
        expected: self.len(),
        found: x.len(),
      });
    }
    match izip!(x, &self.lower, &self.upper)
      .find_position(|(v, lo, hi)| !(lo <= v && v <= hi))
    {
      Some((index, (&value, &lower, &upper))) => {
        Err(EvaluationError::OutOfBounds {
          index,
          value,
          lower,
          upper,
        })
      }
      None => Ok(()),
    }
  }

  /// Maps a point of the unit hypercube onto these bounds.
  pub fn denormalize(&self, x: &[f64]) -> Vec<f64> {
    izip!(x, &self.lower, &self.upper)
      .map(|(u, lo, hi)| lo + u * (hi - lo))
      .collect()
  }

  /// Maps a point within these bounds onto the unit hypercube. Degenerate
  /// intervals map to `0`.
  pub fn normalize(&self, x: &[f64]) -> Vec<f64> {
    izip!(x, &self.lower, &self.upper)
      .map(|(v, lo, hi)| if hi > lo { (v - lo) / (hi - lo) } else { 0.0 })
      .collect()
  }

  /// Validates `x` and returns it in native coordinates.
  ///
  /// If `normalized`, `x` must lie in the unit hypercube and is rescaled onto
  /// these bounds, otherwise it must lie within these bounds and is borrowed
  /// as is.
  pub fn to_native<'a>(
    &self,
    x: &'a [f64],
    normalized: bool,
  ) -> EvaluationResult<Cow<'a, [f64]>> {
    if normalized {
      Self::unit(self.len()).check(x)?;
      Ok(Cow::Owned(self.denormalize(x)))
    } else {
      self.check(x)?;
      Ok(Cow::Borrowed(x))
    }
  }

  /// Draws a decision vector uniformly distributed within the bounds.
  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
    self
      .lower
      .iter()
      .zip_eq(&self.upper)
      .map(|(&lo, &hi)| rng.gen_range(lo..=hi))
      .collect()
  }
}
