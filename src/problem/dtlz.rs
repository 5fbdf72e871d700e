//! Deb-Thiele-Laumanns-Zitzler problems with a spherical front.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
  bounds::Bounds,
  error::{BuildError, EvaluationResult},
  evaluation::Evaluation,
  params::ProblemParams,
  problem::{check_divisions, check_level, DomainProblem},
};

/// Three-objective DTLZ problem with `2 + n_div` variables in `[0, 1]`.
///
/// - level `0` is DTLZ2, a unimodal distance function;
/// - level `1` is DTLZ3, a multimodal distance function with the same front.
///
/// Pareto optimal points satisfy `f1^2 + f2^2 + f3^2 = 1` and have every
/// distance variable at `0.5`.
#[derive(Debug, Clone)]
pub struct Dtlz {
  bounds: Bounds,
  level: u32,
  normalized: bool,
}

impl Dtlz {
  /// Registered name.
  pub const NAME: &'static str = "DTLZ";
  /// Highest defined level.
  pub const MAX_LEVEL: u32 = 1;
  /// Number of objectives.
  pub const OBJECTIVES: usize = 3;

  /// Creates the problem.
  pub fn new(params: &ProblemParams) -> Result<Self, BuildError> {
    check_level(Self::NAME, params.level, Self::MAX_LEVEL)?;
    check_divisions(Self::NAME, params.n_div, 1)?;
    Ok(Self {
      bounds: Bounds::unit(Self::OBJECTIVES - 1 + params.n_div),
      level: params.level,
      normalized: params.normalized,
    })
  }

  fn g(&self, distance: &[f64]) -> f64 {
    let squares = distance.iter().map(|x| (x - 0.5).powi(2));
    match self.level {
      0 => squares.sum(),
      _ => {
        let k = distance.len() as f64;
        let waves = distance.iter().map(|x| (20.0 * PI * (x - 0.5)).cos());
        100.0 * (k + squares.sum::<f64>() - waves.sum::<f64>())
      }
    }
  }
}

impl DomainProblem for Dtlz {
  fn nx(&self) -> usize {
    self.bounds.len()
  }

  fn nf(&self) -> usize {
    Self::OBJECTIVES
  }

  fn ng(&self) -> usize {
    0
  }

  fn lower_bounds(&self) -> &[f64] {
    self.bounds.lower()
  }

  fn upper_bounds(&self) -> &[f64] {
    self.bounds.upper()
  }

  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation> {
    // bounds are the unit hypercube already, normalization changes nothing
    let x = self.bounds.to_native(x, self.normalized)?;
    let (position, distance) = x.split_at(Self::OBJECTIVES - 1);
    let radius = 1.0 + self.g(distance);
    let objectives = (0..Self::OBJECTIVES)
      .map(|m| {
        let kept = Self::OBJECTIVES - 1 - m;
        let cosines: f64 = position[..kept]
          .iter()
          .map(|p| (p * FRAC_PI_2).cos())
          .product();
        let sine = if m == 0 {
          1.0
        } else {
          (position[kept] * FRAC_PI_2).sin()
        };
        radius * cosines * sine
      })
      .collect();
    Ok(Evaluation::Unconstrained { objectives })
  }
}
