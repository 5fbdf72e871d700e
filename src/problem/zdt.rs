//! Zitzler-Deb-Thiele problems with a scalable number of variables.

use std::f64::consts::PI;

use crate::{
  bounds::Bounds,
  error::{BuildError, EvaluationResult},
  evaluation::Evaluation,
  params::ProblemParams,
  problem::{check_divisions, check_level, DomainProblem},
};

/// Two-objective ZDT problem with `1 + n_div` variables.
///
/// - level `0` is ZDT1, every variable in `[0, 1]`, convex front;
/// - level `1` is ZDT4, the tail variables in `[-5, 5]`, the same front
///   hidden behind `21^n_div` local ones.
///
/// The Pareto set has all tail variables at `0`.
#[derive(Debug, Clone)]
pub struct Zdt {
  bounds: Bounds,
  level: u32,
  normalized: bool,
}

impl Zdt {
  /// Registered name.
  pub const NAME: &'static str = "ZDT";
  /// Highest defined level.
  pub const MAX_LEVEL: u32 = 1;

  /// Creates the problem.
  pub fn new(params: &ProblemParams) -> Result<Self, BuildError> {
    check_level(Self::NAME, params.level, Self::MAX_LEVEL)?;
    check_divisions(Self::NAME, params.n_div, 1)?;
    let nx = 1 + params.n_div;
    let bounds = match params.level {
      0 => Bounds::unit(nx),
      _ => {
        let mut lower = vec![-5.0; nx];
        let mut upper = vec![5.0; nx];
        (lower[0], upper[0]) = (0.0, 1.0);
        Bounds::new(lower, upper)
      }
    };
    Ok(Self {
      bounds,
      level: params.level,
      normalized: params.normalized,
    })
  }

  fn g(&self, tail: &[f64]) -> f64 {
    let n = tail.len() as f64;
    match self.level {
      0 => 1.0 + 9.0 * tail.iter().sum::<f64>() / n,
      _ => {
        1.0
          + 10.0 * n
          + tail
            .iter()
            .map(|x| x.powi(2) - 10.0 * (4.0 * PI * x).cos())
            .sum::<f64>()
      }
    }
  }
}

impl DomainProblem for Zdt {
  fn nx(&self) -> usize {
    self.bounds.len()
  }

  fn nf(&self) -> usize {
    2
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
    let x = self.bounds.to_native(x, self.normalized)?;
    let f1 = x[0];
    let g = self.g(&x[1..]);
    Ok(Evaluation::Unconstrained {
      objectives: vec![f1, g * (1.0 - (f1 / g).sqrt())],
    })
  }
}
