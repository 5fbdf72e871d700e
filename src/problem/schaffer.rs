//! Schaffer's problem No.1.

use crate::{
  bounds::Bounds,
  error::{BuildError, EvaluationResult},
  evaluation::Evaluation,
  params::ProblemParams,
  problem::{check_level, DomainProblem},
};

/// `f1(x) = x^2`, `f2(x) = (x - 2)^2` for `x` in `[-10, 10]`.
///
/// The Pareto set is `[0, 2]`. Only level `0` exists, `n_div` is ignored.
#[derive(Debug, Clone)]
pub struct Schaffer {
  bounds: Bounds,
  normalized: bool,
}

impl Schaffer {
  /// Registered name.
  pub const NAME: &'static str = "SCH";

  /// Creates the problem.
  pub fn new(params: &ProblemParams) -> Result<Self, BuildError> {
    check_level(Self::NAME, params.level, 0)?;
    Ok(Self {
      bounds: Bounds::uniform(1, -10.0, 10.0),
      normalized: params.normalized,
    })
  }
}

impl DomainProblem for Schaffer {
  fn nx(&self) -> usize {
    1
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
    let x = x[0];
    Ok(Evaluation::Unconstrained {
      objectives: vec![x.powi(2), (x - 2.0).powi(2)],
    })
  }
}
