//! Binh and Korn function, a constrained problem.

use crate::{
  bounds::Bounds,
  error::{BuildError, EvaluationResult},
  evaluation::Evaluation,
  params::ProblemParams,
  problem::{check_level, DomainProblem},
};

/// Minimizes
/// - `f1(x, y) = 4x^2 + 4y^2`
/// - `f2(x, y) = (x - 5)^2 + (y - 5)^2`
///
/// subject to
/// - `g1(x, y) = (x - 5)^2 + y^2 - 25 <= 0`
/// - `g2(x, y) = 7.7 - (x - 8)^2 - (y + 3)^2 <= 0`
///
/// with `x` in `[0, 5]` and `y` in `[0, 3]`. Only level `0` exists, `n_div` is
/// ignored.
#[derive(Debug, Clone)]
pub struct BinhKorn {
  bounds: Bounds,
  normalized: bool,
}

impl BinhKorn {
  /// Registered name.
  pub const NAME: &'static str = "BNH";

  /// Creates the problem.
  pub fn new(params: &ProblemParams) -> Result<Self, BuildError> {
    check_level(Self::NAME, params.level, 0)?;
    Ok(Self {
      bounds: Bounds::new(vec![0.0, 0.0], vec![5.0, 3.0]),
      normalized: params.normalized,
    })
  }
}

impl DomainProblem for BinhKorn {
  fn nx(&self) -> usize {
    2
  }

  fn nf(&self) -> usize {
    2
  }

  fn ng(&self) -> usize {
    2
  }

  fn lower_bounds(&self) -> &[f64] {
    self.bounds.lower()
  }

  fn upper_bounds(&self) -> &[f64] {
    self.bounds.upper()
  }

  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation> {
    let x = self.bounds.to_native(x, self.normalized)?;
    let (a, b) = (x[0], x[1]);
    Ok(Evaluation::Constrained {
      objectives: vec![
        4.0 * a.powi(2) + 4.0 * b.powi(2),
        (a - 5.0).powi(2) + (b - 5.0).powi(2),
      ],
      constraints: vec![
        (a - 5.0).powi(2) + b.powi(2) - 25.0,
        7.7 - (a - 8.0).powi(2) - (b + 3.0).powi(2),
      ],
    })
  }
}
