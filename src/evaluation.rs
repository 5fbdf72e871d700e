//! Results of evaluating a decision vector.

/// Objective values, and constraint values if the problem has any.
///
/// Objectives are minimized. A constraint value `g` is satisfied when
/// `g <= 0`.
///
/// Problems with constraints always produce [`Evaluation::Constrained`],
/// problems without them always produce [`Evaluation::Unconstrained`], so a
/// caller matches on the variant instead of checking for an optional field.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
  /// Result of a problem without constraints.
  Unconstrained {
    /// Objective values.
    objectives: Vec<f64>,
  },
  /// Result of a problem with at least one constraint.
  Constrained {
    /// Objective values.
    objectives: Vec<f64>,
    /// Constraint values.
    constraints: Vec<f64>,
  },
}

impl Evaluation {
  /// Objective values.
  pub fn objectives(&self) -> &[f64] {
    match self {
      Self::Unconstrained { objectives }
      | Self::Constrained { objectives, .. } => objectives,
    }
  }

  /// Constraint values, `None` for an unconstrained result.
  pub fn constraints(&self) -> Option<&[f64]> {
    match self {
      Self::Unconstrained { .. } => None,
      Self::Constrained { constraints, .. } => Some(constraints),
    }
  }

  /// Sum of positive constraint values. A `NaN` constraint counts as an
  /// infinite violation.
  pub fn violation(&self) -> f64 {
    self.constraints().map_or(0.0, |g| {
      g.iter()
        .map(|v| if v.is_nan() { f64::INFINITY } else { v.max(0.0) })
        .sum()
    })
  }

  /// Returns `true` if every constraint value is `<= 0`.
  pub fn is_feasible(&self) -> bool {
    self
      .constraints()
      .map_or(true, |g| g.iter().all(|v| *v <= 0.0))
  }

  /// Splits the result into objectives and optional constraints.
  pub fn into_parts(self) -> (Vec<f64>, Option<Vec<f64>>) {
    match self {
      Self::Unconstrained { objectives } => (objectives, None),
      Self::Constrained {
        objectives,
        constraints,
      } => (objectives, Some(constraints)),
    }
  }

  // number of constraint values carried, used for shape checks
  pub(crate) fn constraint_count(&self) -> usize {
    self.constraints().map_or(0, <[f64]>::len)
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Unconstrained { .. } => "unconstrained",
      Self::Constrained { .. } => "constrained",
    }
  }
}
