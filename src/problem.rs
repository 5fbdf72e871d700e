//! Domain problems: the contract an adapter consumes, closure-backed problems
//! and a few reference problems.
//!
//! A domain problem knows its own dimensions, its *native* bounds and how to
//! evaluate a decision vector. Problems built with `normalized` parameters
//! accept decision vectors from the unit hypercube and rescale them to their
//! native range themselves, the reported bounds stay native.

pub mod binh_korn;
pub mod dtlz;
pub mod schaffer;
pub mod zdt;

use crate::{
  bounds::Bounds,
  error::{BuildError, EvaluationResult},
  evaluation::Evaluation,
};

/// A problem that can be wrapped by an adapter.
///
/// # Examples
/// ```
/// # use hpa_adapter::{problem::DomainProblem, EvaluationResult, Evaluation};
/// struct Sphere;
///
/// impl DomainProblem for Sphere {
///   fn nx(&self) -> usize { 2 }
///   fn nf(&self) -> usize { 1 }
///   fn ng(&self) -> usize { 0 }
///   fn lower_bounds(&self) -> &[f64] { &[-1.0, -1.0] }
///   fn upper_bounds(&self) -> &[f64] { &[1.0, 1.0] }
///   fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation> {
///     let objectives = vec![x.iter().map(|v| v * v).sum()];
///     Ok(Evaluation::Unconstrained { objectives })
///   }
/// }
/// ```
///
/// Problems handed to a [`Registry`](crate::Registry) or a
/// [`ProblemAdapter`](crate::ProblemAdapter) must also be `Send + Sync`.
///
/// **Note that for simple problems you can use [`from_fn`] instead of
/// implementing this trait.**
pub trait DomainProblem {
  /// Number of decision variables.
  fn nx(&self) -> usize;

  /// Number of objectives.
  fn nf(&self) -> usize;

  /// Number of constraints.
  fn ng(&self) -> usize;

  /// Native lower bounds of decision variables.
  fn lower_bounds(&self) -> &[f64];

  /// Native upper bounds of decision variables.
  fn upper_bounds(&self) -> &[f64];

  /// Evaluates a decision vector.
  ///
  /// Must return [`Evaluation::Constrained`] with `ng` constraint values if
  /// `ng > 0`, otherwise [`Evaluation::Unconstrained`]. Either way with `nf`
  /// objective values.
  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation>;
}

impl<P: DomainProblem + ?Sized> DomainProblem for Box<P> {
  fn nx(&self) -> usize {
    (**self).nx()
  }

  fn nf(&self) -> usize {
    (**self).nf()
  }

  fn ng(&self) -> usize {
    (**self).ng()
  }

  fn lower_bounds(&self) -> &[f64] {
    (**self).lower_bounds()
  }

  fn upper_bounds(&self) -> &[f64] {
    (**self).upper_bounds()
  }

  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation> {
    (**self).evaluate(x)
  }
}

/// A problem backed by a closure. Created with [`from_fn`].
pub struct FnProblem<F> {
  bounds: Bounds,
  nf: usize,
  ng: usize,
  evaluate: F,
}

/// Creates a problem from its bounds, counts and an evaluation closure.
///
/// The closure receives decision vectors unchanged, so it is responsible for
/// any validation and rescaling. The problem is `Send + Sync` whenever the
/// closure is.
///
/// # Examples
/// ```
/// # use hpa_adapter::{problem::{from_fn, DomainProblem}, Bounds, Evaluation};
/// let problem = from_fn(Bounds::uniform(1, -10.0, 10.0), 2, 0, |x: &[f64]| {
///   let objectives = vec![x[0].powi(2), (x[0] - 2.0).powi(2)];
///   Ok(Evaluation::Unconstrained { objectives })
/// });
/// assert_eq!(problem.nx(), 1);
/// ```
pub fn from_fn<F>(bounds: Bounds, nf: usize, ng: usize, f: F) -> FnProblem<F>
where
  F: Fn(&[f64]) -> EvaluationResult<Evaluation>,
{
  FnProblem {
    bounds,
    nf,
    ng,
    evaluate: f,
  }
}

impl<F> DomainProblem for FnProblem<F>
where
  F: Fn(&[f64]) -> EvaluationResult<Evaluation>,
{
  fn nx(&self) -> usize {
    self.bounds.len()
  }

  fn nf(&self) -> usize {
    self.nf
  }

  fn ng(&self) -> usize {
    self.ng
  }

  fn lower_bounds(&self) -> &[f64] {
    self.bounds.lower()
  }

  fn upper_bounds(&self) -> &[f64] {
    self.bounds.upper()
  }

  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation> {
    (self.evaluate)(x)
  }
}

pub(crate) fn check_level(
  problem: &str,
  level: u32,
  max: u32,
) -> Result<(), BuildError> {
  if level > max {
    return Err(BuildError::UnsupportedLevel {
      problem: problem.to_owned(),
      level,
      max,
    });
  }
  Ok(())
}

pub(crate) fn check_divisions(
  problem: &str,
  n_div: usize,
  min: usize,
) -> Result<(), BuildError> {
  if n_div < min {
    return Err(BuildError::TooFewDivisions {
      problem: problem.to_owned(),
      n_div,
      min,
    });
  }
  Ok(())
}
