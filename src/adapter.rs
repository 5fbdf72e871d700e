//! The problem adapter and the contract solvers depend on.

use log::{debug, trace};
use rand::Rng;

use crate::{
  bounds::Bounds,
  error::{BuildError, EvaluationError, EvaluationResult},
  evaluation::Evaluation,
  params::ProblemParams,
  problem::DomainProblem,
  registry::{BoxedProblem, Registry},
};

/// What a solver needs to know about a problem: its dimensions, its bounds and
/// a way to evaluate a decision vector.
///
/// Any solver integration can depend on this trait alone.
pub trait SolverProblem {
  /// Number of decision variables.
  fn variable_count(&self) -> usize;

  /// Number of objectives.
  fn objective_count(&self) -> usize;

  /// Number of constraints.
  fn constraint_count(&self) -> usize;

  /// Lower bounds of decision variables, `variable_count()` long.
  fn lower_bounds(&self) -> &[f64];

  /// Upper bounds of decision variables, `variable_count()` long.
  fn upper_bounds(&self) -> &[f64];

  /// Evaluates a decision vector.
  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation>;
}

/// Exposes a named domain problem to solvers.
///
/// Counts and bounds are read once at construction and never change. If the
/// problem is normalized, the adapter's bounds are the unit hypercube and the
/// domain problem rescales decision vectors itself.
///
/// # Examples
/// ```
/// # use hpa_adapter::{Evaluation, ProblemAdapter, ProblemParams, SolverProblem};
/// let adapter = ProblemAdapter::new("BNH", ProblemParams::default()).unwrap();
/// assert_eq!(adapter.upper_bounds(), &[1.0, 1.0]);
/// match adapter.evaluate(&[0.5, 0.5]).unwrap() {
///   Evaluation::Constrained { objectives, constraints } => {
///     assert_eq!(objectives.len(), 2);
///     assert_eq!(constraints.len(), 2);
///   }
///   Evaluation::Unconstrained { .. } => unreachable!(),
/// }
/// assert!(ProblemAdapter::new("HPA999", ProblemParams::default()).is_err());
/// ```
pub struct ProblemAdapter {
  name: String,
  normalized: bool,
  params: Option<ProblemParams>,
  problem: BoxedProblem,
  nx: usize,
  nf: usize,
  ng: usize,
  bounds: Bounds,
}

impl ProblemAdapter {
  /// Instantiates a built-in problem by name.
  ///
  /// Fails with [`BuildError::UnknownProblem`] if the name is not registered.
  pub fn new(name: &str, params: ProblemParams) -> Result<Self, BuildError> {
    Self::with_registry(&Registry::builtin(), name, params)
  }

  /// Instantiates a problem by name from the given registry.
  pub fn with_registry(
    registry: &Registry,
    name: &str,
    params: ProblemParams,
  ) -> Result<Self, BuildError> {
    let problem = registry.create(name, &params)?;
    let mut adapter =
      Self::from_boxed(name.to_owned(), problem, params.normalized)?;
    adapter.params = Some(params);
    Ok(adapter)
  }

  /// Wraps an already constructed problem. `normalized` must match the way
  /// the problem treats its decision vectors.
  ///
  /// Fails with [`BuildError::BoundsMismatch`] if the problem's bound vectors
  /// are not `nx` long, or with [`BuildError::InvalidBounds`] if a lower
  /// bound exceeds its upper bound or an interval is not finite.
  pub fn from_problem(
    name: impl Into<String>,
    problem: impl DomainProblem + Send + Sync + 'static,
    normalized: bool,
  ) -> Result<Self, BuildError> {
    Self::from_boxed(name.into(), Box::new(problem), normalized)
  }

  fn from_boxed(
    name: String,
    problem: BoxedProblem,
    normalized: bool,
  ) -> Result<Self, BuildError> {
    let (nx, nf, ng) = (problem.nx(), problem.nf(), problem.ng());
    let (lower, upper) = (problem.lower_bounds(), problem.upper_bounds());
    if lower.len() != nx || upper.len() != nx {
      return Err(BuildError::BoundsMismatch {
        problem: name,
        nx,
        lower: lower.len(),
        upper: upper.len(),
      });
    }
    // validated even when replaced by the unit hypercube
    let native = match Bounds::try_new(lower.to_vec(), upper.to_vec()) {
      Ok(bounds) => bounds,
      Err(source) => {
        return Err(BuildError::InvalidBounds {
          problem: name,
          source,
        })
      }
    };
    let bounds = if normalized { Bounds::unit(nx) } else { native };
    debug!(
      "adapting problem `{name}`: nx={nx}, nf={nf}, ng={ng}, normalized={normalized}"
    );
    Ok(Self {
      name,
      normalized,
      params: None,
      problem,
      nx,
      nf,
      ng,
      bounds,
    })
  }

  /// Name the problem was created under.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Parameters the problem was created with, `None` if it was wrapped with
  /// [`ProblemAdapter::from_problem`].
  pub fn params(&self) -> Option<&ProblemParams> {
    self.params.as_ref()
  }

  /// Returns `true` if bounds are the unit hypercube.
  pub fn normalized(&self) -> bool {
    self.normalized
  }

  /// Bounds exposed to solvers.
  pub fn bounds(&self) -> &Bounds {
    &self.bounds
  }

  /// The wrapped domain problem.
  pub fn problem(&self) -> &dyn DomainProblem {
    &*self.problem
  }

  /// Evaluates decision vectors one after another, stopping at the first
  /// failure.
  pub fn evaluate_batch<X: AsRef<[f64]>>(
    &self,
    xs: &[X],
  ) -> EvaluationResult<Vec<Evaluation>> {
    xs.iter().map(|x| self.evaluate(x.as_ref())).collect()
  }

  /// Draws a decision vector uniformly distributed within the adapter bounds.
  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
    self.bounds.sample(rng)
  }

  fn check_shape(&self, evaluation: &Evaluation) -> EvaluationResult<()> {
    let found_objectives = evaluation.objectives().len();
    let found_constraints = evaluation.constraint_count();
    let variant_matches = match evaluation {
      Evaluation::Unconstrained { .. } => self.ng == 0,
      Evaluation::Constrained { .. } => self.ng > 0,
    };
    if variant_matches
      && found_objectives == self.nf
      && found_constraints == self.ng
    {
      Ok(())
    } else {
      Err(EvaluationError::ShapeMismatch {
        objectives: self.nf,
        constraints: self.ng,
        found: evaluation.kind(),
        found_objectives,
        found_constraints,
      })
    }
  }
}

impl SolverProblem for ProblemAdapter {
  fn variable_count(&self) -> usize {
    self.nx
  }

  fn objective_count(&self) -> usize {
    self.nf
  }

  fn constraint_count(&self) -> usize {
    self.ng
  }

  fn lower_bounds(&self) -> &[f64] {
    self.bounds.lower()
  }

  fn upper_bounds(&self) -> &[f64] {
    self.bounds.upper()
  }

  /// Forwards `x` to the domain problem as is. Domain failures propagate
  /// unchanged, a result that doesn't match the declared counts fails with
  /// [`EvaluationError::ShapeMismatch`].
  fn evaluate(&self, x: &[f64]) -> EvaluationResult<Evaluation> {
    trace!("evaluating `{}` at {x:?}", self.name);
    let evaluation = self.problem.evaluate(x)?;
    self.check_shape(&evaluation)?;
    Ok(evaluation)
  }
}

impl std::fmt::Debug for ProblemAdapter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProblemAdapter")
      .field("name", &self.name)
      .field("params", &self.params)
      .field("nx", &self.nx)
      .field("nf", &self.nf)
      .field("ng", &self.ng)
      .field("bounds", &self.bounds)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  };

  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::{error::BoundsError, problem::from_fn};

  fn native(level: u32) -> ProblemParams {
    ProblemParams::builder()
      .level(level)
      .normalized(false)
      .build()
  }

  // every built-in name with every level it defines
  fn instances() -> Vec<(&'static str, u32)> {
    vec![("BNH", 0), ("DTLZ", 0), ("DTLZ", 1), ("SCH", 0), ("ZDT", 0), ("ZDT", 1)]
  }

  fn takes_solver_problem<P: SolverProblem>(p: &P) -> usize {
    p.variable_count()
  }

  #[test]
  fn test_bounds_have_nx_length() {
    for (name, level) in instances() {
      for normalized in [false, true] {
        let params = ProblemParams::builder()
          .level(level)
          .normalized(normalized)
          .build();
        let adapter = ProblemAdapter::new(name, params).unwrap();
        let nx = takes_solver_problem(&adapter);
        assert_eq!(adapter.lower_bounds().len(), nx, "{name}");
        assert_eq!(adapter.upper_bounds().len(), nx, "{name}");
      }
    }
  }

  #[test]
  fn test_normalized_bounds_are_unit_hypercube() {
    for (name, level) in instances() {
      let params = ProblemParams::builder().level(level).build();
      let adapter = ProblemAdapter::new(name, params).unwrap();
      let nx = adapter.variable_count();
      assert!(adapter.normalized());
      assert_eq!(adapter.lower_bounds(), vec![0.0; nx], "{name}");
      assert_eq!(adapter.upper_bounds(), vec![1.0; nx], "{name}");
    }
  }

  #[test]
  fn test_native_bounds_round_trip() {
    let registry = Registry::builtin();
    for (name, level) in instances() {
      let problem = registry.create(name, &native(level)).unwrap();
      let adapter = ProblemAdapter::new(name, native(level)).unwrap();
      assert_eq!(adapter.lower_bounds(), problem.lower_bounds(), "{name}");
      assert_eq!(adapter.upper_bounds(), problem.upper_bounds(), "{name}");
    }
  }

  #[test]
  fn test_result_shape_follows_constraint_count() {
    let mut rng = StdRng::seed_from_u64(1);
    for (name, level) in instances() {
      let params = ProblemParams::builder().level(level).build();
      let adapter = ProblemAdapter::new(name, params).unwrap();
      let evaluation = adapter.evaluate(&adapter.sample(&mut rng)).unwrap();
      assert_eq!(evaluation.objectives().len(), adapter.objective_count());
      match evaluation {
        Evaluation::Unconstrained { .. } => {
          assert_eq!(adapter.constraint_count(), 0, "{name}")
        }
        Evaluation::Constrained { constraints, .. } => {
          assert!(adapter.constraint_count() > 0, "{name}");
          assert_eq!(constraints.len(), adapter.constraint_count(), "{name}");
        }
      }
    }
  }

  #[test]
  fn test_evaluation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(2);
    for (name, level) in instances() {
      let adapter = ProblemAdapter::new(name, native(level)).unwrap();
      for _ in 0..10 {
        let x = adapter.sample(&mut rng);
        assert_eq!(adapter.evaluate(&x).unwrap(), adapter.evaluate(&x).unwrap());
      }
    }
  }

  #[test]
  fn test_unknown_problem() {
    let result = ProblemAdapter::new("HPA131", ProblemParams::default());
    assert!(matches!(
      result,
      Err(BuildError::UnknownProblem { ref name, .. }) if name == "HPA131"
    ));
  }

  #[test]
  fn test_params_are_kept() {
    let params = ProblemParams::builder().n_div(9).build();
    let adapter = ProblemAdapter::new("ZDT", params).unwrap();
    assert_eq!(adapter.name(), "ZDT");
    assert_eq!(adapter.params(), Some(&params));
    assert_eq!(adapter.variable_count(), 10);
    assert_eq!(adapter.problem().nx(), 10);
  }

  #[test]
  fn test_custom_registry() {
    let mut registry = Registry::new();
    registry
      .register("HPA131", |params: &ProblemParams| {
        let bounds = Bounds::new(vec![-1.0; params.n_div], vec![3.0; params.n_div]);
        let problem = from_fn(bounds, 1, 0, |x: &[f64]| {
          Ok(Evaluation::Unconstrained {
            objectives: vec![x.iter().sum()],
          })
        });
        Ok(Box::new(problem) as BoxedProblem)
      })
      .unwrap();
    let adapter =
      ProblemAdapter::with_registry(&registry, "HPA131", native(0)).unwrap();
    assert_eq!(adapter.lower_bounds(), &[-1.0; 4]);
    assert_eq!(adapter.upper_bounds(), &[3.0; 4]);
    assert!(ProblemAdapter::with_registry(&registry, "ZDT", native(0)).is_err());
  }

  #[test]
  fn test_domain_failures_propagate_unchanged() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let problem = from_fn(Bounds::unit(2), 1, 0, move |_: &[f64]| {
      counter.fetch_add(1, Ordering::Relaxed);
      Err(EvaluationError::Domain("diverged".into()))
    });
    let adapter = ProblemAdapter::from_problem("FAIL", problem, true).unwrap();
    let err = adapter.evaluate(&[0.5, 0.5]).unwrap_err();
    assert_eq!(err.to_string(), "diverged");
    // no retries
    assert_eq!(calls.load(Ordering::Relaxed), 1);
  }

  #[test]
  fn test_no_validation_of_decision_vector() {
    // the adapter forwards whatever it gets
    let problem = from_fn(Bounds::unit(2), 1, 0, |x: &[f64]| {
      Ok(Evaluation::Unconstrained {
        objectives: vec![x.len() as f64],
      })
    });
    let adapter = ProblemAdapter::from_problem("ANY", problem, true).unwrap();
    let evaluation = adapter.evaluate(&[5.0, -5.0, 5.0]).unwrap();
    assert_eq!(evaluation.objectives(), &[3.0]);
  }

  #[test]
  fn test_shape_mismatch() {
    let missing_constraints = from_fn(Bounds::unit(1), 2, 1, |_: &[f64]| {
      Ok(Evaluation::Unconstrained {
        objectives: vec![0.0, 0.0],
      })
    });
    let adapter =
      ProblemAdapter::from_problem("P", missing_constraints, false).unwrap();
    assert!(matches!(
      adapter.evaluate(&[0.0]),
      Err(EvaluationError::ShapeMismatch {
        objectives: 2,
        constraints: 1,
        found: "unconstrained",
        found_objectives: 2,
        found_constraints: 0,
      })
    ));

    let extra_objective = from_fn(Bounds::unit(1), 1, 0, |_: &[f64]| {
      Ok(Evaluation::Unconstrained {
        objectives: vec![0.0, 0.0],
      })
    });
    let adapter =
      ProblemAdapter::from_problem("P", extra_objective, false).unwrap();
    assert!(matches!(
      adapter.evaluate(&[0.0]),
      Err(EvaluationError::ShapeMismatch { found_objectives: 2, .. })
    ));

    let empty_constraints = from_fn(Bounds::unit(1), 1, 0, |_: &[f64]| {
      Ok(Evaluation::Constrained {
        objectives: vec![0.0],
        constraints: vec![],
      })
    });
    let adapter =
      ProblemAdapter::from_problem("P", empty_constraints, false).unwrap();
    let err = adapter.evaluate(&[0.0]).unwrap_err();
    assert!(matches!(
      err,
      EvaluationError::ShapeMismatch { found: "constrained", .. }
    ));
    assert!(err.to_string().contains("got constrained result"));
  }

  #[test]
  fn test_bounds_mismatch() {
    struct Broken;
    impl DomainProblem for Broken {
      fn nx(&self) -> usize {
        3
      }
      fn nf(&self) -> usize {
        1
      }
      fn ng(&self) -> usize {
        0
      }
      fn lower_bounds(&self) -> &[f64] {
        &[0.0; 3]
      }
      fn upper_bounds(&self) -> &[f64] {
        &[1.0; 2]
      }
      fn evaluate(&self, _: &[f64]) -> EvaluationResult<Evaluation> {
        unreachable!()
      }
    }

    // checked even when the bounds would be replaced by the unit hypercube
    assert_eq!(
      ProblemAdapter::from_problem("BROKEN", Broken, true).unwrap_err(),
      BuildError::BoundsMismatch {
        problem: "BROKEN".into(),
        nx: 3,
        lower: 3,
        upper: 2,
      }
    );
  }

  #[test]
  fn test_inverted_bounds() {
    let problem =
      from_fn(Bounds::unit(2), 1, 0, |_: &[f64]| unreachable!());
    assert!(ProblemAdapter::from_problem("OK", problem, false).is_ok());

    struct Inverted;
    impl DomainProblem for Inverted {
      fn nx(&self) -> usize {
        2
      }
      fn nf(&self) -> usize {
        1
      }
      fn ng(&self) -> usize {
        0
      }
      fn lower_bounds(&self) -> &[f64] {
        &[0.0, 2.0]
      }
      fn upper_bounds(&self) -> &[f64] {
        &[1.0, 1.0]
      }
      fn evaluate(&self, _: &[f64]) -> EvaluationResult<Evaluation> {
        unreachable!()
      }
    }
    assert_eq!(
      ProblemAdapter::from_problem("INV", Inverted, false).unwrap_err(),
      BuildError::InvalidBounds {
        problem: "INV".into(),
        source: BoundsError::Inverted { index: 1 },
      }
    );
  }

  // bounds `sample` could never draw from
  struct Unbounded(Vec<f64>, Vec<f64>);

  impl DomainProblem for Unbounded {
    fn nx(&self) -> usize {
      self.0.len()
    }
    fn nf(&self) -> usize {
      1
    }
    fn ng(&self) -> usize {
      0
    }
    fn lower_bounds(&self) -> &[f64] {
      &self.0
    }
    fn upper_bounds(&self) -> &[f64] {
      &self.1
    }
    fn evaluate(&self, _: &[f64]) -> EvaluationResult<Evaluation> {
      unreachable!()
    }
  }

  #[test]
  fn test_non_finite_bounds() {
    for normalized in [false, true] {
      let infinite = Unbounded(vec![0.0, 0.0], vec![1.0, f64::INFINITY]);
      assert_eq!(
        ProblemAdapter::from_problem("INF", infinite, normalized).unwrap_err(),
        BuildError::InvalidBounds {
          problem: "INF".into(),
          source: BoundsError::NotFinite { index: 1 },
        }
      );
      let too_wide = Unbounded(vec![-f64::MAX], vec![f64::MAX]);
      assert!(matches!(
        ProblemAdapter::from_problem("WIDE", too_wide, normalized),
        Err(BuildError::InvalidBounds {
          source: BoundsError::NotFinite { index: 0 },
          ..
        })
      ));
    }
    // large but finite widths are fine to sample from
    let wide = Unbounded(vec![-1e300], vec![1e300]);
    let adapter = ProblemAdapter::from_problem("WIDE", wide, false).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    assert!(adapter.bounds().check(&adapter.sample(&mut rng)).is_ok());
  }

  #[test]
  fn test_registry_problem_is_not_reboxed() {
    let mut registry = Registry::new();
    registry
      .register("UNIT", |_: &ProblemParams| {
        let problem = from_fn(Bounds::unit(1), 1, 0, |_: &[f64]| {
          Ok(Evaluation::Unconstrained {
            objectives: vec![0.0],
          })
        });
        Ok(Box::new(problem) as BoxedProblem)
      })
      .unwrap();
    let params = ProblemParams::default();
    let boxed = registry.create("UNIT", &params).unwrap();
    let address = &*boxed as *const _ as *const ();
    let adapter = ProblemAdapter::from_boxed("UNIT".into(), boxed, true).unwrap();
    let wrapped = adapter.problem() as *const dyn DomainProblem as *const ();
    assert_eq!(address, wrapped);
    assert_eq!(adapter.evaluate(&[0.5]).unwrap().objectives(), &[0.0]);
  }

  #[test]
  fn test_adapter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProblemAdapter>();

    let adapter = Arc::new(ProblemAdapter::new("SCH", native(0)).unwrap());
    let handles: Vec<_> = [0.0, 2.0]
      .into_iter()
      .map(|x| {
        let adapter = Arc::clone(&adapter);
        std::thread::spawn(move || adapter.evaluate(&[x]).unwrap())
      })
      .collect();
    let evaluations: Vec<_> =
      handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(evaluations[0].objectives(), &[0.0, 4.0]);
    assert_eq!(evaluations[1].objectives(), &[4.0, 0.0]);
  }

  #[test]
  fn test_evaluate_batch() {
    let adapter = ProblemAdapter::new("SCH", native(0)).unwrap();
    let evaluations = adapter.evaluate_batch(&[vec![0.0], vec![2.0]]).unwrap();
    assert_eq!(evaluations[0].objectives(), &[0.0, 4.0]);
    assert_eq!(evaluations[1].objectives(), &[4.0, 0.0]);
    assert!(matches!(
      adapter.evaluate_batch(&[[0.0], [20.0], [1.0]]),
      Err(EvaluationError::OutOfBounds { index: 0, .. })
    ));
  }
}
