//! Name to problem factory lookup table.

use std::{collections::BTreeMap, fmt};

use log::{debug, trace};

use crate::{
  error::BuildError,
  params::ProblemParams,
  problem::{
    binh_korn::BinhKorn,
    dtlz::Dtlz,
    schaffer::Schaffer,
    zdt::Zdt,
    DomainProblem,
  },
};

/// An owned, type-erased domain problem. Problems must be `Send + Sync` so
/// adapters can be shared across solver threads.
pub type BoxedProblem = Box<dyn DomainProblem + Send + Sync>;

/// Creates a domain problem from parameters.
pub type Factory =
  dyn Fn(&ProblemParams) -> Result<BoxedProblem, BuildError> + Send + Sync;

type BuiltinFactory = fn(&ProblemParams) -> Result<BoxedProblem, BuildError>;

/// A set of named problem factories.
///
/// Names are resolved through a lookup table, so the set of valid names can
/// always be listed with [`Registry::names`].
///
/// # Examples
/// ```
/// # use hpa_adapter::{problem::from_fn, Bounds, Evaluation, ProblemParams};
/// # use hpa_adapter::registry::{BoxedProblem, Registry};
/// let mut registry = Registry::builtin();
/// registry
///   .register("SPHERE", |params: &ProblemParams| {
///     let bounds = Bounds::uniform(params.n_div, -1.0, 1.0);
///     let problem = from_fn(bounds, 1, 0, |x: &[f64]| {
///       let objectives = vec![x.iter().map(|v| v * v).sum()];
///       Ok(Evaluation::Unconstrained { objectives })
///     });
///     Ok(Box::new(problem) as BoxedProblem)
///   })
///   .unwrap();
/// assert!(registry.contains("SPHERE"));
/// assert!(registry.create("sphere", &ProblemParams::default()).is_err());
/// ```
#[derive(Default)]
pub struct Registry {
  factories: BTreeMap<String, Box<Factory>>,
}

impl Registry {
  /// Creates an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a registry holding the reference problems of this crate:
  /// `BNH`, `DTLZ`, `SCH` and `ZDT`.
  pub fn builtin() -> Self {
    let mut registry = Self::new();
    let builtins: [(&str, BuiltinFactory); 4] = [
      (BinhKorn::NAME, |p| Ok(Box::new(BinhKorn::new(p)?) as BoxedProblem)),
      (Dtlz::NAME, |p| Ok(Box::new(Dtlz::new(p)?) as BoxedProblem)),
      (Schaffer::NAME, |p| Ok(Box::new(Schaffer::new(p)?) as BoxedProblem)),
      (Zdt::NAME, |p| Ok(Box::new(Zdt::new(p)?) as BoxedProblem)),
    ];
    for (name, factory) in builtins {
      registry.factories.insert(name.to_owned(), Box::new(factory));
    }
    registry
  }

  /// Registers a factory under `name`. Names are case sensitive.
  ///
  /// Fails if the name is already taken.
  pub fn register<F>(
    &mut self,
    name: impl Into<String>,
    factory: F,
  ) -> Result<(), BuildError>
  where
    F: Fn(&ProblemParams) -> Result<BoxedProblem, BuildError>
      + Send
      + Sync
      + 'static,
  {
    let name = name.into();
    if self.factories.contains_key(&name) {
      return Err(BuildError::AlreadyRegistered { name });
    }
    trace!("registering problem `{name}`");
    self.factories.insert(name, Box::new(factory));
    Ok(())
  }

  /// Returns `true` if a factory is registered under `name`.
  pub fn contains(&self, name: &str) -> bool {
    self.factories.contains_key(name)
  }

  /// Registered names in lexicographical order.
  pub fn names(&self) -> Vec<&str> {
    self.factories.keys().map(String::as_str).collect()
  }

  /// Instantiates the problem registered under `name`.
  ///
  /// Fails with [`BuildError::UnknownProblem`] if there is none, or with
  /// whatever the factory fails with.
  pub fn create(
    &self,
    name: &str,
    params: &ProblemParams,
  ) -> Result<BoxedProblem, BuildError> {
    let factory =
      self
        .factories
        .get(name)
        .ok_or_else(|| BuildError::UnknownProblem {
          name: name.to_owned(),
          available: self.names().into_iter().map(String::from).collect(),
        })?;
    let problem = factory(params)?;
    debug!(
      "created problem `{name}` with nx={}, nf={}, ng={}, {params:?}",
      problem.nx(),
      problem.nf(),
      problem.ng(),
    );
    Ok(problem)
  }
}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("names", &self.names())
      .finish()
  }
}
