//! Errors raised while building adapters and evaluating decision vectors.

use thiserror::Error;

/// An error returned when a problem or an adapter can't be constructed.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
  /// The name does not resolve to any registered problem.
  #[error("unknown problem `{name}`, expected one of: {}", .available.join(", "))]
  UnknownProblem {
    /// Requested name.
    name: String,
    /// Names known to the registry at the moment of lookup.
    available: Vec<String>,
  },
  /// A factory is already registered under this name.
  #[error("problem `{name}` is already registered")]
  AlreadyRegistered {
    /// Conflicting name.
    name: String,
  },
  /// The problem doesn't define the requested level.
  #[error("problem `{problem}` supports levels up to {max}, got {level}")]
  UnsupportedLevel {
    /// Problem name.
    problem: String,
    /// Requested level.
    level: u32,
    /// Highest level the problem defines.
    max: u32,
  },
  /// The subdivision count is too small for a scalable problem.
  #[error("problem `{problem}` needs at least {min} divisions, got {n_div}")]
  TooFewDivisions {
    /// Problem name.
    problem: String,
    /// Requested subdivision count.
    n_div: usize,
    /// Smallest accepted subdivision count.
    min: usize,
  },
  /// The problem reports bound vectors whose length differs from `nx`.
  #[error(
    "problem `{problem}` has {nx} variables but bounds of length {lower} and {upper}"
  )]
  BoundsMismatch {
    /// Problem name.
    problem: String,
    /// Reported number of variables.
    nx: usize,
    /// Length of the lower bound vector.
    lower: usize,
    /// Length of the upper bound vector.
    upper: usize,
  },
  /// The problem reports bounds that can't describe a box.
  #[error("problem `{problem}` has invalid bounds: {source}")]
  InvalidBounds {
    /// Problem name.
    problem: String,
    /// What is wrong with them.
    source: BoundsError,
  },
}

/// An error returned when lower and upper bound vectors don't form a finite
/// box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BoundsError {
  /// Vectors differ in length.
  #[error("{lower} lower bounds but {upper} upper bounds")]
  LengthMismatch {
    /// Length of the lower bound vector.
    lower: usize,
    /// Length of the upper bound vector.
    upper: usize,
  },
  /// A lower bound lies above its upper bound. `NaN` bounds are inverted too.
  #[error("lower bound exceeds upper bound of variable {index}")]
  Inverted {
    /// Index of the offending variable.
    index: usize,
  },
  /// A bound is infinite or the interval is too wide to be represented.
  #[error("bounds of variable {index} are not finite")]
  NotFinite {
    /// Index of the offending variable.
    index: usize,
  },
}

/// An error returned when a decision vector can't be evaluated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvaluationError {
  /// The decision vector has a wrong number of components.
  #[error("expected {expected} decision variables, got {found}")]
  DimensionMismatch {
    /// Number of variables of the problem.
    expected: usize,
    /// Length of the given decision vector.
    found: usize,
  },
  /// A component of the decision vector lies outside its bounds.
  #[error("variable {index} = {value} lies outside [{lower}, {upper}]")]
  OutOfBounds {
    /// Index of the offending component.
    index: usize,
    /// Its value.
    value: f64,
    /// Lower bound of the component.
    lower: f64,
    /// Upper bound of the component.
    upper: f64,
  },
  /// The problem returned a result that doesn't match its declared counts.
  #[error(
    "expected {objectives} objectives and {constraints} constraints, \
     got {found} result with {found_objectives} objectives and \
     {found_constraints} constraints"
  )]
  ShapeMismatch {
    /// Declared number of objectives.
    objectives: usize,
    /// Declared number of constraints.
    constraints: usize,
    /// Returned variant, `constrained` or `unconstrained`.
    found: &'static str,
    /// Returned number of objectives.
    found_objectives: usize,
    /// Returned number of constraints, `0` for an unconstrained result.
    found_constraints: usize,
  },
  /// A failure raised by a user-supplied problem.
  #[error(transparent)]
  Domain(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A result type alias for evaluations.
pub type EvaluationResult<T, E = EvaluationError> = Result<T, E>;
