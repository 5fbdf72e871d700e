//! Parameters a named problem is instantiated with.

use typed_builder::TypedBuilder;

/// Parameters that, together with a name, describe a problem instance.
///
/// Built with a convenient builder from the `typed-builder` crate, every field
/// has a default:
/// ```
/// # use hpa_adapter::ProblemParams;
/// let params = ProblemParams::builder().n_div(8).normalized(false).build();
/// assert_eq!(params.level, 0);
/// assert_eq!(ProblemParams::default().n_div, 4);
/// ```
#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemParams {
  /// Subdivision count. Scalable problems derive their number of variables
  /// from it, fixed-size problems ignore it.
  #[builder(default = 4)]
  pub n_div: usize,
  /// Difficulty level of the problem. Each problem defines its own range.
  #[builder(default = 0)]
  pub level: u32,
  /// If set, decision vectors live in the unit hypercube and the problem
  /// rescales them to its native range.
  #[builder(default = true)]
  pub normalized: bool,
}

impl Default for ProblemParams {
  fn default() -> Self {
    Self::builder().build()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let params = ProblemParams::default();
    assert_eq!(params.n_div, 4);
    assert_eq!(params.level, 0);
    assert!(params.normalized);
  }

  #[test]
  fn test_builder_overrides() {
    let params = ProblemParams::builder().level(1).normalized(false).build();
    assert_eq!(
      params,
      ProblemParams {
        n_div: 4,
        level: 1,
        normalized: false,
      }
    );
  }
}
