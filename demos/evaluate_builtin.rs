//! Evaluates random decision vectors of every built-in problem.

use hpa_adapter::{
  Evaluation,
  ProblemAdapter,
  ProblemParams,
  Registry,
  SolverProblem,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
  let mut rng = StdRng::seed_from_u64(0);
  let registry = Registry::builtin();
  for name in registry.names() {
    // native bounds, so decision vectors are printed in problem units
    let params = ProblemParams::builder().normalized(false).build();
    let adapter = ProblemAdapter::with_registry(&registry, name, params)
      .unwrap_or_else(|e| panic!("{e}"));
    println!(
      "{name}: nx={}, nf={}, ng={}",
      adapter.variable_count(),
      adapter.objective_count(),
      adapter.constraint_count(),
    );

    for _ in 0..3 {
      let x = adapter.sample(&mut rng);
      let xs = x.iter().map(|v| format!("{v:.3}")).collect::<Vec<_>>();
      match adapter.evaluate(&x) {
        Ok(Evaluation::Unconstrained { objectives }) => {
          println!("  x = [{}] f = {objectives:.4?}", xs.join(", "))
        }
        Ok(Evaluation::Constrained {
          objectives,
          constraints,
        }) => println!(
          "  x = [{}] f = {objectives:.4?} g = {constraints:.4?}",
          xs.join(", ")
        ),
        Err(e) => println!("  x = [{}] failed: {e}", xs.join(", ")),
      }
    }
  }
}
