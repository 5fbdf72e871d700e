//! Registers a problem defined outside of the crate and adapts it by name.

use hpa_adapter::{
  problem::from_fn,
  registry::BoxedProblem,
  Bounds,
  BuildError,
  Evaluation,
  ProblemAdapter,
  ProblemParams,
  Registry,
  SolverProblem,
};

// a wing split into `n_div` panels, each with a chord length in metres.
// minimizes area and the squared deviation from an elliptic chord
// distribution, the total area must be at least 2.5 square metres
fn wing(params: &ProblemParams) -> Result<BoxedProblem, BuildError> {
  let n_div = params.n_div;
  let normalized = params.normalized;
  let bounds = Bounds::uniform(n_div, 0.3, 1.2);
  let native = bounds.clone();
  let problem = from_fn(bounds, 2, 1, move |x: &[f64]| {
    let chords = native.to_native(x, normalized)?;
    let span = 12.0 / n_div as f64;
    let area: f64 = chords.iter().map(|c| c * span).sum();
    let deviation: f64 = chords
      .iter()
      .enumerate()
      .map(|(i, c)| {
        let eta = (i as f64 + 0.5) / n_div as f64;
        (c - (1.0 - eta * eta).sqrt()).powi(2)
      })
      .sum();
    Ok(Evaluation::Constrained {
      objectives: vec![area, deviation],
      constraints: vec![2.5 - area],
    })
  });
  Ok(Box::new(problem))
}

fn main() {
  let mut registry = Registry::builtin();
  registry.register("WING", wing).unwrap_or_else(|e| panic!("{e}"));

  let adapter =
    ProblemAdapter::with_registry(&registry, "WING", ProblemParams::default())
      .unwrap_or_else(|e| panic!("{e}"));
  println!("{adapter:?}");

  let x = vec![0.5; adapter.variable_count()];
  match adapter.evaluate(&x) {
    Ok(evaluation) => println!(
      "f = {:?}, violation = {}, feasible = {}",
      evaluation.objectives(),
      evaluation.violation(),
      evaluation.is_feasible()
    ),
    Err(e) => println!("evaluation failed: {e}"),
  }

  // names are case sensitive
  if let Err(e) =
    ProblemAdapter::with_registry(&registry, "wing", ProblemParams::default())
  {
    println!("{e}");
  }
}
