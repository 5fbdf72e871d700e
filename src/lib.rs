//! **hpa-adapter** exposes named multi-objective design problems, such as
//! human-powered aircraft design problems, to optimization solvers through a
//! small, explicit interface.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! This crate defines a few abstractions which sit between a solver and the
//! problem it optimizes:
//! - **Domain problem** - the problem itself. It knows its number of variables
//!   `nx`, objectives `nf` and constraints `ng`, its native bounds and how to
//!   evaluate a decision vector. Represented by the [`DomainProblem`] trait
//! - **Registry** - a lookup table that maps problem names to factories, so a
//!   problem can be picked by a string from a config file or a command line.
//!   Represented by the [`Registry`] struct
//! - **Problem adapter** - instantiates a problem by name, reads its
//!   dimensions and bounds once and forwards each evaluation to it.
//!   Represented by the [`ProblemAdapter`] struct
//! - **Solver problem** - everything a solver needs to know about a problem.
//!   Represented by the [`SolverProblem`] trait, which [`ProblemAdapter`]
//!   implements. A solver integration only depends on this trait
//!
//! # Problems and parameters
//!
//! A problem is identified by its name and parameterized with
//! [`ProblemParams`]:
//! - `n_div` - subdivision count. Scalable problems derive their number of
//!   variables from it
//! - `level` - difficulty level. Each problem defines its own range of levels
//! - `normalized` - if set, decision vectors live in the unit hypercube and
//!   the problem rescales them to its native range on its own. The adapter
//!   then reports bounds `[0, 1]` for every variable
//!
//! The crate comes with a few reference problems registered in
//! [`Registry::builtin`]:
//!
//! | Name   | Variables      | Objectives | Constraints | Levels                |
//! |:-------|:--------------:|:----------:|:-----------:|:----------------------|
//! | `SCH`  | `1`            | `2`        | `0`         | `0` Schaffer No.1     |
//! | `BNH`  | `2`            | `2`        | `2`         | `0` Binh and Korn     |
//! | `ZDT`  | `1 + n_div`    | `2`        | `0`         | `0` ZDT1, `1` ZDT4    |
//! | `DTLZ` | `2 + n_div`    | `3`        | `0`         | `0` DTLZ2, `1` DTLZ3  |
//!
//! Your own problems are added with [`Registry::register`], either as a type
//! implementing [`DomainProblem`] or as a closure wrapped with
//! [`problem::from_fn`].
//!
//! # Evaluations
//!
//! Objectives are minimized. A constraint value `g` is satisfied when
//! `g <= 0`. The result of an evaluation is an [`Evaluation`], which is
//! [`Evaluation::Constrained`] for problems with constraints and
//! [`Evaluation::Unconstrained`] for problems without them, so callers have to
//! handle both cases explicitly.
//!
//! The adapter doesn't validate decision vectors, it forwards them to the
//! domain problem as is. Errors raised by the problem reach the caller
//! unchanged, nothing is retried. The only thing the adapter checks is that
//! the problem returns as many objectives and constraints as it declared.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: problem instantiation at the
//! `debug` level and every evaluation at the `trace` level. Install any
//! logger implementation to see these records.
//!
//! # Example
//!
//! Evaluate a few random decision vectors of the *ZDT4* problem with 9
//! variables:
//! ```
//! use hpa_adapter::{Evaluation, ProblemAdapter, ProblemParams, SolverProblem};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // a convenient builder from `typed-builder` crate, unset fields use defaults
//! let params = ProblemParams::builder().n_div(8).level(1).build();
//! let adapter = ProblemAdapter::new("ZDT", params).unwrap();
//! assert_eq!(adapter.variable_count(), 9);
//! // the problem is normalized by default
//! assert_eq!(adapter.lower_bounds(), &[0.0; 9]);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! for _ in 0..10 {
//!   let x = adapter.sample(&mut rng);
//!   match adapter.evaluate(&x).unwrap() {
//!     Evaluation::Unconstrained { objectives } => assert_eq!(objectives.len(), 2),
//!     Evaluation::Constrained { .. } => unreachable!("ZDT has no constraints"),
//!   }
//! }
//! ```
//!
//! You can find more examples in the *demos* folder in the root of the
//! project.

#![warn(missing_docs)]

pub mod adapter;
pub mod bounds;
pub mod error;
pub mod evaluation;
pub mod params;
pub mod problem;
pub mod registry;

pub use adapter::{ProblemAdapter, SolverProblem};
pub use bounds::Bounds;
pub use error::{BoundsError, BuildError, EvaluationError, EvaluationResult};
pub use evaluation::Evaluation;
pub use params::ProblemParams;
pub use problem::DomainProblem;
pub use registry::Registry;
