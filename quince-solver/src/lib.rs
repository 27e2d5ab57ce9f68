//! # Quince
//! Quince is an instrumented solver for the assignment problem: given an
//! `N`×`N` matrix of costs, it finds the minimum-cost perfect matching
//! between `N` workers and `N` jobs. Its distinguishing feature is that the
//! exhaustive branch-and-bound procedure records every decision it takes --
//! node selections, expansions, prunings, and incumbent improvements -- as a
//! replayable event log next to the full search tree, so a client can render
//! the search frame by frame.
//!
//! # Solving an instance
//! The first step is constructing a validated [`CostMatrix`]:
//! ```rust
//! # use quince_solver::CostMatrix;
//! let matrix = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]])?;
//! # Ok::<(), quince_solver::InstanceError>(())
//! ```
//!
//! [`solve`] runs the branch-and-bound search and packages the optimum
//! together with the serialized search tree and history:
//! ```rust
//! # use quince_solver::CostMatrix;
//! # use quince_solver::solve;
//! # let matrix = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]])?;
//! let report = solve(&matrix);
//!
//! assert_eq!(report.cost, Some(2.0));
//! assert_eq!(report.assignment, vec![0, 1]);
//! # Ok::<(), quince_solver::InstanceError>(())
//! ```
//!
//! The search engine is one of several strategies sharing a common contract;
//! see [`StrategyKind`] and [`solve_with_strategy`] for selecting a sibling
//! heuristic over an [`Instance`].

pub(crate) mod basic_types;

#[doc(hidden)]
pub mod asserts;

pub mod branch_and_bound;
pub mod containers;
pub mod statistics;
pub mod strategies;

// We declare a private module with public use, so that all exports from API
// are exports directly from the crate.
//
// Example:
// `use quince_solver::StrategyKind;`
// vs.
// `use quince_solver::api::StrategyKind;`
mod api;

pub use api::*;

pub use crate::basic_types::CostMatrix;
pub use crate::basic_types::Instance;
pub use crate::basic_types::InstanceError;
