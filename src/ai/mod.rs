//! Computer player strategies.
//!
//! Each `Difficulty` maps to a `MovePolicy` via `policy_for`. All policies
//! look at most one ply ahead.

pub mod policy;

pub use policy::{policy_for, BestMove, BlockingMove, MovePolicy, RandomMove};
