//! Resolved styles and the interaction-state combinator.
//!
//! Every component funnels through the same shape: semantic tokens plus a
//! `Theme` produce a `ResolvedStyle`, and the widget's `InteractionState`
//! picks the effective value of each property at paint time.

mod resolved;
pub use resolved::*;

mod state;
pub use state::*;
