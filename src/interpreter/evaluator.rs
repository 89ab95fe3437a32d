/// Core execution logic and context management.
///
/// Contains the runtime context owning the variable store and the output
/// sink, and the depth-first walk over statements.
pub mod core;

/// Expression and condition evaluation.
///
/// Resolves operand text against the variable store and evaluates
/// three-token comparisons with integer semantics.
pub mod expression;

/// Output events.
///
/// Defines the user-visible events produced by executed statements and the
/// sinks that receive them.
pub mod event;
