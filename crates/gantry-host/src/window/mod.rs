//! Window and event-loop plumbing.
//!
//! Crate-private: the loop is only entered through
//! [`Shell::run`](crate::shell::Shell::run).

pub(crate) mod runtime;
