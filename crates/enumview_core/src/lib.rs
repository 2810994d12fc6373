//! Tagged-union value formatting for debugger value trees.

/// Case resolution, payload materialization, summaries, and the memory-image host.
pub mod inspect;
