//! End-to-end tests spanning the whole gale stack, driven through the
//! facade crate's re-exports.

mod common;
