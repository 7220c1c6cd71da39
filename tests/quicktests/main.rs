//! Property tests run against the public API.

mod build;
mod search;
mod tree;
