//! Unit tests organized to mirror the crate module tree

mod algorithm;
mod io;
