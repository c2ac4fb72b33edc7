//! Single-review mode: log in, show the user, analyze one review.

mod runner;

pub use runner::{OneShotError, OneShotRun};
