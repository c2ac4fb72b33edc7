//! Review and prediction domain.
//!
//! - [`review_text::ReviewText`] — a validated review to classify
//! - [`prediction::PredictionResult`] — label and confidence returned by the model

pub mod prediction;
pub mod review_text;
