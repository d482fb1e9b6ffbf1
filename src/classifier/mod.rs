//! Bag-of-words URL classifier
//!
//! A count vectorizer plus a logistic-regression model, fitted once at startup
//! and frozen for the lifetime of the process.

pub mod model;
pub mod pipeline;
pub mod vectorizer;

pub use model::{LogisticRegression, TrainOptions};
pub use pipeline::{Pipeline, TrainingSummary};
pub use vectorizer::CountVectorizer;

/// Sparse feature vector: (feature index, count) pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;
