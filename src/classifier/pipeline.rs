//! Fitted classification pipeline

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dataset::{Label, LabeledExample};

use super::{CountVectorizer, LogisticRegression, SparseVector, TrainOptions};

/// One-shot training report, logged at startup.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub corpus_size: usize,
    pub training_size: usize,
    pub holdout_size: usize,
    pub vocabulary_size: usize,
    /// Accuracy on the held-out partition, when one exists.
    pub holdout_accuracy: Option<f64>,
}

/// The frozen vectorizer + classifier pair.
///
/// Only constructible in fitted form, so there is no uninitialized-model state
/// reachable from a request handler. Share via `Arc`; every prediction reuses
/// the same frozen vocabulary and weights.
#[derive(Debug)]
pub struct Pipeline {
    vectorizer: CountVectorizer,
    model: LogisticRegression,
    summary: TrainingSummary,
}

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("training corpus is empty")]
    EmptyCorpus,
}

impl Pipeline {
    /// Fit the vectorizer and classifier on the labeled corpus.
    ///
    /// The corpus is shuffled with a fixed seed and split into training and
    /// holdout partitions; the model is fitted on the training partition and
    /// the holdout partition is scored for the training summary.
    pub fn fit(corpus: &[LabeledExample], options: &TrainOptions) -> Result<Self, TrainError> {
        if corpus.is_empty() {
            return Err(TrainError::EmptyCorpus);
        }

        let urls: Vec<&str> = corpus.iter().map(|example| example.url.as_str()).collect();
        let vectorizer = CountVectorizer::fit(&urls);

        let examples: Vec<(SparseVector, f64)> = corpus
            .iter()
            .map(|example| {
                let target = if example.label == Label::Scam { 1.0 } else { 0.0 };
                (vectorizer.transform(&example.url), target)
            })
            .collect();

        let mut indices: Vec<usize> = (0..examples.len()).collect();
        indices.shuffle(&mut StdRng::seed_from_u64(options.seed));

        let holdout_size = (examples.len() as f64 * options.holdout_fraction) as usize;
        let (holdout_idx, train_idx) = indices.split_at(holdout_size);

        let rows: Vec<SparseVector> = train_idx
            .iter()
            .map(|&i| examples[i].0.clone())
            .collect();
        let targets: Vec<f64> = train_idx.iter().map(|&i| examples[i].1).collect();

        let model =
            LogisticRegression::fit(&rows, &targets, vectorizer.vocabulary_size(), options);

        let holdout_accuracy = if holdout_idx.is_empty() {
            None
        } else {
            let correct = holdout_idx
                .iter()
                .filter(|&&i| {
                    let (features, target) = &examples[i];
                    model.predict(features) == (*target == 1.0)
                })
                .count();
            Some(correct as f64 / holdout_idx.len() as f64)
        };

        let summary = TrainingSummary {
            corpus_size: corpus.len(),
            training_size: train_idx.len(),
            holdout_size: holdout_idx.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
            holdout_accuracy,
        };

        Ok(Self {
            vectorizer,
            model,
            summary,
        })
    }

    /// Classify one URL through the frozen vectorizer and classifier.
    pub fn predict(&self, url: &str) -> Label {
        let features = self.vectorizer.transform(url);
        if self.model.predict(&features) {
            Label::Scam
        } else {
            Label::Safe
        }
    }

    pub fn summary(&self) -> &TrainingSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(url: &str, label: Label) -> LabeledExample {
        LabeledExample {
            url: url.to_string(),
            label,
        }
    }

    fn training_corpus() -> Vec<LabeledExample> {
        let mut corpus = Vec::new();
        for i in 0..10 {
            corpus.push(example(
                &format!("http://example{i}.com/home"),
                Label::Safe,
            ));
            corpus.push(example(
                &format!("http://free-prize{i}.biz/claim-reward"),
                Label::Scam,
            ));
        }
        corpus
    }

    #[test]
    fn test_fit_and_predict() {
        let pipeline = Pipeline::fit(&training_corpus(), &TrainOptions::default()).unwrap();

        assert_eq!(pipeline.predict("http://example3.com/home"), Label::Safe);
        assert_eq!(
            pipeline.predict("http://free-prize2.biz/claim-reward"),
            Label::Scam
        );
    }

    #[test]
    fn test_predict_is_deterministic() {
        let pipeline = Pipeline::fit(&training_corpus(), &TrainOptions::default()).unwrap();

        let url = "http://example.com/login";
        assert_eq!(pipeline.predict(url), pipeline.predict(url));
    }

    #[test]
    fn test_fit_is_reproducible() {
        let corpus = training_corpus();
        let first = Pipeline::fit(&corpus, &TrainOptions::default()).unwrap();
        let second = Pipeline::fit(&corpus, &TrainOptions::default()).unwrap();

        assert_eq!(
            first.summary().holdout_accuracy,
            second.summary().holdout_accuracy
        );
        for url in ["http://example.com", "http://claim-reward.biz"] {
            assert_eq!(first.predict(url), second.predict(url));
        }
    }

    #[test]
    fn test_training_summary_partitions() {
        let corpus = training_corpus();
        let pipeline = Pipeline::fit(&corpus, &TrainOptions::default()).unwrap();
        let summary = pipeline.summary();

        assert_eq!(summary.corpus_size, corpus.len());
        assert_eq!(
            summary.training_size + summary.holdout_size,
            summary.corpus_size
        );
        assert_eq!(summary.holdout_size, corpus.len() / 5);
        assert!(summary.holdout_accuracy.is_some());
    }

    #[test]
    fn test_empty_corpus_is_error() {
        assert!(matches!(
            Pipeline::fit(&[], &TrainOptions::default()),
            Err(TrainError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_unseen_tokens_still_classified() {
        let pipeline = Pipeline::fit(&training_corpus(), &TrainOptions::default()).unwrap();

        // Nothing in the vocabulary matches; the decision comes from the bias.
        let label = pipeline.predict("zzz://qqqq");
        assert!(label == Label::Scam || label == Label::Safe);
    }
}
