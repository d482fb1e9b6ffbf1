//! Logistic-regression binary classifier

use super::SparseVector;

/// Training hyperparameters.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Gradient-descent step size.
    pub learning_rate: f64,
    /// Iteration cap for the maximum-likelihood fit.
    pub max_iterations: usize,
    /// Early-stop tolerance on the change in mean logistic loss.
    pub tolerance: f64,
    /// Fraction of the corpus held out for the training summary.
    pub holdout_fraction: f64,
    /// RNG seed for the reproducible holdout split.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 1000,
            tolerance: 1e-6,
            holdout_fraction: 0.2,
            seed: 42,
        }
    }
}

/// A fitted linear binary classifier: learned weights over the vocabulary
/// feature space plus an intercept. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticRegression {
    /// Fit by batch gradient descent on the logistic loss.
    ///
    /// `rows` are sparse count vectors over a feature space of `n_features`
    /// dimensions; `targets` hold 1.0 for scam examples and 0.0 otherwise.
    /// Stops at `options.max_iterations` or when the mean loss change drops
    /// below `options.tolerance`.
    pub fn fit(
        rows: &[SparseVector],
        targets: &[f64],
        n_features: usize,
        options: &TrainOptions,
    ) -> Self {
        debug_assert_eq!(rows.len(), targets.len());

        let mut weights = vec![0.0; n_features];
        let mut bias = 0.0;
        let n = rows.len() as f64;
        let mut previous_loss = f64::INFINITY;

        for _ in 0..options.max_iterations {
            let mut weight_grad = vec![0.0; n_features];
            let mut bias_grad = 0.0;
            let mut loss = 0.0;

            for (row, &target) in rows.iter().zip(targets) {
                let p = sigmoid(dot(&weights, row) + bias);
                let error = p - target;

                for &(idx, count) in row {
                    weight_grad[idx] += error * count;
                }
                bias_grad += error;
                loss += logistic_loss(p, target);
            }

            for (w, g) in weights.iter_mut().zip(&weight_grad) {
                *w -= options.learning_rate * g / n;
            }
            bias -= options.learning_rate * bias_grad / n;

            let mean_loss = loss / n;
            if (previous_loss - mean_loss).abs() < options.tolerance {
                break;
            }
            previous_loss = mean_loss;
        }

        Self { weights, bias }
    }

    /// Probability that the example is a scam.
    pub fn predict_proba(&self, features: &SparseVector) -> f64 {
        sigmoid(dot(&self.weights, features) + self.bias)
    }

    /// Binary decision, thresholded at 0.5.
    pub fn predict(&self, features: &SparseVector) -> bool {
        self.predict_proba(features) >= 0.5
    }
}

fn dot(weights: &[f64], features: &SparseVector) -> f64 {
    features
        .iter()
        .map(|&(idx, count)| weights[idx] * count)
        .sum()
}

/// Numerically stable logistic sigmoid.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

fn logistic_loss(p: f64, target: f64) -> f64 {
    // Clamp away from 0 and 1 so the log never produces infinities.
    let p = p.clamp(1e-12, 1.0 - 1e-12);
    -(target * p.ln() + (1.0 - target) * (1.0 - p).ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_properties() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!(sigmoid(10.0) > 0.999);
        assert!(sigmoid(-10.0) < 0.001);

        assert!(sigmoid(1000.0).is_finite());
        assert!(sigmoid(-1000.0).is_finite());
    }

    #[test]
    fn test_fit_separable_data() {
        // Feature 0 marks scams, feature 1 marks safe examples.
        let rows: Vec<SparseVector> = vec![
            vec![(0, 1.0)],
            vec![(0, 2.0)],
            vec![(1, 1.0)],
            vec![(1, 2.0)],
        ];
        let targets = vec![1.0, 1.0, 0.0, 0.0];

        let model = LogisticRegression::fit(&rows, &targets, 2, &TrainOptions::default());

        assert!(model.predict(&vec![(0, 1.0)]));
        assert!(!model.predict(&vec![(1, 1.0)]));
    }

    #[test]
    fn test_predict_is_deterministic() {
        let rows: Vec<SparseVector> = vec![vec![(0, 1.0)], vec![(1, 1.0)]];
        let targets = vec![1.0, 0.0];
        let model = LogisticRegression::fit(&rows, &targets, 2, &TrainOptions::default());

        let features: SparseVector = vec![(0, 1.0), (1, 1.0)];
        assert_eq!(model.predict_proba(&features), model.predict_proba(&features));
    }

    #[test]
    fn test_empty_features_uses_bias() {
        let rows: Vec<SparseVector> = vec![vec![(0, 1.0)], vec![(1, 1.0)]];
        let targets = vec![1.0, 0.0];
        let model = LogisticRegression::fit(&rows, &targets, 2, &TrainOptions::default());

        // A vector with no known tokens still produces a decision.
        let p = model.predict_proba(&vec![]);
        assert!((0.0..=1.0).contains(&p));
    }
}
