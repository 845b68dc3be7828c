//! Decision tree regression (CART-style variance-reduction splits).

use crate::error::{GridstatError, Result};

/// A fitted regression tree.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    root: Node,
    /// Sum of squared-error reduction attributed to each feature during
    /// fitting. Consumed by the forest's importance vector.
    pub(crate) importances: Vec<f64>,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Tree hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    /// Maximum depth of the tree.
    pub max_depth: usize,
    /// Minimum samples a node must hold to be split further.
    pub min_leaf_samples: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 5,
            min_leaf_samples: 2,
        }
    }
}

impl RegressionTree {
    /// Fit a tree on the given rows.
    pub fn fit(x: &[Vec<f64>], y: &[f64], params: TreeParams) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(GridstatError::Validation(
                "Decision tree requires non-empty, equal-length inputs".to_string(),
            ));
        }
        if params.max_depth == 0 {
            return Err(GridstatError::Validation(
                "max_depth must be at least 1".to_string(),
            ));
        }

        let n_features = x[0].len();
        let indices: Vec<usize> = (0..x.len()).collect();
        let mut importances = vec![0.0; n_features];
        let root = build(x, y, &indices, 0, params, &mut importances);

        Ok(Self { root, importances })
    }

    /// Predict a single row.
    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row.get(*feature).copied().unwrap_or(0.0) <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Number of leaves, for diagnostics.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Split { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }
}

fn build(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    depth: usize,
    params: TreeParams,
    importances: &mut [f64],
) -> Node {
    let node_mean = indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64;

    if depth >= params.max_depth || indices.len() < params.min_leaf_samples.max(2) {
        return Node::Leaf { value: node_mean };
    }

    let Some(split) = best_split(x, y, indices) else {
        return Node::Leaf { value: node_mean };
    };

    importances[split.feature] += split.sse_reduction;

    let left = build(x, y, &split.left_indices, depth + 1, params, importances);
    let right = build(x, y, &split.right_indices, depth + 1, params, importances);

    Node::Split {
        feature: split.feature,
        threshold: split.threshold,
        left: Box::new(left),
        right: Box::new(right),
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    sse_reduction: f64,
    left_indices: Vec<usize>,
    right_indices: Vec<usize>,
}

/// Exhaustive search over features and midpoint thresholds for the split
/// with the largest sum-of-squared-error reduction.
fn best_split(x: &[Vec<f64>], y: &[f64], indices: &[usize]) -> Option<BestSplit> {
    let n_features = x[indices[0]].len();
    let parent_sse = sse(y, indices);

    let mut best: Option<BestSplit> = None;

    for feature in 0..n_features {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_by(|&a, &b| {
            x[a][feature]
                .partial_cmp(&x[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for cut in 1..sorted.len() {
            let lo = x[sorted[cut - 1]][feature];
            let hi = x[sorted[cut]][feature];
            if lo == hi {
                continue;
            }
            let threshold = (lo + hi) / 2.0;

            let left: Vec<usize> = sorted[..cut].to_vec();
            let right: Vec<usize> = sorted[cut..].to_vec();

            let reduction = parent_sse - sse(y, &left) - sse(y, &right);
            if reduction <= 0.0 {
                continue;
            }

            let better = match &best {
                Some(b) => reduction > b.sse_reduction,
                None => true,
            };
            if better {
                best = Some(BestSplit {
                    feature,
                    threshold,
                    sse_reduction: reduction,
                    left_indices: left,
                    right_indices: right,
                });
            }
        }
    }

    best
}

fn sse(y: &[f64], indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    let mean = indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64;
    indices.iter().map(|&i| (y[i] - mean).powi(2)).sum()
}
