use crate::error::PlotError;
use ndarray::{stack, Array1, Array2, ArrayView1, Axis};
use num_traits::AsPrimitive;

/// Labeled word vectors stacked into a `rows × dims` matrix.
///
/// Row `i` holds the vector for `labels[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordGrid {
    labels: Vec<String>,
    data: Array2<f64>,
}

impl WordGrid {
    /// Stacks `vectors` row by row and attaches `labels`.
    ///
    /// # Errors
    /// * `EmptyInput` when there are no rows or the vectors have no elements
    /// * `LabelCountMismatch` when `labels` and `vectors` differ in length
    /// * `RaggedVectors` when a vector's length differs from the first one
    pub fn stack<S, V, F>(labels: &[S], vectors: &[V]) -> Result<Self, PlotError>
    where
        S: AsRef<str>,
        V: AsRef<[F]>,
        F: AsPrimitive<f64>,
    {
        if labels.is_empty() || vectors.is_empty() {
            return Err(PlotError::EmptyInput);
        }

        if labels.len() != vectors.len() {
            return Err(PlotError::LabelCountMismatch {
                labels: labels.len(),
                vectors: vectors.len(),
            });
        }

        let expected = vectors[0].as_ref().len();
        if let Some((row, v)) = vectors
            .iter()
            .enumerate()
            .find(|(_, v)| v.as_ref().len() != expected)
        {
            return Err(PlotError::RaggedVectors {
                row,
                expected,
                found: v.as_ref().len(),
            });
        }

        if expected == 0 {
            return Err(PlotError::EmptyInput);
        }

        let rows: Vec<Array1<f64>> = vectors
            .iter()
            .map(|v| v.as_ref().iter().map(|&x| x.as_()).collect())
            .collect();
        let views: Vec<ArrayView1<'_, f64>> = rows.iter().map(|r| r.view()).collect();
        let data = stack(Axis(0), &views)?;

        Ok(WordGrid {
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
            data,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// `(rows, dims)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn dims(&self) -> usize {
        self.data.ncols()
    }

    /// The vector stored under `label`, first match wins.
    pub fn row(&self, label: &str) -> Option<ArrayView1<'_, f64>> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.data.row(i))
    }

    /// Smallest and largest finite values in the grid.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Largest finite magnitude, the half-width of a zero-centered color scale.
    pub fn abs_max(&self) -> f64 {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }
}
