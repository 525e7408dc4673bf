use plotters::drawing::DrawingAreaErrorKind;
use plotters_backend::DrawingErrorKind;
use thiserror::Error;

/// Errors raised while building or rendering a word-vector plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// No labels, no vectors, or vectors of length zero.
    #[error("nothing to plot: labels and vectors must be non-empty")]
    EmptyInput,

    #[error("got {labels} labels for {vectors} vectors")]
    LabelCountMismatch { labels: usize, vectors: usize },

    #[error("vector {row} has length {found}, expected {expected}")]
    RaggedVectors {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot stack vectors: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("font error: {0}")]
    Font(String),

    #[error("drawing error: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        match err {
            DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(e)) => {
                PlotError::Font(e.to_string())
            }
            other => PlotError::Drawing(other.to_string()),
        }
    }
}
