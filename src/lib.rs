//! Heatmaps of word embedding vectors.
//!
//! Each word becomes one row of the image, each vector dimension one column,
//! colored with a diverging blue-white-red scale centered at zero.
//!
//! ```no_run
//! use wordvec_plot::prelude::*;
//!
//! let words = ["king", "queen", "prince"];
//! let vecs = generate_word_vecs(words.len(), 100);
//!
//! let plot = make_word_vec_plot(&words, &vecs, None).unwrap();
//! plot.save("tmp.png").unwrap();
//! ```

pub mod chart;
pub mod colormap;
pub mod error;
pub mod grid;
pub mod macros;
pub mod prelude;
pub mod utils;

pub use chart::{make_word_vec_plot, ChartConfig, WordVecPlot};
pub use error::PlotError;
pub use grid::WordGrid;
