// Re-export common types for easier use
pub use crate::chart::{make_word_vec_plot, ChartConfig, ChartConfigBuilder, WordVecPlot};
pub use crate::colormap::{Colormap, Normalize};
pub use crate::error::PlotError;
pub use crate::grid::WordGrid;
pub use crate::utils::{generate_word_vecs, generate_word_vecs_seeded, print_grid};
