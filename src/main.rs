use wordvec_plot::prelude::*;
use wordvec_plot::print_if;

const VERBOSE: bool = cfg!(feature = "verbose");

/// Length of the sample vectors
const DIM: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = ["king", "queen", "prince"];
    let vecs = generate_word_vecs(words.len(), DIM);

    let plot = make_word_vec_plot(&words, &vecs, None)?;

    #[cfg(feature = "verbose")]
    wordvec_plot::utils::print_grid_with_title("Word vectors", plot.grid(), 6);

    plot.save_default()?;

    let (rows, dims) = plot.shape();
    print_if!(
        VERBOSE,
        "Saved {rows}×{dims} word-vector heatmap to {}",
        plot.config().path
    );

    Ok(())
}
