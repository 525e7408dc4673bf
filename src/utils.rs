use crate::grid::WordGrid;
use prettytable::{row, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Generates `count` random word vectors of length `dim`, each element drawn
/// from the standard normal distribution.
pub fn generate_word_vecs(count: usize, dim: usize) -> Vec<Vec<f64>> {
    let mut rng = rand::rng();
    normal_vecs(&mut rng, count, dim)
}

/// Same as [`generate_word_vecs`] but reproducible for a given `seed`.
pub fn generate_word_vecs_seeded(count: usize, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    normal_vecs(&mut rng, count, dim)
}

fn normal_vecs<R: Rng>(rng: &mut R, count: usize, dim: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|_| (0..dim).map(|_| standard_normal(rng)).collect())
        .collect()
}

/// Box-Muller transform over two uniform samples.
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // u1 in (0, 1] so that ln(u1) stays finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Prints a summary table of the grid: one line per word with its first
/// `max_columns` values, min and max.
pub fn print_grid(grid: &WordGrid, max_columns: usize) {
    let mut table = Table::new();
    table.add_row(row!["Word", "Values", "Min", "Max"]);

    for (label, values) in grid.labels().iter().zip(grid.data().rows()) {
        let shown: Vec<String> = values
            .iter()
            .take(max_columns)
            .map(|v| format!("{v:.3}"))
            .collect();
        let mut shown = shown.join(", ");
        if values.len() > max_columns {
            shown.push_str(", ...");
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        table.add_row(row![label, shown, format!("{min:.3}"), format!("{max:.3}")]);
    }

    table.printstd();
}

pub fn print_grid_with_title(title: &str, grid: &WordGrid, max_columns: usize) {
    println!("{title}");
    print_grid(grid, max_columns);
}
