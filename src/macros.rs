/// Prints to stdout when `$cond` holds.
///
/// Modules pair it with `const VERBOSE: bool = cfg!(feature = "verbose");`
/// so progress output compiles away when the `verbose` feature is off.
///
/// ```rust
/// use wordvec_plot::print_if;
///
/// const VERBOSE: bool = true;
/// let (rows, dims) = (3, 100);
/// print_if!(VERBOSE, "stacked {rows} vectors of length {dims}");
/// ```
#[macro_export]
macro_rules! print_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            println!($($arg)*);
        }
    };
}
