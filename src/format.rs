use std::fmt::Display;

/// Render a selection as a sorted, comma-separated list.
///
/// `[5, 3, 1, 0]` becomes `"0, 1, 3, 5"`; an empty selection renders as an
/// empty string.
pub fn format_selection<T: Ord + Copy + Display>(selection: &[T]) -> String {
    let mut sorted = selection.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
