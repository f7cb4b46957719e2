//! Fixed-size grouping of ordered items into carousel slides.

use std::num::NonZeroUsize;

/// Products shown together on one carousel slide.
pub const SLIDE_WIDTH: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(width) => width,
    None => unreachable!(),
};

/// Split `items` into consecutive groups of `size`; the last group may be
/// shorter. Empty input yields no groups.
pub fn paginate<T>(items: &[T], size: NonZeroUsize) -> Vec<&[T]> {
    items.chunks(size.get()).collect()
}

/// Number of groups [`paginate`] would produce.
pub fn page_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
