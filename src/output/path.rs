//! Path placeholder rendering
//!
//! Folder segments and filenames may carry two placeholders, replaced by
//! literal substring substitution: `{date}` becomes the run's date stamp
//! and `{index}` becomes the zero-padded write counter. Anything else in
//! braces passes through untouched; this is not a template language.

/// The date placeholder recognized in folder segments and filenames
pub const DATE_PLACEHOLDER: &str = "{date}";

/// The index placeholder recognized in filenames
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Replace `{date}` in a path segment with the given stamp
pub fn render_date(segment: &str, stamp: &str) -> String {
    segment.replace(DATE_PLACEHOLDER, stamp)
}

/// Replace `{index}` in a filename template with the padded counter
///
/// The counter is zero-padded to `width` digits. A counter wider than
/// `width` is rendered in full, never truncated.
pub fn render_index(template: &str, index: u64, width: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &format!("{index:0width$}"))
}
