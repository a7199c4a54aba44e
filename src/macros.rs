/// Builds a `Vec<Heading>` from `level => text` pairs.
///
/// ```rust
/// use tocdown::{headings, Heading};
///
/// let outline = headings![
///     1 => "Introduction",
///     2 => "Scope",
/// ];
/// assert_eq!(outline[1], Heading::new(2, "Scope"));
/// ```
#[macro_export]
macro_rules! headings {
    // Handle empty outline
    () => {
        ::std::vec::Vec::<$crate::Heading>::new()
    };

    ($($level:expr => $text:expr),+ $(,)?) => {
        vec![$($crate::Heading::new($level, $text)),+]
    };
}
