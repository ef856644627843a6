//! A single screen of renderable content.

use derive_getters::Getters;
use derive_new::new;

/// An ordered, immutable sequence of text lines representing one screen of
/// content.
///
/// Pages are produced by the [`Paginator`](crate::Paginator) and already carry
/// the configured prefix/suffix wrapping, so `text()` is the exact string sent
/// to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Page {
    /// The lines of this page, in display order.
    lines: Vec<String>,
}

impl Page {
    /// Build a page from anything yielding line-like strings.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(Into::into).collect())
    }

    /// The page rendered as a single string, lines joined by newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Serialized length in characters, the quantity bounded by
    /// [`PageLimits::max_size`](crate::PageLimits).
    pub fn len(&self) -> usize {
        self.text().chars().count()
    }

    /// Whether the page holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_lines() {
        let page = Page::from_lines(["alpha", "beta"]);
        assert_eq!(page.text(), "alpha\nbeta");
        assert_eq!(page.line_count(), 2);
    }

    #[test]
    fn empty_page() {
        let page = Page::from_lines(Vec::<String>::new());
        assert!(page.is_empty());
        assert_eq!(page.text(), "");
    }
}
