//! Packs an ordered stream of text lines into bounded pages.

use crate::Page;
use derive_getters::Getters;
use porter_error::{PaginateError, PaginateErrorKind};
use tracing::trace;

/// Size limits applied to every page produced by a [`Paginator`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PageLimits {
    /// Maximum serialized page length in characters, wrapping included.
    max_size: usize,
    /// Optional maximum number of content lines per page.
    max_lines: Option<usize>,
    /// Line placed at the top of every page (omitted when empty).
    prefix: String,
    /// Line placed at the bottom of every page (omitted when empty).
    suffix: String,
}

impl PageLimits {
    /// Create limits with explicit wrapping strings.
    pub fn new(
        max_size: usize,
        max_lines: Option<usize>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            max_size,
            max_lines,
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Limits with a line cap and no wrapping, the shape used by the help
    /// and roster sessions.
    pub fn with_max_lines(max_size: usize, max_lines: usize) -> Self {
        Self::new(max_size, Some(max_lines), "", "")
    }

    /// Characters available for content once the wrapping is accounted for.
    fn content_budget(&self) -> usize {
        let overhead = Self::line_overhead(&self.prefix) + Self::line_overhead(&self.suffix);
        self.max_size.saturating_sub(overhead)
    }

    /// A wrapping line costs its own length plus the joining newline.
    fn line_overhead(wrap: &str) -> usize {
        if wrap.is_empty() {
            0
        } else {
            wrap.chars().count() + 1
        }
    }
}

impl Default for PageLimits {
    /// Defaults sized to an embed description: 2048 characters, no line cap,
    /// no wrapping.
    fn default() -> Self {
        Self::new(2048, None, "", "")
    }
}

/// Accumulates lines into a finalized ordered sequence of [`Page`]s,
/// respecting both a character budget and an optional line cap per page.
///
/// A paginator is created fresh per content build and consumed once via
/// [`Paginator::into_pages`].
///
/// # Examples
///
/// ```
/// use porter_core::{PageLimits, Paginator};
///
/// let mut paginator = Paginator::new(PageLimits::with_max_lines(2048, 8));
/// for i in 0..20 {
///     paginator.add_line(&format!("entry {i}"), false).unwrap();
/// }
/// let pages = paginator.into_pages();
/// assert_eq!(pages.len(), 3);
/// ```
#[derive(Debug)]
pub struct Paginator {
    limits: PageLimits,
    pages: Vec<Page>,
    open_lines: Vec<String>,
    open_size: usize,
    open_count: usize,
}

impl Paginator {
    /// Create an empty paginator with the given limits.
    pub fn new(limits: PageLimits) -> Self {
        Self {
            limits,
            pages: Vec::new(),
            open_lines: Vec::new(),
            open_size: 0,
            open_count: 0,
        }
    }

    /// Append one line to the currently open page.
    ///
    /// The open page is closed first when either the character budget or the
    /// line cap would overflow. With `empty` set, a blank spacer line is
    /// appended after the content line.
    ///
    /// # Errors
    ///
    /// [`PaginateErrorKind::LineTooLong`] when the line alone cannot fit on
    /// any page. This is a content-authoring bug and is never recovered from.
    pub fn add_line(&mut self, line: &str, empty: bool) -> Result<(), PaginateError> {
        self.push_line(line)?;
        if empty {
            self.push_line("")?;
        }
        Ok(())
    }

    /// Append every line of a pre-built page, then force-close the open page
    /// even if under limits.
    ///
    /// Used when a logical section must never share a page with whatever
    /// comes after it.
    pub fn add_page(&mut self, page: &Page) -> Result<(), PaginateError> {
        for line in page.lines() {
            self.push_line(line)?;
        }
        self.close_page();
        Ok(())
    }

    /// Finalize the current open page and prime a fresh one.
    pub fn close_page(&mut self) {
        let lines = std::mem::take(&mut self.open_lines);
        self.pages.push(self.wrap(lines));
        self.open_size = 0;
        self.open_count = 0;
        trace!(pages = self.pages.len(), "Closed page");
    }

    /// Content lines on the currently open page.
    ///
    /// Callers that keep multi-line blocks together peek at this before
    /// adding a block and close the page themselves when it would not fit.
    pub fn open_line_count(&self) -> usize {
        self.open_count
    }

    /// The configured limits.
    pub fn limits(&self) -> &PageLimits {
        &self.limits
    }

    /// Consume the paginator, yielding the finalized pages.
    ///
    /// An open page with content is included; an empty input still produces
    /// exactly one (possibly wrapping-only) page, so page-number indexing
    /// downstream is always valid.
    pub fn into_pages(mut self) -> Vec<Page> {
        if self.open_count > 0 || self.pages.is_empty() {
            self.close_page();
        }
        self.pages
    }

    fn push_line(&mut self, line: &str) -> Result<(), PaginateError> {
        let budget = self.limits.content_budget();
        let length = line.chars().count();
        if length > budget {
            return Err(PaginateError::new(PaginateErrorKind::LineTooLong {
                length,
                budget,
            }));
        }

        if let Some(max_lines) = self.limits.max_lines
            && self.open_count >= max_lines
        {
            self.close_page();
        }
        if self.open_size + length + 1 > budget {
            self.close_page();
        }

        self.open_lines.push(line.to_owned());
        self.open_size += length + 1;
        self.open_count += 1;
        Ok(())
    }

    fn wrap(&self, mut lines: Vec<String>) -> Page {
        if !self.limits.prefix.is_empty() {
            lines.insert(0, self.limits.prefix.clone());
        }
        if !self.limits.suffix.is_empty() {
            lines.push(self.limits.suffix.clone());
        }
        Page::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_one_page() {
        let paginator = Paginator::new(PageLimits::default());
        let pages = paginator.into_pages();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn empty_input_keeps_wrapping() {
        let paginator = Paginator::new(PageLimits::new(100, None, "```", "```"));
        let pages = paginator.into_pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text(), "```\n```");
    }

    #[test]
    fn twenty_lines_with_cap_of_eight() {
        let mut paginator = Paginator::new(PageLimits::with_max_lines(2048, 8));
        for i in 0..20 {
            paginator.add_line(&format!("entry {i}"), false).unwrap();
        }
        let pages = paginator.into_pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].line_count(), 8);
        assert_eq!(pages[1].line_count(), 8);
        assert_eq!(pages[2].line_count(), 4);
    }

    #[test]
    fn pages_never_exceed_size() {
        let limits = PageLimits::new(64, None, "", "");
        let mut paginator = Paginator::new(limits);
        for _ in 0..40 {
            paginator.add_line("twelve chars", false).unwrap();
        }
        for page in paginator.into_pages() {
            assert!(page.len() <= 64, "page of {} chars", page.len());
        }
    }

    #[test]
    fn pages_never_exceed_size_with_wrapping() {
        let limits = PageLimits::new(64, None, "```", "```");
        let mut paginator = Paginator::new(limits);
        for _ in 0..40 {
            paginator.add_line("twelve chars", false).unwrap();
        }
        for page in paginator.into_pages() {
            assert!(page.len() <= 64, "page of {} chars", page.len());
            assert_eq!(page.lines().first().unwrap(), "```");
            assert_eq!(page.lines().last().unwrap(), "```");
        }
    }

    #[test]
    fn oversized_line_is_fatal() {
        let mut paginator = Paginator::new(PageLimits::new(16, None, "", ""));
        let result = paginator.add_line(&"x".repeat(17), false);
        assert!(result.is_err());
    }

    #[test]
    fn spacer_line_counts_toward_cap() {
        let mut paginator = Paginator::new(PageLimits::with_max_lines(2048, 2));
        paginator.add_line("first", true).unwrap();
        paginator.add_line("second", false).unwrap();
        let pages = paginator.into_pages();
        // "first" + spacer fill page one; "second" opens page two.
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines(), &vec!["first".to_owned(), String::new()]);
    }

    #[test]
    fn add_page_force_closes() {
        let mut paginator = Paginator::new(PageLimits::default());
        let section = Page::from_lines(["a", "b"]);
        paginator.add_page(&section).unwrap();
        paginator.add_line("c", false).unwrap();
        let pages = paginator.into_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text(), "a\nb");
        assert_eq!(pages[1].text(), "c");
    }
}
