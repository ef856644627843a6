//! The overridable page-building step of a session.

use async_trait::async_trait;
use porter_core::{Page, PageLimits};
use porter_error::SessionResult;

/// Supplies the content shown by a session.
///
/// Implementations decide the title line and build the page list; the engine
/// owns everything else (rendering, navigation, reactions, timeout).
#[async_trait]
pub trait SessionContent: Send + Sync {
    /// Title shown on the session embed's author line.
    fn title(&self) -> String;

    /// Optional icon URL for the author line.
    fn icon_url(&self) -> Option<String> {
        None
    }

    /// Build the ordered page list under the configured limits.
    ///
    /// # Errors
    ///
    /// `QueryNotFound` when the requested subject does not exist (reported to
    /// the user, session never starts), or a paginate error on a content
    /// authoring bug.
    async fn build_pages(&self, limits: &PageLimits) -> SessionResult<Vec<Page>>;
}
