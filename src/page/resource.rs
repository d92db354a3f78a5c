use crate::fetch::{FetchError, Fetcher, HttpFetcher};
use crate::page::FetchState;

/// A source page and its memoized content
///
/// The first access to the content triggers the fetch; every later access returns the
/// stored outcome, success or failure, without touching the network again.
///
/// # Example
///
/// ```no_run
/// use page_harvest::config::FetchConfig;
/// use page_harvest::{HttpFetcher, Resource};
///
/// let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
/// let mut page = Resource::new("https://example.com/", fetcher);
/// if page.is_valid() {
///     println!("{} bytes", page.ensure_content().unwrap_or_default().len());
/// }
/// ```
#[derive(Debug)]
pub struct Resource<F = HttpFetcher> {
    url: String,
    fetcher: F,
    state: FetchState,
}

impl<F: Fetcher> Resource<F> {
    pub fn new(url: impl Into<String>, fetcher: F) -> Self {
        Self {
            url: url.into(),
            fetcher,
            state: FetchState::Unfetched,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the current state without fetching
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Performs the fetch if it has not been attempted yet and returns the outcome
    pub fn load(&mut self) -> &FetchState {
        if let FetchState::Unfetched = self.state {
            self.state = self.fetcher.fetch(&self.url).into();
        }
        &self.state
    }

    /// Typed view of the memoized fetch outcome
    pub fn content(&mut self) -> Result<&str, &FetchError> {
        match self.load() {
            FetchState::FetchedOk(content) => Ok(content),
            FetchState::FetchedFail(error) => Err(error),
            FetchState::Unfetched => unreachable!("load always leaves a terminal state"),
        }
    }

    /// Returns the page content, or `None` when it is unavailable
    pub fn ensure_content(&mut self) -> Option<&str> {
        self.load().content()
    }

    /// Returns true if the page has non-empty content
    pub fn is_valid(&mut self) -> bool {
        self.ensure_content()
            .is_some_and(|content| !content.is_empty())
    }

    /// Consumes the resource, returning its final state
    pub fn into_state(self) -> FetchState {
        self.state
    }
}
