// crates/geodir-core/src/session.rs

//! # Incremental search
//!
//! [`SearchSession`] turns keystrokes into name lookups and keeps a small,
//! navigable suggestion list in sync with the *latest* keystroke.
//!
//! Every input event mints a new [`RequestToken`]. Lookups run concurrently
//! and may finish in any order; a completion is applied only if its token
//! is still the current one, otherwise it is dropped on arrival. Superseded
//! lookups are never cancelled: they are idempotent reads.
//!
//! ```no_run
//! use std::sync::Arc;
//! use geodir_core::prelude::*;
//!
//! # async fn run() -> geodir_core::Result<()> {
//! let client = Arc::new(RestCountriesClient::new(DirectoryConfig::default())?);
//! let mut session = SearchSession::new(client, RecordingNavigator::new());
//!
//! session.input_changed("ge");
//! session.input_changed("ger");
//! session.settle().await; // only "ger" can end up in the state
//!
//! session.key_navigated(NavDirection::Down);
//! if let Some(name) = session.confirm() {
//!     println!("go to {}", detail_path(&name));
//! }
//! # Ok(()) }
//! ```

use crate::model::CountrySummary;
use crate::navigation::Navigator;
use crate::text::{non_blank, title_case};
use crate::traits::DirectoryClient;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Upper bound on the suggestion list.
pub const MAX_SUGGESTIONS: usize = 5;

/// Identifies one input event's lookup. Strictly increasing per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Down,
    Up,
}

/// What happened to a finished lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied(RequestToken),
    /// A newer input event had already superseded it.
    Discarded(RequestToken),
}

/// Everything a shell needs to render the search box.
///
/// Invariants: at most [`MAX_SUGGESTIONS`] suggestions; `active_index` is
/// `None` or a valid index; `not_found` implies no suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub query_text: String,
    pub suggestions: Vec<CountrySummary>,
    pub active_index: Option<usize>,
    pub not_found: bool,
}

impl SearchState {
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn suggestions(&self) -> &[CountrySummary] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn is_not_found(&self) -> bool {
        self.not_found
    }

    pub fn active_suggestion(&self) -> Option<&CountrySummary> {
        self.active_index.and_then(|i| self.suggestions.get(i))
    }
}

type PendingLookup = BoxFuture<'static, (RequestToken, Vec<CountrySummary>)>;

/// Per-user search box state machine.
///
/// Driven by four events: [`input_changed`](Self::input_changed), lookup
/// completions (delivered by [`next_completion`](Self::next_completion) /
/// [`settle`](Self::settle)), [`key_navigated`](Self::key_navigated) and
/// [`confirm`](Self::confirm).
pub struct SearchSession<C: ?Sized, N> {
    client: Arc<C>,
    navigator: N,
    state: SearchState,
    current: RequestToken,
    pending: FuturesUnordered<PendingLookup>,
}

impl<C, N> SearchSession<C, N>
where
    C: DirectoryClient + ?Sized + 'static,
    N: Navigator,
{
    pub fn new(client: Arc<C>, navigator: N) -> Self {
        Self {
            client,
            navigator,
            state: SearchState::default(),
            current: RequestToken::default(),
            pending: FuturesUnordered::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn current_token(&self) -> RequestToken {
        self.current
    }

    /// Lookups issued but not yet delivered (stale ones included).
    pub fn pending_lookups(&self) -> usize {
        self.pending.len()
    }

    fn mint_token(&mut self) -> RequestToken {
        self.current = self.current.next();
        self.current
    }

    // -----------------------------------------------------------------------
    // INPUT
    // -----------------------------------------------------------------------

    /// The text in the box changed.
    ///
    /// Returns the token of the lookup that was issued, or `None` when the
    /// trimmed text is empty (state is cleared synchronously instead).
    pub fn input_changed(&mut self, text: impl Into<String>) -> Option<RequestToken> {
        let token = self.mint_token();
        self.state.query_text = text.into();
        self.state.active_index = None;

        if non_blank(&self.state.query_text).is_none() {
            self.state.suggestions.clear();
            self.state.not_found = false;
            debug!(?token, "blank query, suggestions cleared");
            return None;
        }

        let client = Arc::clone(&self.client);
        let query = self.state.query_text.clone();
        debug!(?token, %query, "name lookup issued");
        self.pending.push(
            async move {
                let result = client.lookup_by_name(&query).await;
                (token, result)
            }
            .boxed(),
        );
        Some(token)
    }

    // -----------------------------------------------------------------------
    // COMPLETIONS
    // -----------------------------------------------------------------------

    /// Apply a finished lookup if it is still current. Returns `true` if applied.
    pub fn apply_completion(&mut self, token: RequestToken, result: Vec<CountrySummary>) -> bool {
        if token != self.current {
            debug!(?token, current = ?self.current, "stale lookup discarded");
            return false;
        }

        self.state.not_found = result.is_empty();
        self.state.suggestions = result;
        self.state.suggestions.truncate(MAX_SUGGESTIONS);
        // a late completion replaces the list the highlight pointed into
        self.state.active_index = None;
        debug!(
            ?token,
            suggestions = self.state.suggestions.len(),
            not_found = self.state.not_found,
            "lookup applied"
        );
        true
    }

    /// Wait for the next in-flight lookup to finish and apply it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let (token, result) = self.pending.next().await?;
        Some(if self.apply_completion(token, result) {
            Completion::Applied(token)
        } else {
            Completion::Discarded(token)
        })
    }

    /// Drain every in-flight lookup.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    // -----------------------------------------------------------------------
    // KEYBOARD / POINTER
    // -----------------------------------------------------------------------

    /// Move the highlight cyclically.
    ///
    /// Returns `true` when the key was consumed and the input's default
    /// behaviour (caret movement) should be suppressed.
    pub fn key_navigated(&mut self, direction: NavDirection) -> bool {
        let len = self.state.suggestions.len();
        if len == 0 {
            return false;
        }

        let next = match (direction, self.state.active_index) {
            (NavDirection::Down, None) => 0,
            (NavDirection::Down, Some(i)) => (i + 1) % len,
            (NavDirection::Up, None) => len - 1,
            (NavDirection::Up, Some(i)) => (i + len - 1) % len,
        };
        self.state.active_index = Some(next);
        true
    }

    /// Pointer moved over suggestion `index`; out-of-range indices are ignored.
    pub fn hover(&mut self, index: usize) {
        if index < self.state.suggestions.len() {
            self.state.active_index = Some(index);
        }
    }

    // -----------------------------------------------------------------------
    // SELECTION
    // -----------------------------------------------------------------------

    /// Enter / search-icon activation.
    ///
    /// Picks, in order: the highlighted suggestion, the first suggestion, or
    /// the title-cased query text. Returns the emitted name.
    pub fn confirm(&mut self) -> Option<String> {
        let name = self
            .state
            .active_suggestion()
            .or_else(|| self.state.suggestions.first())
            .map(|s| s.display_name.clone())
            .or_else(|| non_blank(&self.state.query_text).map(title_case))?;

        self.emit_selection(name.clone());
        Some(name)
    }

    /// Direct pick (click) of suggestion `index`.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let name = self.state.suggestions.get(index)?.display_name.clone();
        self.emit_selection(name.clone());
        Some(name)
    }

    fn emit_selection(&mut self, name: String) {
        debug!(%name, "selection emitted");
        self.navigator.navigate(&name);

        // Lookups still in flight must not reopen the list.
        self.mint_token();
        self.state.suggestions.clear();
        self.state.active_index = None;
        self.state.not_found = false;
        self.state.query_text = name;
    }
}
