use super::api::QueryError;
use contracts::usecases::u508_nl_query::{QueryRequest, QueryResponse};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a success toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Position inside a paged result set; both fields are at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    /// Back to the first page of a new result set
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves to `page`, kept inside `1..=total_pages`
    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    /// Takes the page count of a successful answer
    pub fn apply_total(&mut self, total_pages: Option<u32>) {
        self.total_pages = total_pages.unwrap_or(1).max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

/// What started a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    /// New question from the input box; restarts at page 1
    Fresh,
    /// Pagination control asking for another page of the same question
    PageChange(u32),
}

/// Validates the input and moves the pagination cursor for one submission
///
/// A fresh submission uses the trimmed input and resets to page 1. A page
/// change re-asks the last submitted question (falling back to the input
/// when nothing was submitted yet) at the requested page.
pub fn prepare_request(
    input: &str,
    active_query: Option<&str>,
    kind: SubmitKind,
    pagination: &mut PaginationState,
) -> Result<QueryRequest, QueryError> {
    let query = match kind {
        SubmitKind::Fresh => input.trim(),
        SubmitKind::PageChange(_) => active_query.unwrap_or(input).trim(),
    };

    if query.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    match kind {
        SubmitKind::Fresh => pagination.reset(),
        SubmitKind::PageChange(page) => pagination.go_to(page),
    }

    Ok(QueryRequest::new(query).with_page(pagination.current_page))
}

/// Pagination cursor and question a failed submission rolls back to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitCheckpoint {
    pub pagination: PaginationState,
    pub active_query: Option<String>,
}

/// Everything the console renders, owned by the console component
#[derive(Clone, Copy)]
pub struct QueryConsoleState {
    pub query_text: RwSignal<String>,
    /// Question of the last fresh submission; page changes re-ask it
    pub active_query: RwSignal<Option<String>>,
    pub response: RwSignal<Option<QueryResponse>>,
    pub pagination: RwSignal<PaginationState>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub toast: RwSignal<Option<String>>,
    toast_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl QueryConsoleState {
    pub fn new() -> Self {
        Self {
            query_text: RwSignal::new(String::new()),
            active_query: RwSignal::new(None),
            response: RwSignal::new(None),
            pagination: RwSignal::new(PaginationState::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            toast: RwSignal::new(None),
            toast_timer: StoredValue::new_local(None),
        }
    }

    /// Shows a success toast and re-arms its dismiss timer
    pub fn show_toast(&self, message: impl Into<String>) {
        let toast = self.toast;
        toast.set(Some(message.into()));
        let timer = Timeout::new(TOAST_DURATION_MS, move || toast.set(None));
        // replacing the old handle cancels its pending dismiss
        self.toast_timer.set_value(Some(timer));
    }

    pub fn checkpoint(&self) -> SubmitCheckpoint {
        SubmitCheckpoint {
            pagination: self.pagination.get_untracked(),
            active_query: self.active_query.get_untracked(),
        }
    }

    pub fn restore(&self, checkpoint: SubmitCheckpoint) {
        self.pagination.set(checkpoint.pagination);
        self.active_query.set(checkpoint.active_query);
    }

    /// Builds the request for `kind` and moves the cursor to it
    ///
    /// Returns the cursor as it was before, for [`Self::restore`] when the
    /// request fails. A rejected input leaves the state untouched.
    pub fn begin_submission(
        &self,
        kind: SubmitKind,
    ) -> Result<(QueryRequest, SubmitCheckpoint), QueryError> {
        let previous = self.checkpoint();
        let input = self.query_text.get_untracked();
        let mut pagination = previous.pagination;

        let request = prepare_request(
            &input,
            previous.active_query.as_deref(),
            kind,
            &mut pagination,
        )?;

        self.pagination.set(pagination);
        if kind == SubmitKind::Fresh {
            self.active_query.set(Some(request.query.clone()));
        }
        Ok((request, previous))
    }

    pub fn show_error(&self, error: &QueryError) {
        self.error.set(Some(error.to_string()));
    }
}

impl Default for QueryConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Raises the loading flag for its lifetime
///
/// Dropping the guard clears the flag, so every exit path of a request
/// hides the indicator.
pub struct LoadingGuard(RwSignal<bool>);

impl LoadingGuard {
    pub fn start(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u508_nl_query::api::decode_response;

    fn console_on_page(page: u32, total: u32, question: &str) -> QueryConsoleState {
        let state = QueryConsoleState::new();
        state.query_text.set(question.to_string());
        state.active_query.set(Some(question.to_string()));
        state.pagination.set(PaginationState {
            current_page: page,
            total_pages: total,
        });
        state
    }

    #[test]
    fn test_boundaries() {
        let mut state = PaginationState::default();
        state.apply_total(Some(3));

        state.go_to(2);
        assert!(state.has_previous());
        assert!(state.has_next());

        state.go_to(1);
        assert!(!state.has_previous());
        assert!(state.has_next());

        state.go_to(3);
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn test_single_page_is_not_paged() {
        let mut state = PaginationState::default();
        state.apply_total(None);
        assert!(!state.is_paged());
        state.apply_total(Some(0));
        assert_eq!(state.total_pages, 1);
        state.apply_total(Some(2));
        assert!(state.is_paged());
    }

    #[test]
    fn test_shrinking_total_clamps_current_page() {
        let mut state = PaginationState {
            current_page: 5,
            total_pages: 5,
        };
        state.apply_total(Some(2));
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_go_to_is_clamped() {
        let mut state = PaginationState {
            current_page: 1,
            total_pages: 3,
        };
        state.go_to(0);
        assert_eq!(state.current_page, 1);
        state.go_to(9);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_blank_input_is_rejected_without_touching_pagination() {
        let mut state = PaginationState {
            current_page: 2,
            total_pages: 3,
        };
        let err = prepare_request("   \t", None, SubmitKind::Fresh, &mut state).unwrap_err();
        assert_eq!(err, QueryError::EmptyQuery);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_fresh_submission_resets_to_first_page() {
        let mut state = PaginationState {
            current_page: 3,
            total_pages: 4,
        };
        let request =
            prepare_request("  fastest laps  ", None, SubmitKind::Fresh, &mut state).unwrap();
        assert_eq!(request, QueryRequest::new("fastest laps").with_page(1));
        assert_eq!(state, PaginationState::default());
    }

    #[test]
    fn test_page_change_keeps_active_query() {
        let mut state = PaginationState {
            current_page: 1,
            total_pages: 3,
        };
        let request = prepare_request(
            "edited but not submitted",
            Some("wins by driver"),
            SubmitKind::PageChange(2),
            &mut state,
        )
        .unwrap();
        assert_eq!(request, QueryRequest::new("wins by driver").with_page(2));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn test_failed_page_change_restores_cursor() {
        let state = console_on_page(2, 3, "wins by driver");

        let (request, previous) = state.begin_submission(SubmitKind::PageChange(3)).unwrap();
        assert_eq!(request.page, Some(3));
        assert_eq!(state.pagination.get_untracked().current_page, 3);

        state.restore(previous);
        assert_eq!(
            state.pagination.get_untracked(),
            PaginationState {
                current_page: 2,
                total_pages: 3,
            }
        );
        assert!(state.pagination.get_untracked().has_next());
    }

    #[test]
    fn test_failed_fresh_query_keeps_previous_question() {
        let state = console_on_page(2, 4, "wins by driver");
        state.query_text.set("fastest laps".to_string());

        let (_, previous) = state.begin_submission(SubmitKind::Fresh).unwrap();
        assert_eq!(state.active_query.get_untracked().as_deref(), Some("fastest laps"));
        assert_eq!(state.pagination.get_untracked(), PaginationState::default());

        state.restore(previous);
        assert_eq!(state.active_query.get_untracked().as_deref(), Some("wins by driver"));
        assert_eq!(state.pagination.get_untracked().current_page, 2);
        assert_eq!(state.pagination.get_untracked().total_pages, 4);
    }

    #[test]
    fn test_rejected_input_leaves_state_untouched() {
        let state = console_on_page(2, 3, "wins by driver");
        state.query_text.set("   ".to_string());
        let before = state.checkpoint();

        let err = state.begin_submission(SubmitKind::Fresh).unwrap_err();
        assert_eq!(err, QueryError::EmptyQuery);
        assert_eq!(state.checkpoint(), before);
    }

    fn guarded_attempt(flag: RwSignal<bool>, status: u16) -> Result<(), QueryError> {
        let _loading = LoadingGuard::start(flag);
        assert!(flag.get_untracked());
        if status == 0 {
            return Err(QueryError::EmptyQuery);
        }
        decode_response(status, r#"{"detail":"Only SELECT queries allowed"}"#)?;
        Ok(())
    }

    #[test]
    fn test_loading_cleared_after_early_return() {
        let flag = RwSignal::new(false);
        assert!(guarded_attempt(flag, 0).is_err());
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_loading_cleared_after_error_status() {
        let flag = RwSignal::new(false);
        let err = guarded_attempt(flag, 400).unwrap_err();
        assert_eq!(err.to_string(), "Only SELECT queries allowed");
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_loading_cleared_when_task_is_dropped() {
        let flag = RwSignal::new(false);
        let loading = LoadingGuard::start(flag);
        let task = move || {
            let _loading = loading;
        };
        assert!(flag.get_untracked());
        drop(task);
        assert!(!flag.get_untracked());
    }
}
