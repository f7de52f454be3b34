//! Per-view fetch lifecycle.

/// Lifecycle of a view's backend snapshot.
///
/// Every routed view owns one of these: it starts `Idle`, moves to
/// `Loading` when the view activates, and settles in `Ready` or
/// `Failed` once the fetches resolve. A failed activation is terminal;
/// navigating to the view again starts a fresh cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(message) => ViewState::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Idle | ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
