use crate::api::ApiError;

/// Lifecycle of a view's initial fetch.
///
/// `Failed` is distinct from `Loading` so a broken backend never leaves the
/// user on an endless spinner.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    /// Maps the value of a Leptos resource (`None` while pending).
    pub fn from_resource(value: Option<Result<T, ApiError>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(data)) => LoadState::Ready(data),
            Some(Err(err)) => LoadState::Failed(err),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}
