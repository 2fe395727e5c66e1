//! Client presenter for the backend API.
//!
//! [`ApiClient`] performs the HTTP calls, [`Presenter`] runs them as
//! independent tasks and folds their results into an immutable
//! [`PresenterState`], and [`render`] turns that state into text.

pub mod api_client;
pub mod backend;
pub mod error;
pub mod presenter;
pub mod render;
pub mod state;

pub use self::api_client::ApiClient;
pub use self::backend::Backend;
pub use self::error::{ClientError, ClientResult};
pub use self::presenter::{Presenter, SubmitAction};
pub use self::render::render;
pub use self::state::{FormData, FormField, PresenterEvent, PresenterState, SubmitResult};

/// API address used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
