//! Greeting built from configuration.

use crate::{dto::message::Greeting, state::SharedState};

/// Build the greeting for the environment the server was configured with.
pub fn greeting(state: &SharedState) -> Greeting {
    Greeting::new(state.config().environment())
}
