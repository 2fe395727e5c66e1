//! Event-driven presenter runtime.
//!
//! Backend calls run on their own tasks and report back through a single
//! channel; events are folded into the [`PresenterState`] only when the owner
//! asks for them, so the two load-time reads are joined nowhere else.

use std::sync::Arc;

use tokio::{
    sync::mpsc,
    time::{Instant, timeout_at},
};
use tracing::{debug, warn};

use super::{
    backend::Backend,
    error::describe,
    state::{FormField, PresenterEvent, PresenterState},
};

/// What happened when the user pressed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// A request was issued and `submit-started` applied.
    Dispatched,
    /// A submission is already in flight; nothing was sent.
    Busy,
    /// Required fields are empty; nothing was sent.
    Incomplete(Vec<FormField>),
}

/// Owns the presenter state and the tasks feeding it.
pub struct Presenter {
    backend: Arc<dyn Backend>,
    state: PresenterState,
    tx: mpsc::UnboundedSender<PresenterEvent>,
    rx: mpsc::UnboundedReceiver<PresenterEvent>,
}

impl Presenter {
    /// Create a presenter in its initial state. Nothing is requested until [`Presenter::start`].
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            state: PresenterState::new(),
            tx,
            rx,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    /// Issue the two load-time reads as independent tasks.
    ///
    /// A failed read is logged and produces no event, leaving its section pending.
    pub fn start(&self) {
        let call = self.backend.health();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match call.await {
                Ok(health) => {
                    let _ = tx.send(PresenterEvent::HealthLoaded(health));
                }
                Err(err) => warn!(error = %describe(&err), "health check failed"),
            }
        });

        let call = self.backend.message();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match call.await {
                Ok(greeting) => {
                    let _ = tx.send(PresenterEvent::MessageLoaded(greeting));
                }
                Err(err) => warn!(error = %describe(&err), "failed to fetch message"),
            }
        });
    }

    /// Replace the name field.
    pub fn edit_name(&mut self, name: impl Into<String>) {
        self.dispatch(PresenterEvent::NameEdited(name.into()));
    }

    /// Replace the message field.
    pub fn edit_message(&mut self, message: impl Into<String>) {
        self.dispatch(PresenterEvent::MessageEdited(message.into()));
    }

    /// Submit the current form, unless a submission is in flight or a field is empty.
    pub fn submit(&mut self) -> SubmitAction {
        if self.state.loading() {
            debug!("submission already in flight; ignoring submit");
            return SubmitAction::Busy;
        }

        let missing = self.state.form().missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "required fields empty; ignoring submit");
            return SubmitAction::Incomplete(missing);
        }

        let request = self.state.form().to_request();
        self.dispatch(PresenterEvent::SubmitStarted);

        // Created before spawning so the request is issued at submit time.
        let call = self.backend.submit(request);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = match call.await {
                Ok(echo) => PresenterEvent::SubmitSucceeded(echo),
                Err(err) => {
                    let error = describe(&err);
                    warn!(%error, "submission failed");
                    PresenterEvent::SubmitFailed(error)
                }
            };
            let _ = tx.send(event);
        });

        SubmitAction::Dispatched
    }

    /// Wait for the next task event and apply it.
    pub async fn next_event(&mut self) -> &PresenterState {
        // `self.tx` keeps the channel open, so `recv` only ever yields events.
        if let Some(event) = self.rx.recv().await {
            self.dispatch(event);
        }
        &self.state
    }

    /// Apply every event that has already arrived without waiting.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    /// Apply events until `done` holds or `deadline` passes; returns whether `done` held.
    pub async fn settle_until<F>(&mut self, deadline: Instant, done: F) -> bool
    where
        F: Fn(&PresenterState) -> bool,
    {
        self.drain();
        while !done(&self.state) {
            if timeout_at(deadline, self.next_event()).await.is_err() {
                return false;
            }
        }
        true
    }

    fn dispatch(&mut self, event: PresenterEvent) {
        debug!(event = event.name(), "applying presenter event");
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(event);
    }
}
