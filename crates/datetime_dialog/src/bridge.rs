use std::sync::Arc;

use parking_lot::Mutex;
use poll_promise::{Promise, Sender};

use crate::PickerError;

/// The eventual outcome of showing a picker.
///
/// Poll it with [`Promise::ready`] once per frame, or block on it with [`Promise::block_and_take`].
pub type PickerPromise<T> = Promise<Result<T, PickerError>>;

/// The sending half of a [`PickerPromise`].
///
/// Cloneable, and settles at most once: whoever calls [`Self::settle`] first wins,
/// every later call is ignored.
pub struct ResultBridge<T: Send + 'static> {
    sender: Arc<Mutex<Option<Sender<Result<T, PickerError>>>>>,
}

impl<T: Send + 'static> Clone for ResultBridge<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: Send + 'static> ResultBridge<T> {
    pub fn new() -> (Self, PickerPromise<T>) {
        let (sender, promise) = Promise::new();
        let bridge = Self {
            sender: Arc::new(Mutex::new(Some(sender))),
        };
        (bridge, promise)
    }

    /// Settle the promise.
    ///
    /// Returns `false` (and drops `result`) if it was already settled.
    pub fn settle(&self, result: Result<T, PickerError>) -> bool {
        let sender = self.sender.lock().take();
        if let Some(sender) = sender {
            sender.send(result);
            true
        } else {
            if let Err(err) = &result {
                log::debug!("Ignoring late picker error ({}): {err}", err.code());
            } else {
                log::debug!("Ignoring late picker selection");
            }
            false
        }
    }

    pub fn is_settled(&self) -> bool {
        self.sender.lock().is_none()
    }

    /// The callback handed to a dialog.
    pub fn completion(&self) -> Completion<T> {
        Completion {
            bridge: Some(self.clone()),
        }
    }
}

/// The one-shot callback a dialog calls when the user confirms a selection.
///
/// Dropping it without calling [`Self::complete`] settles the invocation as
/// [`PickerError::Dismissed`], unless it was already settled some other way.
#[must_use = "Dropping a Completion dismisses the picker"]
pub struct Completion<T: Send + 'static> {
    bridge: Option<ResultBridge<T>>,
}

impl<T: Send + 'static> Completion<T> {
    /// Report the user's selection.
    pub fn complete(mut self, value: T) {
        if let Some(bridge) = self.bridge.take() {
            bridge.settle(Ok(value));
        }
    }

    /// Has the invocation this belongs to already settled?
    pub fn is_settled(&self) -> bool {
        self.bridge.as_ref().is_none_or(ResultBridge::is_settled)
    }
}

impl<T: Send + 'static> Drop for Completion<T> {
    fn drop(&mut self) {
        if let Some(bridge) = self.bridge.take()
            && !bridge.is_settled()
        {
            bridge.settle(Err(PickerError::Dismissed));
        }
    }
}

impl<T: Send + 'static> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}
