//! The dashboard's selection store, shared through context.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::selection::{Selection, SelectionAction};

/// Read handle plus dispatcher. Components never write the selection
/// directly; they send actions that the store's coroutine reduces in order.
#[derive(Clone, Copy)]
pub struct SelectionStore {
    pub selection: Signal<Selection>,
    dispatcher: Coroutine<SelectionAction>,
}

impl SelectionStore {
    pub fn dispatch(&self, action: SelectionAction) {
        self.dispatcher.send(action);
    }

    pub fn current(&self) -> Selection {
        self.selection.read().clone()
    }
}

impl PartialEq for SelectionStore {
    fn eq(&self, other: &Self) -> bool {
        self.selection == other.selection
    }
}

/// Create the store for this subtree and provide it as context.
pub fn use_selection_provider() -> SelectionStore {
    let selection = use_signal(Selection::default);

    let dispatcher = use_coroutine(move |mut rx: UnboundedReceiver<SelectionAction>| {
        let mut selection = selection;
        async move {
            while let Some(action) = rx.next().await {
                tracing::debug!(?action, "selection action");
                selection.with_mut(|current| current.apply(action));
            }
        }
    });

    use_context_provider(|| SelectionStore {
        selection,
        dispatcher,
    })
}

pub fn use_selection_store() -> SelectionStore {
    use_context::<SelectionStore>()
}
