//! Registration table of the console's controls
//!
//! Every interactive control dispatches through one table built by the console,
//! instead of each element carrying its own ad-hoc handler.

use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Submit,
    PreviousPage,
    NextPage,
    Export,
}

#[derive(Clone, Default)]
pub struct ControlRegistry {
    handlers: HashMap<Control, Callback<()>>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        control: Control,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(control, Callback::new(move |_| handler()));
        self
    }

    pub fn into_table(self) -> ControlTable {
        ControlTable {
            handlers: StoredValue::new(self.handlers),
        }
    }
}

/// Frozen registry; `Copy` so views can capture it freely
#[derive(Clone, Copy)]
pub struct ControlTable {
    handlers: StoredValue<HashMap<Control, Callback<()>>>,
}

impl ControlTable {
    /// Runs the handler registered for `control`; unregistered controls are ignored
    pub fn dispatch(&self, control: Control) {
        match self.handlers.with_value(|handlers| handlers.get(&control).copied()) {
            Some(handler) => handler.run(()),
            None => log::warn!("No handler registered for {:?}", control),
        }
    }

    /// Callback that dispatches `control`, for component props
    pub fn callback(&self, control: Control) -> Callback<()> {
        let table = *self;
        Callback::new(move |_| table.dispatch(control))
    }
}
