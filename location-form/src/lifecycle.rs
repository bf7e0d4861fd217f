use std::cell::Cell;
use std::rc::Rc;

/// Liveness token shared between a controller and its in-flight requests.
///
/// Once cancelled, completions arriving afterwards must not touch state.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    cancelled: Rc<Cell<bool>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_live(&self) -> bool {
        !self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_seen_by_clones() {
        let lifecycle = Lifecycle::new();
        let held_by_request = lifecycle.clone();
        assert!(held_by_request.is_live());

        lifecycle.cancel();
        assert!(!held_by_request.is_live());
        assert!(!lifecycle.is_live());
    }
}
