//! Linear undo/redo over immutable plan snapshots.

use std::sync::Arc;

use tracing::debug;

use crate::model::Plan;

/// Past, present and future plan snapshots of one open document.
///
/// Snapshots are shared, so undoing and redoing hands back the very same plan
/// value that was current before. Any commit discards the redo branch.
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Oldest first.
    past: Vec<Arc<Plan>>,
    present: Arc<Plan>,
    /// Most recently undone last.
    future: Vec<Arc<Plan>>,
    limit: Option<usize>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(Plan::default())
    }
}

impl EditHistory {
    /// Creates an unbounded history starting at `initial`.
    #[must_use]
    pub fn new(initial: Plan) -> Self {
        Self {
            past: Vec::new(),
            present: Arc::new(initial),
            future: Vec::new(),
            limit: None,
        }
    }

    /// Keeps at most `limit` undo steps, dropping the oldest ones first.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    /// The current plan snapshot.
    #[must_use]
    pub fn present(&self) -> &Arc<Plan> {
        &self.present
    }

    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.present
    }

    /// Makes `next` the present plan.
    pub fn commit(&mut self, next: Plan) {
        let previous = std::mem::replace(&mut self.present, Arc::new(next));
        self.past.push(previous);
        self.future.clear();
        self.enforce_limit();
        debug!(past = self.past.len(), "plan committed");
    }

    /// Steps back one snapshot. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        debug!(past = self.past.len(), future = self.future.len(), "undo");
        true
    }

    /// Steps forward one snapshot. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        debug!(past = self.past.len(), future = self.future.len(), "redo");
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn named(name: &str) -> Plan {
        let mut plan = Plan::default();
        plan.meta.name = name.to_owned();
        plan
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut history = EditHistory::new(named("p0"));
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history.plan().meta.name, "p0");
    }

    #[test]
    fn commit_after_undo_discards_future() {
        let mut history = EditHistory::new(named("p0"));
        history.commit(named("p1"));
        history.commit(named("p2"));
        assert!(history.undo());
        assert_eq!(history.plan().meta.name, "p1");

        history.commit(named("p3"));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.plan().meta.name, "p3");
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn undo_then_redo_restores_same_snapshot() {
        let mut history = EditHistory::new(named("p0"));
        history.commit(named("p1"));
        let before = Arc::clone(history.present());

        assert!(history.undo());
        assert!(history.redo());
        assert!(Arc::ptr_eq(&before, history.present()));
    }

    #[test]
    fn walking_back_and_forth() {
        let mut history = EditHistory::new(named("p0"));
        for name in ["p1", "p2", "p3"] {
            history.commit(named(name));
        }
        while history.undo() {}
        assert_eq!(history.plan().meta.name, "p0");
        assert_eq!(history.redo_depth(), 3);
        while history.redo() {}
        assert_eq!(history.plan().meta.name, "p3");
    }

    #[test]
    fn limit_drops_oldest_steps() {
        let mut history = EditHistory::new(named("p0")).with_limit(Some(2));
        for name in ["p1", "p2", "p3"] {
            history.commit(named(name));
        }
        assert_eq!(history.undo_depth(), 2);
        while history.undo() {}
        assert_eq!(history.plan().meta.name, "p1");
    }
}
