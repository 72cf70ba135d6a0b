/// Linear, single-level undo log.
///
/// Entries are pushed as actions happen and popped most-recent-first. There is
/// no redo and no depth limit.
#[derive(Clone, Debug)]
pub struct History<A> {
    entries: Vec<A>,
}

impl<A> Default for History<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> History<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: A) {
        self.entries.push(action);
    }

    pub fn pop(&mut self) -> Option<A> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&A> {
        self.entries.last()
    }

    /// Mutable access to the newest entry, used to extend an in-progress stroke.
    pub fn last_mut(&mut self) -> Option<&mut A> {
        self.entries.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
