//! Form state that can be restored to its initial value

/// Current value of a form model together with the value it started from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData<T> {
    initial: T,
    current: T,
}

impl<T: Clone> FormData<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }

    /// Discard edits and go back to the initial value
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// Keep the current value as the new initial value
    pub fn commit(&mut self) {
        self.initial = self.current.clone();
    }
}

impl<T: PartialEq> FormData<T> {
    pub fn is_dirty(&self) -> bool {
        self.initial != self.current
    }
}
