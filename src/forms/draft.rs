//! Draft/Save Discipline
//!
//! Shared core of every step form: a live draft plus the last successfully
//! saved snapshot. The clean predicate is deep equality of the two, computed
//! as an explicit pure function rather than an implicit effect.
//!
//! Components hold a `FormDraft` inside an `RwSignal` and derive `is_clean`
//! with a memo, so any field edit flips the form to dirty synchronously.

/// Live draft paired with its last-saved snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct FormDraft<T: Clone + PartialEq> {
    /// Current, possibly-unsaved edit state
    pub draft: T,
    saved: T,
}

impl<T: Clone + PartialEq> FormDraft<T> {
    /// Seed both the draft and the snapshot from the initial values
    pub fn new(initial: T) -> Self {
        Self {
            draft: initial.clone(),
            saved: initial,
        }
    }

    /// Clean iff the draft deep-equals the last-saved snapshot
    pub fn is_clean(&self) -> bool {
        self.draft == self.saved
    }

    /// Apply an edit to the live draft
    pub fn edit(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.draft);
    }

    /// Reset the draft back to the snapshot, discarding pending edits.
    /// No network call is involved.
    pub fn discard(&mut self) {
        self.draft = self.saved.clone();
    }

    /// Replace the snapshot with the current draft after a successful save
    pub fn commit_saved(&mut self) {
        self.saved = self.draft.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Fields {
        name: String,
        price: String,
    }

    fn seeded() -> FormDraft<Fields> {
        FormDraft::new(Fields {
            name: "Haircut".to_string(),
            price: "50".to_string(),
        })
    }

    #[test]
    fn starts_clean() {
        assert!(seeded().is_clean());
    }

    #[test]
    fn any_edit_makes_it_dirty() {
        let mut form = seeded();
        form.edit(|f| f.price = "55".to_string());
        assert!(!form.is_clean());
    }

    #[test]
    fn editing_back_to_the_snapshot_value_is_clean_again() {
        let mut form = seeded();
        form.edit(|f| f.price = "55".to_string());
        form.edit(|f| f.price = "50".to_string());
        assert!(form.is_clean());
    }

    #[test]
    fn discard_restores_the_snapshot_exactly() {
        let mut form = seeded();
        form.edit(|f| {
            f.name = "Hair Color".to_string();
            f.price = "120".to_string();
        });
        form.discard();
        assert!(form.is_clean());
        assert_eq!(form.draft.name, "Haircut");
        assert_eq!(form.draft.price, "50");
    }

    #[test]
    fn commit_saved_transitions_back_to_clean() {
        let mut form = seeded();
        form.edit(|f| f.price = "55".to_string());
        form.commit_saved();
        assert!(form.is_clean());

        // Discard after commit keeps the new value
        form.edit(|f| f.price = "60".to_string());
        form.discard();
        assert_eq!(form.draft.price, "55");
    }
}
