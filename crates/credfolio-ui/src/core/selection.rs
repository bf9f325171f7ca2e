//! Selection bookkeeping and the bulk action bar view model.
//!
//! # Design
//! - The parent owns the selection; the bar only reads the count.
//! - Actions are zero-argument signals dispatched through [`BulkActionHandlers`].

use crate::i18n::TranslationBundle;
use std::collections::BTreeSet;
use yew::Callback;

/// Aggregate operation offered by the bulk action bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulkAction {
    /// Email every selected credential.
    EmailAll,
    /// Export the selection as CSV.
    ExportCsv,
    /// Revoke every selected credential.
    RevokeSelected,
    /// Drop the current selection.
    ClearSelection,
}

impl BulkAction {
    /// Actions rendered as buttons, in display order.
    pub const BUTTONS: [Self; 3] = [Self::EmailAll, Self::ExportCsv, Self::RevokeSelected];

    /// Translation key for the control label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::EmailAll => "bulk.email",
            Self::ExportCsv => "bulk.export",
            Self::RevokeSelected => "bulk.revoke",
            Self::ClearSelection => "bulk.clear",
        }
    }

    /// English label used when a translation is missing.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::EmailAll => "Email all",
            Self::ExportCsv => "Export CSV",
            Self::RevokeSelected => "Revoke",
            Self::ClearSelection => "Clear selection",
        }
    }

    /// Whether the control should carry destructive styling.
    #[must_use]
    pub const fn destructive(self) -> bool {
        matches!(self, Self::RevokeSelected)
    }
}

/// Caller-supplied handles, one per [`BulkAction`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BulkActionHandlers {
    /// Fired by the email control.
    pub email_all: Callback<()>,
    /// Fired by the export control.
    pub export_csv: Callback<()>,
    /// Fired by the revoke control.
    pub revoke_selected: Callback<()>,
    /// Fired by the clear-selection control.
    pub clear_selection: Callback<()>,
}

impl BulkActionHandlers {
    /// Handle bound to an action.
    #[must_use]
    pub const fn handler(&self, action: BulkAction) -> &Callback<()> {
        match action {
            BulkAction::EmailAll => &self.email_all,
            BulkAction::ExportCsv => &self.export_csv,
            BulkAction::RevokeSelected => &self.revoke_selected,
            BulkAction::ClearSelection => &self.clear_selection,
        }
    }

    /// Emit exactly the handle bound to `action`, once.
    pub fn dispatch(&self, action: BulkAction) {
        self.handler(action).emit(());
    }
}

/// Rendered state of a visible bulk action bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkBarView {
    /// Pluralised count label.
    pub label: String,
    /// Label for the clear-selection control.
    pub clear_label: String,
    /// Action buttons with their labels, in display order.
    pub buttons: Vec<(BulkAction, String)>,
}

/// Pluralised "N credential(s) selected" label.
#[must_use]
pub fn selection_label(count: usize, bundle: &TranslationBundle) -> String {
    let (key, default) = if count == 1 {
        ("bulk.selected_one", "{count} credential selected")
    } else {
        ("bulk.selected_other", "{count} credentials selected")
    };
    let count = count.to_string();
    bundle.format(key, default, &[("count", count.as_str())])
}

/// View for the bar, or `None` when nothing is selected.
#[must_use]
pub fn bulk_bar_view(count: usize, bundle: &TranslationBundle) -> Option<BulkBarView> {
    if count == 0 {
        return None;
    }
    let label_for = |action: BulkAction| bundle.text(action.label_key(), action.default_label());
    Some(BulkBarView {
        label: selection_label(count, bundle),
        clear_label: label_for(BulkAction::ClearSelection),
        buttons: BulkAction::BUTTONS
            .into_iter()
            .map(|action| (action, label_for(action)))
            .collect(),
    })
}

/// Toggle the presence of an id in the selection set.
#[must_use]
pub fn toggle_selection<T: Ord + Clone>(selected: &BTreeSet<T>, id: &T) -> BTreeSet<T> {
    let mut next = selected.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }
    next
}

/// Select every id, or clear when all are already selected.
#[must_use]
pub fn select_all_or_clear<T: Ord + Clone>(selected: &BTreeSet<T>, ids: &[T]) -> BTreeSet<T> {
    if !ids.is_empty() && ids.iter().all(|id| selected.contains(id)) {
        BTreeSet::new()
    } else {
        ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let hits = Rc::new(Cell::new(0));
        let cb = {
            let hits = Rc::clone(&hits);
            Callback::from(move |()| hits.set(hits.get() + 1))
        };
        (hits, cb)
    }

    #[test]
    fn zero_selection_hides_the_bar() {
        let bundle = TranslationBundle::default();
        assert!(bulk_bar_view(3, &bundle).is_some());
        assert_eq!(bulk_bar_view(0, &bundle), None);
    }

    #[test]
    fn label_pluralises_at_exactly_one() {
        let bundle = TranslationBundle::default();
        assert_eq!(selection_label(1, &bundle), "1 credential selected");
        assert_eq!(selection_label(2, &bundle), "2 credentials selected");
        assert_eq!(selection_label(0, &bundle), "0 credentials selected");
    }

    #[test]
    fn visible_bar_lists_three_actions_plus_clear() {
        let view = bulk_bar_view(1, &TranslationBundle::default()).expect("visible");
        let actions: Vec<BulkAction> = view.buttons.iter().map(|(action, _)| *action).collect();
        assert_eq!(actions, BulkAction::BUTTONS.to_vec());
        assert_eq!(view.clear_label, "Clear selection");
        assert_eq!(view.buttons[1].1, "Export CSV");
    }

    #[test]
    fn dispatch_fires_only_the_matching_handle_once() {
        let all = [
            BulkAction::EmailAll,
            BulkAction::ExportCsv,
            BulkAction::RevokeSelected,
            BulkAction::ClearSelection,
        ];
        for target in all {
            let (email, email_all) = counter();
            let (export, export_csv) = counter();
            let (revoke, revoke_selected) = counter();
            let (clear, clear_selection) = counter();
            let handlers = BulkActionHandlers {
                email_all,
                export_csv,
                revoke_selected,
                clear_selection,
            };
            handlers.dispatch(target);
            let hits = [email.get(), export.get(), revoke.get(), clear.get()];
            let expected: Vec<u32> = all.iter().map(|a| u32::from(*a == target)).collect();
            assert_eq!(hits.to_vec(), expected, "dispatching {target:?}");
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let empty = BTreeSet::new();
        let one = toggle_selection(&empty, &7_u32);
        assert!(one.contains(&7));
        assert!(toggle_selection(&one, &7).is_empty());
    }

    #[test]
    fn select_all_round_trips_to_empty() {
        let ids = [1_u32, 2, 3];
        let all = select_all_or_clear(&BTreeSet::new(), &ids);
        assert_eq!(all.len(), 3);
        assert!(select_all_or_clear(&all, &ids).is_empty());
        assert!(select_all_or_clear(&BTreeSet::new(), &[] as &[u32]).is_empty());
    }
}
