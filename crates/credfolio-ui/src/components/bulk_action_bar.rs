//! Sticky bulk action bar for multi-select lists.
//!
//! # Design
//! - Hidden entirely when nothing is selected.
//! - Every control forwards to exactly one caller handle; no I/O happens here.

use crate::components::icons::{IconDownload, IconMail, IconTrash, IconX};
use crate::core::selection::{BulkAction, BulkActionHandlers, bulk_bar_view};
use crate::i18n::TranslationBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub selected_count: usize,
    pub handlers: BulkActionHandlers,
    #[prop_or_default]
    pub class: Classes,
}

fn action_icon(action: BulkAction) -> Html {
    match action {
        BulkAction::EmailAll => html! { <IconMail size="4" /> },
        BulkAction::ExportCsv => html! { <IconDownload size="4" /> },
        BulkAction::RevokeSelected => html! { <IconTrash size="4" /> },
        BulkAction::ClearSelection => html! { <IconX size="4" /> },
    }
}

fn on_activate(handlers: &BulkActionHandlers, action: BulkAction) -> Callback<MouseEvent> {
    let handlers = handlers.clone();
    Callback::from(move |_: MouseEvent| handlers.dispatch(action))
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let Some(view) = bulk_bar_view(props.selected_count, &bundle) else {
        return html! {};
    };
    html! {
        <div
            class={classes!(
                "bulk-actions", "sticky", "top-0", "z-10", "flex", "items-center",
                "gap-3", "rounded-box", "bg-base-200", "px-4", "py-2",
                props.class.clone()
            )}
            role="toolbar"
        >
            <span class="font-medium" aria-live="polite">{view.label}</span>
            <button
                type="button"
                class="btn btn-ghost btn-sm"
                onclick={on_activate(&props.handlers, BulkAction::ClearSelection)}
            >
                {action_icon(BulkAction::ClearSelection)}
                {view.clear_label}
            </button>
            <div class="bulk-buttons ml-auto flex gap-2">
                { for view.buttons.into_iter().map(|(action, label)| {
                    let tone = if action.destructive() { "btn-error" } else { "btn-outline" };
                    html! {
                        <button
                            type="button"
                            class={classes!("btn", "btn-sm", tone)}
                            onclick={on_activate(&props.handlers, action)}
                        >
                            {action_icon(action)}
                            {label}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
