//! Empty state panel for list-like views.
//!
//! # Design
//! - Keep copy and actions entirely prop-driven.
//! - The call-to-action renders only when label and handler arrive together.

use crate::components::icons::empty_icon;
use crate::core::empty_state::{EmptyStateAction, EmptyStateVariant};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub variant: EmptyStateVariant,
    #[prop_or_default]
    pub action: Option<EmptyStateAction>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let style = props.variant.style();
    html! {
        <div
            class={classes!(
                "empty-state", "flex", "flex-col", "items-center", "py-12", "text-center",
                props.class.clone()
            )}
            data-variant={props.variant.as_str()}
        >
            <div
                class="mb-4 flex size-16 items-center justify-center rounded-full text-white"
                style={format!("background: {}", style.gradient.css())}
            >
                {empty_icon(style.icon, classes!("text-white"))}
            </div>
            <h3 class="text-lg font-semibold">{props.title.clone()}</h3>
            <p class="mt-1 max-w-sm text-sm text-base-content/70">{props.message.clone()}</p>
            {props.action.as_ref().map(|action| {
                let onclick = {
                    let action = action.clone();
                    Callback::from(move |_: MouseEvent| action.activate())
                };
                html! {
                    <button type="button" class="btn btn-primary btn-sm mt-6" {onclick}>
                        {action.label.clone()}
                    </button>
                }
            }).unwrap_or_default()}
        </div>
    }
}
