//! Password strength bar and caption.
//!
//! # Design
//! - Render nothing for an empty password.
//! - The password is handed to the classifier only; it is never stored or logged.

use crate::core::strength::{StrengthResult, get_password_strength, strength_view};
use crate::i18n::TranslationBundle;
use std::rc::Rc;
use yew::prelude::*;

/// Shared classifier handle; compared by pointer so props stay cheap.
#[derive(Clone)]
pub(crate) struct ClassifierHandle(pub Rc<dyn Fn(&str) -> StrengthResult>);

impl PartialEq for ClassifierHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ClassifierHandle {
    fn default() -> Self {
        Self(Rc::new(get_password_strength))
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StrengthMeterProps {
    pub password: AttrValue,
    #[prop_or_default]
    pub classifier: ClassifierHandle,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StrengthMeter)]
pub(crate) fn strength_meter(props: &StrengthMeterProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let Some(view) = strength_view(props.password.as_str(), &*props.classifier.0) else {
        return html! {};
    };
    let style = view.style;
    html! {
        <div
            class={classes!("strength-meter", props.class.clone())}
            data-level={view.level.as_str()}
        >
            <div
                class="h-2 w-full overflow-hidden rounded-full bg-base-300"
                role="meter"
                aria-label={bundle.text("strength.label", "Password strength")}
                aria-valuemin="0"
                aria-valuemax="3"
                aria-valuenow={style.width.thirds.to_string()}
            >
                <div
                    class={classes!("h-full", "rounded-full", "transition-all", style.bar_class)}
                    style={style.width.css()}
                />
            </div>
            <p class={classes!("mt-1", "text-xs", style.text_class)}>{view.message}</p>
        </div>
    }
}
