//! Inline SVG icon set (Lucide paths) used by the components.

use crate::core::empty_state::EmptyIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconAward)]
pub(crate) fn icon_award(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="m15.477 12.89l1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526" />
            <circle cx="12" cy="8" r="6" />
        </> },
    )
}

#[function_component(IconBriefcase)]
pub(crate) fn icon_briefcase(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            <rect width="20" height="14" x="2" y="6" rx="2" />
        </> },
    )
}

#[function_component(IconDownload)]
pub(crate) fn icon_download(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M12 15V3m9 12v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <path d="m7 10l5 5l5-5" />
        </> },
    )
}

#[function_component(IconInbox)]
pub(crate) fn icon_inbox(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M22 12h-6l-2 3h-4l-2-3H2" />
            <path d="M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11" />
        </> },
    )
}

#[function_component(IconMail)]
pub(crate) fn icon_mail(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="m22 7l-8.991 5.727a2 2 0 0 1-2.009 0L2 7" />
            <rect x="2" y="4" width="20" height="16" rx="2" />
        </> },
    )
}

#[function_component(IconSearch)]
pub(crate) fn icon_search(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="m21 21l-4.34-4.34" />
            <circle cx="11" cy="11" r="8" />
        </> },
    )
}

#[function_component(IconShieldCheck)]
pub(crate) fn icon_shield_check(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
            <path d="m9 12l2 2l4-4" />
        </> },
    )
}

#[function_component(IconTrash)]
pub(crate) fn icon_trash(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" /> },
    )
}

#[function_component(IconX)]
pub(crate) fn icon_x(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M18 6L6 18M6 6l12 12" /> })
}

/// Render the glyph for an empty-state icon.
pub(crate) fn empty_icon(icon: EmptyIcon, class: Classes) -> Html {
    match icon {
        EmptyIcon::Award => html! { <IconAward {class} size="8" /> },
        EmptyIcon::Briefcase => html! { <IconBriefcase {class} size="8" /> },
        EmptyIcon::Search => html! { <IconSearch {class} size="8" /> },
        EmptyIcon::Inbox => html! { <IconInbox {class} size="8" /> },
    }
}
