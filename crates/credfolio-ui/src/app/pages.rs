//! Demo pages composing the presentational components.

use crate::components::{AuthLayout, BulkActionBar, EmptyState, StrengthMeter};
use crate::core::config::ShellConfig;
use crate::core::empty_state::{EmptyStateAction, EmptyStateVariant};
use crate::core::selection::{BulkActionHandlers, select_all_or_clear, toggle_selection};
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::routes::Route;
use gloo::console;
use std::collections::BTreeSet;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

#[derive(Clone, Debug, PartialEq, Eq)]
struct CredentialRow {
    id: u32,
    name: &'static str,
    issuer: &'static str,
}

fn demo_rows() -> Vec<CredentialRow> {
    vec![
        CredentialRow {
            id: 1,
            name: "Certified Kubernetes Administrator",
            issuer: "CNCF",
        },
        CredentialRow {
            id: 2,
            name: "AWS Solutions Architect",
            issuer: "Amazon Web Services",
        },
        CredentialRow {
            id: 3,
            name: "First Aid at Work",
            issuer: "St John Ambulance",
        },
        CredentialRow {
            id: 4,
            name: "B2 First",
            issuer: "Cambridge English",
        },
    ]
}

fn matches_filter(row: &CredentialRow, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    needle.is_empty()
        || row.name.to_lowercase().contains(&needle)
        || row.issuer.to_lowercase().contains(&needle)
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
}

#[derive(Properties, PartialEq)]
pub(crate) struct HomePageProps {
    pub on_locale_change: Callback<LocaleCode>,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomePageProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let config = use_context::<ShellConfig>().unwrap_or_default();
    let rows = use_state(demo_rows);
    let selected = use_state(BTreeSet::<u32>::new);
    let filter = use_state(String::new);

    let visible: Vec<CredentialRow> = rows
        .iter()
        .filter(|row| matches_filter(row, &filter))
        .cloned()
        .collect();
    let visible_ids: Vec<u32> = visible.iter().map(|row| row.id).collect();

    let handlers = {
        let email_all = {
            let selected = selected.clone();
            Callback::from(move |()| {
                console::log!("email requested", selected.len().to_string());
            })
        };
        let export_csv = {
            let selected = selected.clone();
            Callback::from(move |()| {
                console::log!("csv export requested", selected.len().to_string());
            })
        };
        let revoke_selected = {
            let rows = rows.clone();
            let selected = selected.clone();
            Callback::from(move |()| {
                let remaining = rows
                    .iter()
                    .filter(|row| !selected.contains(&row.id))
                    .cloned()
                    .collect();
                rows.set(remaining);
                selected.set(BTreeSet::new());
            })
        };
        let clear_selection = {
            let selected = selected.clone();
            Callback::from(move |()| selected.set(BTreeSet::new()))
        };
        BulkActionHandlers {
            email_all,
            export_csv,
            revoke_selected,
            clear_selection,
        }
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                filter.set(value);
            }
        })
    };

    let on_toggle_all = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(select_all_or_clear(&*selected, &visible_ids));
        })
    };

    let on_locale = {
        let cb = props.on_locale_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                    cb.emit(locale);
                }
            }
        })
    };

    let body = if rows.is_empty() {
        let (title, message) = config.collection.copy_keys();
        let reset = {
            let rows = rows.clone();
            Callback::from(move |()| rows.set(demo_rows()))
        };
        html! {
            <EmptyState
                title={bundle.text(title, "Nothing here yet")}
                message={bundle.text(message, "")}
                variant={config.collection}
                action={EmptyStateAction::new(bundle.text("credentials.reset", "Restore demo data"), reset)}
            />
        }
    } else if visible.is_empty() {
        let (title, message) = EmptyStateVariant::Search.copy_keys();
        html! {
            <EmptyState
                title={bundle.text(title, "No matches")}
                message={bundle.text(message, "")}
                variant={EmptyStateVariant::Search}
            />
        }
    } else {
        html! {
            <ul class="menu w-full rounded-box bg-base-100">
                { for visible.iter().map(|row| {
                    let id = row.id;
                    let checked = selected.contains(&id);
                    let on_toggle = {
                        let selected = selected.clone();
                        Callback::from(move |_: Event| selected.set(toggle_selection(&*selected, &id)))
                    };
                    html! {
                        <li key={id}>
                            <label class="flex items-center gap-3">
                                <input type="checkbox" class="checkbox checkbox-sm" {checked} onchange={on_toggle} />
                                <span class="flex-1">{row.name}</span>
                                <span class="text-sm text-base-content/60">{row.issuer}</span>
                            </label>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <div class="mx-auto max-w-3xl space-y-4 p-6">
            <header class="flex items-center gap-3">
                <h1 class="flex-1 text-2xl font-bold">{bundle.text("credentials.title", "Credentials")}</h1>
                <label class="flex items-center gap-2 text-sm">
                    <span>{bundle.text("credentials.locale", "Language")}</span>
                    <select class="select select-sm" onchange={on_locale}>
                        { for LocaleCode::all().into_iter().map(|locale| html! {
                            <option value={locale.code()} selected={locale == bundle.locale}>{locale.label()}</option>
                        }) }
                    </select>
                </label>
                <Link<Route> to={Route::SignIn} classes={classes!("btn", "btn-ghost", "btn-sm")}>
                    {bundle.text("credentials.sign_in", "Sign in")}
                </Link<Route>>
            </header>
            <div class="flex gap-2">
                <input
                    class="input input-sm input-bordered flex-1"
                    placeholder={bundle.text("credentials.search_placeholder", "Filter")}
                    value={(*filter).clone()}
                    oninput={on_filter}
                />
                <button type="button" class="btn btn-sm" onclick={on_toggle_all}>{"☑"}</button>
            </div>
            <BulkActionBar selected_count={selected.len()} {handlers} />
            {body}
        </div>
    }
}

#[function_component(SignInPage)]
pub(crate) fn sign_in_page() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                email.set(value);
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                password.set(value);
            }
        })
    };
    let on_submit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            console::log!("sign-in submitted", (*email).clone());
        })
    };

    html! {
        <AuthLayout
            title={bundle.text("auth.sign_in_title", "Sign in")}
            subtitle={bundle.text("auth.sign_in_subtitle", "")}
        >
            <form class="space-y-4" onsubmit={on_submit}>
                <label class="form-control">
                    <span class="label-text">{bundle.text("auth.email_label", "Email")}</span>
                    <input type="email" class="input input-bordered" value={(*email).clone()} oninput={on_email} />
                </label>
                <label class="form-control">
                    <span class="label-text">{bundle.text("auth.password_label", "Password")}</span>
                    <input
                        type="password"
                        class="input input-bordered"
                        autocomplete="new-password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                </label>
                <StrengthMeter password={(*password).clone()} />
                <button type="submit" class="btn btn-primary w-full">{bundle.text("auth.submit", "Continue")}</button>
            </form>
        </AuthLayout>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let navigator = use_navigator();
    let go_home = Callback::from(move |()| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Home);
        }
    });
    html! {
        <EmptyState
            title={bundle.text("not_found.title", "Page not found")}
            message={bundle.text("not_found.body", "")}
            action={EmptyStateAction::new(bundle.text("not_found.action", "Back to home"), go_home)}
        />
    }
}
