//! Header / card / footer chrome around authentication forms.

use crate::components::icons::IconShieldCheck;
use crate::core::auth_layout::auth_layout_view;
use crate::core::config::ShellConfig;
use crate::i18n::TranslationBundle;
use crate::routes::Route;
use js_sys::Date;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct AuthLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthLayout)]
pub(crate) fn auth_layout(props: &AuthLayoutProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let config = use_context::<ShellConfig>().unwrap_or_default();
    let view = auth_layout_view(
        props.title.as_str(),
        props.subtitle.as_ref().map(AttrValue::as_str),
        &config,
        Date::new_0().get_full_year(),
        &bundle,
    );
    html! {
        <div class="auth-layout flex min-h-screen flex-col bg-base-200">
            <header class="navbar bg-base-100 px-6 shadow-sm">
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("flex", "items-center", "gap-2", "text-lg", "font-semibold")}
                >
                    <IconShieldCheck class="text-primary" size="6" title={view.home_label} />
                    <span>{view.brand}</span>
                </Link<Route>>
            </header>
            <main class="flex flex-1 items-center justify-center px-4 py-12">
                <div class="w-full max-w-md">
                    <h1 class="text-center text-2xl font-bold">{view.title}</h1>
                    {view.subtitle.map(|text| html! {
                        <p class="mt-2 text-center text-sm text-base-content/70">{text}</p>
                    }).unwrap_or_default()}
                    <div class="card mt-8 border border-base-300 bg-base-100">
                        <div class="card-body">
                            { for props.children.iter() }
                        </div>
                    </div>
                </div>
            </main>
            <footer class="footer footer-center p-6 text-sm text-base-content/60">
                <p>{view.copyright}</p>
            </footer>
        </div>
    }
}
