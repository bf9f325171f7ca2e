//! App root: contexts, router and the wasm entrypoint.

use crate::core::config::ShellConfig;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::routes::Route;
use pages::{HomePage, NotFoundPage, SignInPage};
use preferences::{ROOT_ID, load_locale, load_shell_config, persist_locale};
use yew::prelude::*;
use yew_router::prelude::*;

mod pages;
mod preferences;

#[function_component(CredfolioApp)]
fn credfolio_app() -> Html {
    let locale = use_state(load_locale);
    let config = use_memo(|_| load_shell_config(), ());
    let bundle = use_memo(|locale| TranslationBundle::new(*locale), *locale);

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            persist_locale(next);
            locale.set(next);
        })
    };

    let dir = if bundle.rtl() { "rtl" } else { "ltr" };
    let switch = move |route: Route| match route {
        Route::Home => html! { <HomePage on_locale_change={on_locale_change.clone()} /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <ContextProvider<ShellConfig> context={(*config).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <div dir={dir} lang={locale.code()}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </div>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ShellConfig>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id(ROOT_ID) {
        yew::Renderer::<CredfolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<CredfolioApp>::new().render();
    }
}
