use yew::prelude::*;

use crate::components::icons::{icon_check_circle, icon_trash};
use crate::components::{confirm, page_shell};
use crate::ledger::{Ledger, LedgerAction};
use crate::models::{Currency, Theme, UserSettings};
use crate::storage::Persistence;

const RESET_PROMPT: &str = "¿Estás seguro de que quieres borrar TODOS tus datos? Esta acción es irreversible.";

fn option_class(selected: bool) -> &'static str {
    if selected {
        "flex items-center gap-4 p-5 rounded-2xl border bg-primary/10 border-primary text-primary font-black shadow-sm"
    } else {
        "flex items-center gap-4 p-5 rounded-2xl border bg-background-light dark:bg-background-dark border-border-light dark:border-border-dark hover:border-primary/50"
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let Some(ledger) = ledger else {
        return html! {};
    };
    let current = ledger.settings.clone();

    let set_settings = |next: UserSettings| {
        let ledger = ledger.clone();
        Callback::from(move |_: MouseEvent| ledger.dispatch(LedgerAction::SetSettings(next.clone())))
    };

    let on_reset = {
        let ledger = ledger.clone();
        Callback::from(move |_| {
            if !confirm(RESET_PROMPT) {
                return;
            }
            if let Err(e) = Persistence::browser().clear_data() {
                log::error!("could not clear stored data: {}", e);
            }
            ledger.dispatch(LedgerAction::ClearData);
        })
    };

    page_shell(
        "Configuración",
        "Personaliza tu experiencia financiera.",
        html! {},
        html! {
            <>
                <section class="bg-card-light dark:bg-card-dark rounded-3xl border border-border-light dark:border-border-dark p-8 shadow-sm">
                    <h2 class="text-lg font-black mb-6">{"Moneda Principal"}</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        { for Currency::ALL.into_iter().map(|currency| {
                            let next = UserSettings { currency, ..current.clone() };
                            html! {
                                <button key={currency.code()} class={option_class(current.currency == currency)} onclick={set_settings(next)}>
                                    <span class="text-sm">{ currency.label() }</span>
                                    <span class="ml-auto text-[10px] font-black opacity-60">{ currency.code() }</span>
                                </button>
                            }
                        }) }
                    </div>
                </section>

                <section class="bg-card-light dark:bg-card-dark rounded-3xl border border-border-light dark:border-border-dark p-8 shadow-sm">
                    <h2 class="text-lg font-black mb-6">{"Apariencia"}</h2>
                    <div class="flex flex-col gap-3">
                        { for Theme::ALL.into_iter().map(|theme| {
                            let next = UserSettings { theme, ..current.clone() };
                            let selected = current.theme == theme;
                            html! {
                                <button key={theme.label()} class={option_class(selected)} onclick={set_settings(next)}>
                                    <span class="text-sm">{ theme.label() }</span>
                                    { if selected { html! { <span class="ml-auto">{ icon_check_circle() }</span> } } else { html! {} } }
                                </button>
                            }
                        }) }
                    </div>
                </section>

                <section class="bg-red-500/5 border border-red-500/20 rounded-3xl p-8">
                    <h2 class="text-lg font-black text-red-500 mb-2 flex items-center gap-2">{ icon_trash() }{"Zona de Peligro"}</h2>
                    <p class="text-xs font-bold mb-6 opacity-70">
                        {"Esta acción borrará todas tus transacciones y metas de forma permanente. Tu configuración se conserva."}
                    </p>
                    <button onclick={on_reset} class="bg-red-500 text-white font-black py-4 px-10 rounded-2xl hover:bg-red-600 text-sm shadow-lg shadow-red-500/20">
                        {"Restablecer todos los datos"}
                    </button>
                </section>
            </>
        },
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::time::Duration;

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(WithLedger)]
    fn with_ledger() -> Html {
        let ledger = use_reducer(Ledger::default);
        html! {
            <ContextProvider<UseReducerHandle<Ledger>> context={ledger}>
                <SettingsPage />
            </ContextProvider<UseReducerHandle<Ledger>>>
        }
    }

    #[wasm_bindgen_test]
    async fn shows_currency_and_theme_choices() {
        let root = gloo::utils::document().create_element("div").unwrap();
        yew::Renderer::<WithLedger>::with_root(root.clone()).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Moneda Principal"));
        assert!(text.contains(Currency::Ars.label()));
        assert!(text.contains(Theme::System.label()));
    }
}
