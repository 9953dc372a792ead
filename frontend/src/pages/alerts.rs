use yew::prelude::*;

use crate::components::icons::{icon_alert, icon_bell, icon_check_circle, icon_close, icon_info};
use crate::components::page_shell;
use crate::ledger::{Ledger, LedgerAction};
use crate::models::NotificationKind;

fn kind_style(kind: NotificationKind) -> (&'static str, fn() -> Html) {
    match kind {
        NotificationKind::Danger => ("bg-red-500/10 text-red-500", icon_alert),
        NotificationKind::Warning => ("bg-orange-500/10 text-orange-500", icon_alert),
        NotificationKind::Info => ("bg-blue-500/10 text-blue-500", icon_info),
        NotificationKind::Success => ("bg-primary/10 text-primary", icon_check_circle),
    }
}

#[function_component(AlertsPage)]
pub fn alerts_page() -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let Some(ledger) = ledger else {
        return html! {};
    };
    let notifications = ledger.notifications();

    let body = if notifications.is_empty() {
        html! {
            <div class="flex flex-col items-center justify-center gap-4 py-24 opacity-50">
                { icon_bell() }
                <h2 class="text-xl font-black">{"Sin notificaciones"}</h2>
                <p class="text-sm font-medium">{"Estás al día. No hay alertas nuevas."}</p>
            </div>
        }
    } else {
        html! {
            <div class="flex flex-col gap-4">
                { for notifications.into_iter().map(|n| {
                    let (badge, icon) = kind_style(n.kind);
                    let on_dismiss = {
                        let ledger = ledger.clone();
                        let id = n.id.clone();
                        Callback::from(move |_| ledger.dispatch(LedgerAction::DismissNotification(id.clone())))
                    };
                    html! {
                        <div key={n.id.clone()} class="bg-card-light dark:bg-card-dark rounded-3xl border border-border-light dark:border-border-dark p-6 flex gap-5 items-start shadow-sm">
                            <div class={classes!("p-3", "rounded-2xl", "shrink-0", badge)}>{ icon() }</div>
                            <div class="flex-1 flex flex-col gap-1">
                                <div class="flex items-center justify-between gap-4">
                                    <h3 class="font-black">{ n.title }</h3>
                                    <span class="text-[10px] font-bold uppercase opacity-50">{ n.time }</span>
                                </div>
                                <p class="text-sm opacity-70 leading-relaxed">{ n.msg }</p>
                            </div>
                            <button onclick={on_dismiss} title="Descartar" class="p-2 rounded-full opacity-50 hover:opacity-100">
                                { icon_close() }
                            </button>
                        </div>
                    }
                }) }
            </div>
        }
    };

    page_shell(
        "Notificaciones",
        "Mantente informado de tus movimientos importantes.",
        html! {},
        body,
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
                <AlertsPage />
            </ContextProvider<UseReducerHandle<Ledger>>>
        }
    }

    #[wasm_bindgen_test]
    async fn lists_seeded_alerts_from_context() {
        let root = gloo::utils::document().create_element("div").unwrap();
        yew::Renderer::<WithLedger>::with_root(root.clone()).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Notificaciones"));
        assert!(text.contains("Gasto Inusual Detectado"));
    }

    #[wasm_bindgen_test]
    async fn renders_nothing_without_a_ledger() {
        let root = gloo::utils::document().create_element("div").unwrap();
        yew::Renderer::<AlertsPage>::with_root(root.clone()).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(root.inner_html(), "");
    }
}
