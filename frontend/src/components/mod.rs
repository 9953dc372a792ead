pub mod goal_modal;
pub mod icons;
pub mod layout;
pub mod monthly_chart;
pub mod stat_card;
pub mod transaction_modal;

use yew::prelude::*;

pub fn page_shell(title: &'static str, subtitle: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 md:p-8 max-w-7xl mx-auto w-full">
            <div class="flex flex-col gap-4 md:flex-row md:items-end md:justify-between pb-6">
                <div class="flex flex-col gap-2">
                    <h1 class="text-3xl md:text-4xl font-black tracking-tight">{ title }</h1>
                    <p class="opacity-70 font-medium">{ subtitle }</p>
                </div>
                { actions }
            </div>
            <div class="space-y-6">
                { children }
            </div>
        </div>
    }
}

/// Blocking browser confirm; `false` when no window is around.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
