mod assistant;
mod components;
mod config;
mod drafts;
mod ledger;
mod logging;
mod models;
mod money;
mod pages;
mod report;
mod routes;
mod stats;
mod storage;
mod theme;

use gloo::events::EventListener;
use yew::prelude::*;

use components::layout::Layout;
use config::AppConfig;
use ledger::Ledger;
use pages::alerts::AlertsPage;
use pages::assistant::AssistantPage;
use pages::budget::BudgetPage;
use pages::community::CommunityPage;
use pages::dashboard::DashboardPage;
use pages::education::EducationPage;
use pages::goals::GoalsPage;
use pages::settings::SettingsPage;
use pages::trends::TrendsPage;
use routes::Route;
use storage::Persistence;

fn load_ledger() -> Ledger {
    let ledger = Persistence::browser().load_ledger();
    log::info!(
        "loaded {} transactions and {} goals",
        ledger.transactions.len(),
        ledger.goals.len()
    );
    ledger
}

#[function_component(App)]
fn app() -> Html {
    let ledger = use_reducer(load_ledger);
    let route = use_state(Route::current);

    {
        let route = route.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "hashchange", move |_| route.set(Route::current()))
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        // last state written to storage; starts as the loaded state so mounting writes nothing
        let saved = use_mut_ref(|| (*ledger).clone());
        use_effect_with_deps(
            move |current: &Ledger| {
                let mut saved = saved.borrow_mut();
                if let Err(e) = Persistence::browser().save_changes(&saved, current) {
                    log::error!("could not persist ledger: {}", e);
                }
                *saved = current.clone();
                || ()
            },
            (*ledger).clone(),
        );
    }

    use_effect_with_deps(
        |theme| {
            theme::apply(*theme);
            || ()
        },
        ledger.settings.theme,
    );

    let on_select = Callback::from(routes::navigate);

    let content = match *route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Trends => html! { <TrendsPage /> },
        Route::Budget => html! { <BudgetPage /> },
        Route::Goals => html! { <GoalsPage /> },
        Route::Education => html! { <EducationPage /> },
        Route::Community => html! { <CommunityPage /> },
        Route::Alerts => html! { <AlertsPage /> },
        Route::Ai => html! { <AssistantPage /> },
        Route::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<UseReducerHandle<Ledger>> context={ledger}>
            <Layout active={*route} {on_select}>
                { content }
            </Layout>
        </ContextProvider<UseReducerHandle<Ledger>>>
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    if let Err(e) = logging::init(config.log_level) {
        gloo::console::warn!(format!("logger already installed: {}", e));
    }
    yew::Renderer::<App>::new().render();
}
