use yew::prelude::*;

use super::icons::*;
use crate::ledger::Ledger;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: Route,
    pub on_select: Callback<Route>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let mobile_open = use_state(|| false);

    let on_select_mobile = {
        let mobile_open = mobile_open.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |route: Route| {
            mobile_open.set(false);
            on_select.emit(route);
        })
    };
    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_| mobile_open.set(!*mobile_open))
    };

    html! {
        <div class="flex h-screen bg-background-light dark:bg-background-dark text-[#102216] dark:text-white">
            <div class="hidden md:flex">
                <Sidebar active={props.active} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header on_menu={toggle_mobile} on_select={props.on_select.clone()} />
                {
                    if *mobile_open {
                        html! { <MobileNav active={props.active} on_select={on_select_mobile} /> }
                    } else {
                        html! {}
                    }
                }
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_menu: Callback<MouseEvent>,
    on_select: Callback<Route>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let show_notifications = use_state(|| false);
    let toggle_notifications = {
        let show_notifications = show_notifications.clone();
        Callback::from(move |_| show_notifications.set(!*show_notifications))
    };

    let (notifications, unread) = ledger
        .as_ref()
        .map(|l| (l.notifications(), l.unread_count()))
        .unwrap_or_default();

    let open_alerts = {
        let show_notifications = show_notifications.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_| {
            show_notifications.set(false);
            on_select.emit(Route::Alerts);
        })
    };

    html! {
        <header class="border-b border-border-light dark:border-border-dark h-16 flex items-center justify-between px-6 bg-card-light dark:bg-card-dark">
            <button class="md:hidden p-2 rounded-full" aria-label="Menú" onclick={props.on_menu.clone()}>
                { icon_menu() }
            </button>
            <div class="flex-1"></div>
            <div class="relative flex items-center gap-4">
                <button class="p-2 hover:bg-background-light dark:hover:bg-background-dark rounded-full transition-colors relative" aria-label="Notificaciones" onclick={toggle_notifications}>
                    { icon_bell() }
                    { if unread > 0 {
                        html! { <span class="absolute top-1 right-1 w-2 h-2 bg-red-500 rounded-full"></span> }
                    } else { html! {} } }
                </button>
                {
                    if *show_notifications {
                        html! {
                            <div class="absolute right-0 top-12 w-80 bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark rounded-xl shadow-lg overflow-hidden z-50">
                                <div class="px-4 py-3 border-b border-border-light dark:border-border-dark flex items-center justify-between">
                                    <h4 class="text-sm font-bold">{"Notificaciones"}</h4>
                                    <span class="text-[10px] font-bold opacity-50">{ format!("{} sin leer", unread) }</span>
                                </div>
                                <div class="divide-y divide-border-light dark:divide-border-dark">
                                    { for notifications.iter().take(3).map(|n| html! {
                                        <div key={n.id.clone()} class="px-4 py-3">
                                            <div class="flex items-center justify-between">
                                                <p class="text-sm font-bold">{ &n.title }</p>
                                                <span class="text-[10px] opacity-50 font-bold uppercase tracking-tighter">{ &n.time }</span>
                                            </div>
                                            <p class="text-xs opacity-70 mt-1">{ &n.msg }</p>
                                        </div>
                                    }) }
                                </div>
                                <button class="w-full px-4 py-2 text-xs font-bold text-primary" onclick={open_alerts}>
                                    {"Ver todas"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}

fn route_icon(route: Route) -> Html {
    match route {
        Route::Dashboard => icon_layout_grid(),
        Route::Trends => icon_bar_chart(),
        Route::Budget => icon_wallet(),
        Route::Goals => icon_target(),
        Route::Education => icon_book(),
        Route::Community => icon_users(),
        Route::Alerts => icon_bell(),
        Route::Ai => icon_sparkles(),
        Route::Settings => icon_settings(),
    }
}

fn nav_button(route: Route, active: Route, on_select: &Callback<Route>) -> Html {
    let class_name = if route == active {
        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-bold bg-primary text-[#102216] w-full"
    } else {
        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium opacity-70 hover:opacity-100 hover:bg-primary/10 w-full"
    };
    let on_select = on_select.clone();

    html! {
        <button type="button" key={route.id()} class={class_name} onclick={Callback::from(move |_| on_select.emit(route))}>
            <span class="shrink-0">{ route_icon(route) }</span>
            <span class="truncate whitespace-nowrap text-left">{ route.label() }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct NavProps {
    active: Route,
    on_select: Callback<Route>,
}

#[function_component(Sidebar)]
fn sidebar(props: &NavProps) -> Html {
    html! {
        <div class="w-[240px] h-screen p-4 flex flex-col bg-card-light dark:bg-card-dark border-r border-border-light dark:border-border-dark">
            <a href={Route::Dashboard.href()} class="flex items-center gap-3 px-2 mb-8">
                <div class="w-10 h-10 bg-primary rounded-xl flex items-center justify-center text-[#102216]">
                    { icon_bank() }
                </div>
                <span class="text-2xl font-black tracking-tight">{"Finanwise"}</span>
            </a>

            <nav class="flex-1 space-y-1">
                { for Route::ALL.into_iter().map(|route| nav_button(route, props.active, &props.on_select)) }
            </nav>
        </div>
    }
}

#[function_component(MobileNav)]
fn mobile_nav(props: &NavProps) -> Html {
    html! {
        <nav class="md:hidden border-b border-border-light dark:border-border-dark bg-card-light dark:bg-card-dark p-3 space-y-1">
            { for Route::ALL.into_iter().map(|route| nav_button(route, props.active, &props.on_select)) }
        </nav>
    }
}
