use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::goal_modal::GoalModal;
use crate::components::icons::{icon_plus, icon_target, icon_trash, icon_trophy};
use crate::components::{confirm, page_shell};
use crate::drafts::parse_amount;
use crate::ledger::{Ledger, LedgerAction};
use crate::models::{Goal, Priority};
use crate::money::format_amount;
use crate::stats;

fn priority_classes(priority: Priority) -> (&'static str, &'static str) {
    match priority {
        Priority::High => ("bg-red-500/10 text-red-500 border-red-500/20", "bg-red-500"),
        Priority::Medium => ("bg-orange-500/10 text-orange-500 border-orange-500/20", "bg-orange-500"),
        Priority::Low => ("bg-primary/10 text-primary border-primary/20", "bg-primary"),
    }
}

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let show_add = use_state(|| false);

    let Some(ledger) = ledger else {
        return html! {};
    };

    let open_add = {
        let show_add = show_add.clone();
        Callback::from(move |_| show_add.set(true))
    };
    let close_add = {
        let show_add = show_add.clone();
        Callback::from(move |_| show_add.set(false))
    };
    let on_save = {
        let ledger = ledger.clone();
        Callback::from(move |goal: Goal| ledger.dispatch(LedgerAction::AddGoal(goal)))
    };

    let body = if ledger.goals.is_empty() {
        html! {
            <div class="flex flex-col items-center justify-center gap-8 py-32 opacity-40">
                <div class="size-32 rounded-full border-4 border-dashed border-border-light dark:border-border-dark flex items-center justify-center">
                    { icon_target() }
                </div>
                <div class="text-center flex flex-col gap-3 max-w-sm">
                    <h2 class="text-2xl font-black">{"Aún no tienes metas"}</h2>
                    <p class="text-sm font-bold uppercase tracking-widest leading-relaxed">
                        {"Tus metas de ahorro aparecerán aquí una vez que crees la primera."}
                    </p>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for ledger.goals.iter().map(|goal| html! {
                    <GoalCard key={goal.id.clone()} goal={goal.clone()} currency_symbol={ledger.currency_symbol()} />
                }) }
            </div>
        }
    };

    html! {
        { page_shell(
            "Tus Metas",
            "Visualiza y alcanza tus objetivos financieros.",
            html! {
                <button onclick={open_add} class="bg-primary text-[#102216] font-black px-10 py-5 rounded-2xl shadow-xl shadow-primary/20 flex items-center justify-center gap-2">
                    { icon_plus() }
                    {"Nueva Meta de Ahorro"}
                </button>
            },
            html! {
                <>
                    { body }
                    <GoalModal open={*show_add} on_close={close_add} {on_save} />
                </>
            }
        ) }
    }
}

#[derive(Properties, PartialEq)]
struct GoalCardProps {
    goal: Goal,
    currency_symbol: &'static str,
}

#[function_component(GoalCard)]
fn goal_card(props: &GoalCardProps) -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let contribution = use_state(String::new);
    let error = use_state(|| None::<String>);

    let goal = &props.goal;
    let symbol = props.currency_symbol;
    let progress = stats::goal_progress(goal);
    let (badge_class, bar_class) = priority_classes(goal.priority);

    let on_input = {
        let contribution = contribution.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                contribution.set(input.value());
            }
        })
    };
    let on_contribute = {
        let ledger = ledger.clone();
        let contribution = contribution.clone();
        let error = error.clone();
        let goal_id = goal.id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ledger) = &ledger else {
                return;
            };
            match parse_amount(&contribution) {
                Ok(amount) => {
                    ledger.dispatch(LedgerAction::Contribute {
                        goal_id: goal_id.clone(),
                        amount,
                    });
                    contribution.set(String::new());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };
    let on_delete = {
        let goal_id = goal.id.clone();
        Callback::from(move |_| {
            if let Some(ledger) = &ledger {
                if confirm("¿Confirmas que quieres eliminar esta meta?") {
                    ledger.dispatch(LedgerAction::DeleteGoal(goal_id.clone()));
                }
            }
        })
    };

    let status = if stats::goal_is_complete(goal) {
        html! { <span class="flex items-center gap-1 text-primary">{ icon_trophy() }{"¡Meta Completada! 🏆"}</span> }
    } else {
        html! { <span>{ format!("Falta {}", format_amount(stats::goal_remaining(goal), symbol)) }</span> }
    };

    html! {
        <div class="bg-card-light dark:bg-card-dark rounded-3xl border border-border-light dark:border-border-dark p-8 shadow-sm flex flex-col gap-6">
            <div class="flex justify-between items-start">
                <span class="text-[10px] font-black uppercase tracking-widest opacity-60">{ &goal.category }</span>
                <div class="flex items-center gap-2">
                    <span class={classes!("text-[10px]", "font-black", "uppercase", "tracking-widest", "px-3", "py-1", "rounded-full", "border", badge_class)}>
                        { format!("Prio: {}", goal.priority.label()) }
                    </span>
                    <button onclick={on_delete} title="Borrar meta" class="p-2.5 bg-red-500/10 text-red-500 rounded-xl hover:bg-red-500 hover:text-white">
                        { icon_trash() }
                    </button>
                </div>
            </div>

            <div>
                <h3 class="text-2xl font-black mb-1 truncate">{ &goal.title }</h3>
                <p class="text-xs font-bold uppercase tracking-wider opacity-70">{ status }</p>
            </div>

            <div class="flex flex-col gap-3">
                <div class="flex items-baseline justify-between">
                    <span class="text-3xl font-black">{ format_amount(goal.current, symbol) }</span>
                    <span class="text-xs font-bold opacity-50">{ format!("de {}", format_amount(goal.target, symbol)) }</span>
                </div>
                <div class="h-4 w-full bg-background-light dark:bg-background-dark rounded-full overflow-hidden p-1">
                    <div class={classes!("h-full", "rounded-full", bar_class)} style={format!("width: {}%", stats::goal_bar_width(goal))}></div>
                </div>
                <span class="text-[10px] font-black uppercase tracking-widest opacity-60">{ format!("{}% Logrado", progress) }</span>
            </div>

            <form onsubmit={on_contribute} class="flex gap-2">
                <input type="text" inputmode="decimal" placeholder="Monto a aportar"
                    value={(*contribution).clone()} oninput={on_input}
                    class="flex-1 bg-background-light dark:bg-background-dark rounded-xl px-4 py-2 text-sm font-bold outline-none" />
                <button type="submit" class="bg-primary text-[#102216] font-black px-4 rounded-xl text-sm">{"Aportar"}</button>
            </form>
            {
                if let Some(msg) = &*error {
                    html! { <p class="text-xs text-red-500">{ msg.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
