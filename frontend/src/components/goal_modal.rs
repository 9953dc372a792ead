use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::icons::{icon_check_circle, icon_close};
use crate::drafts::GoalDraft;
use crate::models::{Goal, Priority, GOAL_CATEGORIES};

#[derive(Properties, PartialEq)]
pub struct GoalModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_save: Callback<Goal>,
}

#[function_component(GoalModal)]
pub fn goal_modal(props: &GoalModalProps) -> Html {
    let draft = use_state(GoalDraft::default);
    let error = use_state(|| None::<String>);

    if !props.open {
        return html! {};
    }

    let on_text = |apply: fn(&mut GoalDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };
    let on_priority = |priority: Priority| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.priority = priority;
            draft.set(next);
        })
    };
    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select = e.target_unchecked_into::<HtmlSelectElement>();
            let mut next = (*draft).clone();
            next.category = select.value();
            draft.set(next);
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let error = error.clone();
        Callback::from(move |_| {
            error.set(None);
            on_close.emit(());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(goal) => {
                    on_save.emit(goal);
                    draft.set(GoalDraft::default());
                    error.set(None);
                    on_close.emit(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let field = "w-full bg-background-light dark:bg-background-dark border-2 border-transparent focus:border-primary/50 rounded-2xl px-5 py-4 outline-none text-sm font-bold";

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-background-dark/90 backdrop-blur-md">
            <div class="bg-card-light dark:bg-card-dark w-full max-w-md rounded-3xl border border-border-light dark:border-border-dark p-8 shadow-2xl">
                <div class="flex justify-between items-center mb-8">
                    <div class="flex flex-col">
                        <h2 class="text-2xl font-black">{"Nueva Meta"}</h2>
                        <p class="text-xs font-bold opacity-60 uppercase tracking-widest">{"Define tu objetivo"}</p>
                    </div>
                    <button onclick={on_close} class="size-10 flex items-center justify-center rounded-full">{ icon_close() }</button>
                </div>

                <form onsubmit={on_submit} class="flex flex-col gap-6">
                    <div class="flex flex-col gap-2">
                        <label class="text-[10px] font-black uppercase opacity-50 ml-1 tracking-tighter">{"¿Qué quieres lograr?"}</label>
                        <input type="text" placeholder="Ej: Comprar Laptop, Fondo de Emergencia..." class={field}
                            value={draft.title.clone()}
                            oninput={on_text(|d, v| d.title = v)} />
                    </div>

                    <div class="flex flex-col gap-2">
                        <label class="text-[10px] font-black uppercase opacity-50 ml-1 tracking-tighter">{"Monto Objetivo"}</label>
                        <input type="text" inputmode="decimal" placeholder="0,00" class={field}
                            value={draft.target.clone()}
                            oninput={on_text(|d, v| d.target = v)} />
                    </div>

                    <div class="flex flex-col gap-2">
                        <label class="text-[10px] font-black uppercase opacity-50 ml-1 tracking-tighter">{"Categoría"}</label>
                        <select class={field} onchange={on_category}>
                            { for GOAL_CATEGORIES.iter().map(|c| html! {
                                <option value={*c} selected={draft.category == *c}>{ *c }</option>
                            }) }
                        </select>
                    </div>

                    <div class="flex flex-col gap-2">
                        <label class="text-[10px] font-black uppercase opacity-50 ml-1 tracking-tighter">{"Prioridad de Ahorro"}</label>
                        <div class="grid grid-cols-3 gap-2">
                            { for Priority::ALL.into_iter().map(|p| {
                                let class_name = if draft.priority == p {
                                    "py-3 rounded-xl text-[10px] font-black uppercase tracking-widest border-2 bg-primary/10 border-primary text-primary"
                                } else {
                                    "py-3 rounded-xl text-[10px] font-black uppercase tracking-widest border-2 bg-background-light dark:bg-background-dark border-transparent opacity-50"
                                };
                                html! {
                                    <button type="button" class={class_name} onclick={on_priority(p)}>{ p.label() }</button>
                                }
                            }) }
                        </div>
                    </div>

                    {
                        if let Some(msg) = &*error {
                            html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="w-full bg-primary text-[#102216] font-black py-5 rounded-2xl shadow-xl shadow-primary/20 mt-4 flex items-center justify-center gap-2">
                        { icon_check_circle() }
                        {"Guardar Meta de Ahorro"}
                    </button>
                </form>
            </div>
        </div>
    }
}
