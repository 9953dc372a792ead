use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::icons::icon_close;
use crate::drafts::TransactionDraft;
use crate::models::{today, Transaction, TransactionKind};

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_save: Callback<Transaction>,
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let draft = use_state(|| TransactionDraft::new(today()));
    let error = use_state(|| None::<String>);

    if !props.open {
        return html! {};
    }

    let on_text = |apply: fn(&mut TransactionDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };
    let on_kind = |kind: TransactionKind| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set((*draft).clone().with_kind(kind)))
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
            match draft.validate(today()) {
                Ok(tx) => {
                    on_save.emit(tx);
                    draft.set(TransactionDraft::new(today()));
                    error.set(None);
                    on_close.emit(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let kind_class = |kind: TransactionKind| {
        match (draft.kind == kind, kind) {
            (true, TransactionKind::Expense) => "flex-1 py-2 rounded-lg text-xs font-black uppercase tracking-wider bg-red-500 text-white shadow-lg",
            (true, TransactionKind::Income) => "flex-1 py-2 rounded-lg text-xs font-black uppercase tracking-wider bg-primary text-[#102216] shadow-lg",
            (false, _) => "flex-1 py-2 rounded-lg text-xs font-black uppercase tracking-wider opacity-50",
        }
    };
    let field = "w-full bg-background-light dark:bg-background-dark rounded-2xl px-4 py-3 outline-none focus:ring-2 focus:ring-primary/20 text-sm font-bold";

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-background-dark/80 backdrop-blur-sm">
            <div class="bg-card-light dark:bg-card-dark w-full max-w-md rounded-3xl border border-border-light dark:border-border-dark p-8 shadow-2xl">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-black">{"Nuevo Movimiento"}</h2>
                    <button onclick={on_close} class="p-2 rounded-full">{ icon_close() }</button>
                </div>

                <form onsubmit={on_submit} class="flex flex-col gap-5">
                    <div class="flex bg-background-light dark:bg-background-dark p-1 rounded-xl">
                        <button type="button" onclick={on_kind(TransactionKind::Expense)} class={kind_class(TransactionKind::Expense)}>
                            { TransactionKind::Expense.label() }
                        </button>
                        <button type="button" onclick={on_kind(TransactionKind::Income)} class={kind_class(TransactionKind::Income)}>
                            { TransactionKind::Income.label() }
                        </button>
                    </div>

                    <div class="flex flex-col gap-2">
                        <label class="text-xs font-black uppercase opacity-50 ml-1">{"Descripción"}</label>
                        <input type="text" placeholder="Ej: Supermercado, Sueldo..." class={field}
                            value={draft.description.clone()}
                            oninput={on_text(|d, v| d.description = v)} />
                    </div>

                    <div class="flex flex-col gap-2">
                        <label class="text-xs font-black uppercase opacity-50 ml-1">{"Monto"}</label>
                        <input type="text" inputmode="decimal" placeholder="0,00" class={field}
                            value={draft.amount.clone()}
                            oninput={on_text(|d, v| d.amount = v)} />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="flex flex-col gap-2">
                            <label class="text-xs font-black uppercase opacity-50 ml-1">{"Categoría"}</label>
                            <select class={field} onchange={on_category}>
                                { for draft.kind.categories().iter().map(|c| html! {
                                    <option value={*c} selected={draft.category == *c}>{ *c }</option>
                                }) }
                            </select>
                        </div>
                        <div class="flex flex-col gap-2">
                            <label class="text-xs font-black uppercase opacity-50 ml-1">{"Fecha"}</label>
                            <input type="date" class={field}
                                value={draft.date.clone()}
                                oninput={on_text(|d, v| d.date = v)} />
                        </div>
                    </div>

                    {
                        if let Some(msg) = &*error {
                            html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="w-full bg-primary text-[#102216] font-black py-4 rounded-2xl shadow-xl shadow-primary/20 mt-4">
                        {"Registrar Movimiento"}
                    </button>
                </form>
            </div>
        </div>
    }
}
