use yew::prelude::*;

use crate::components::icons::{icon_plus, icon_trash};
use crate::components::transaction_modal::TransactionModal;
use crate::components::{confirm, page_shell};
use crate::ledger::{Ledger, LedgerAction};
use crate::models::{Transaction, TransactionKind};
use crate::money::format_amount;
use crate::stats;

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let show_add = use_state(|| false);

    let Some(ledger) = ledger else {
        return html! {};
    };

    let totals = stats::totals(&ledger.transactions);
    let history = stats::recent(&ledger.transactions, ledger.transactions.len());
    let symbol = ledger.currency_symbol();

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
        Callback::from(move |tx: Transaction| ledger.dispatch(LedgerAction::AddTransaction(tx)))
    };

    html! {
        { page_shell(
            "Tu Presupuesto",
            "Control total de tus finanzas en tiempo real.",
            html! {
                <button onclick={open_add} class="flex items-center justify-center gap-2 rounded-2xl h-14 px-8 bg-primary text-[#102216] text-sm font-black shadow-lg shadow-primary/20">
                    { icon_plus() }
                    <span>{"Nuevo Movimiento"}</span>
                </button>
            },
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div class="bg-primary p-8 rounded-3xl text-[#102216] flex flex-col gap-1 shadow-xl shadow-primary/10">
                            <p class="text-xs font-black uppercase tracking-widest opacity-70">{"Balance Disponible"}</p>
                            <p class="text-4xl font-black tracking-tighter">{ format_amount(totals.net, symbol) }</p>
                        </div>
                        <div class="bg-card-light dark:bg-card-dark p-8 rounded-3xl border border-border-light dark:border-border-dark flex flex-col gap-1 shadow-sm">
                            <p class="text-xs font-black uppercase tracking-widest opacity-60">{"Total Ingresos"}</p>
                            <p class="text-4xl font-black tracking-tighter text-primary">{ format_amount(totals.income, symbol) }</p>
                        </div>
                        <div class="bg-card-light dark:bg-card-dark p-8 rounded-3xl border border-border-light dark:border-border-dark flex flex-col gap-1 shadow-sm">
                            <p class="text-xs font-black uppercase tracking-widest opacity-60">{"Total Gastos"}</p>
                            <p class="text-4xl font-black tracking-tighter text-red-500">{ format_amount(totals.expense, symbol) }</p>
                        </div>
                    </div>

                    <section class="bg-card-light dark:bg-card-dark rounded-[2.5rem] border border-border-light dark:border-border-dark shadow-sm overflow-hidden">
                        <div class="p-8 border-b border-border-light dark:border-border-dark flex items-center justify-between">
                            <h3 class="font-black text-xl">{"Historial de Movimientos"}</h3>
                            <span class="text-xs font-bold opacity-50">{ format!("{} registros", history.len()) }</span>
                        </div>
                        {
                            if history.is_empty() {
                                html! {
                                    <p class="p-10 text-center text-sm opacity-50 italic">{"Todavía no registraste movimientos."}</p>
                                }
                            } else {
                                html! {
                                    <div class="overflow-x-auto">
                                        <table class="w-full text-left border-collapse">
                                            <thead>
                                                <tr class="text-[10px] uppercase tracking-widest opacity-60">
                                                    <th class="px-8 py-4 font-bold">{"Fecha"}</th>
                                                    <th class="px-8 py-4 font-bold">{"Descripción"}</th>
                                                    <th class="px-8 py-4 font-bold">{"Categoría"}</th>
                                                    <th class="px-8 py-4 font-bold text-right">{"Monto"}</th>
                                                    <th class="px-8 py-4"></th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-border-light dark:divide-border-dark">
                                                { for history.iter().map(|tx| history_row(tx, symbol, &ledger)) }
                                            </tbody>
                                        </table>
                                    </div>
                                }
                            }
                        }
                    </section>

                    <TransactionModal open={*show_add} on_close={close_add} {on_save} />
                </>
            }
        ) }
    }
}

fn history_row(tx: &Transaction, symbol: &str, ledger: &UseReducerHandle<Ledger>) -> Html {
    let (amount_class, amount_label) = match tx.kind {
        TransactionKind::Income => (
            "px-8 py-4 text-right font-black text-primary",
            format!("+{}", format_amount(tx.amount, symbol)),
        ),
        TransactionKind::Expense => (
            "px-8 py-4 text-right font-black text-red-500",
            format_amount(tx.signed_amount(), symbol),
        ),
    };
    let on_delete = {
        let ledger = ledger.clone();
        let id = tx.id.clone();
        Callback::from(move |_| {
            if confirm("¿Estás seguro de que quieres eliminar este movimiento?") {
                ledger.dispatch(LedgerAction::DeleteTransaction(id.clone()));
            }
        })
    };

    html! {
        <tr key={tx.id.clone()} class="text-sm">
            <td class="px-8 py-4 opacity-70">{ tx.date.format("%d/%m/%Y").to_string() }</td>
            <td class="px-8 py-4 font-bold">{ &tx.description }</td>
            <td class="px-8 py-4">
                <span class="bg-primary/10 text-primary px-3 py-1 rounded-full text-[10px] font-black uppercase">{ &tx.category }</span>
            </td>
            <td class={amount_class}>{ amount_label }</td>
            <td class="px-8 py-4 text-right">
                <button onclick={on_delete} title="Eliminar" class="p-2 bg-red-500/10 text-red-500 rounded-xl hover:bg-red-500 hover:text-white">
                    { icon_trash() }
                </button>
            </td>
        </tr>
    }
}
