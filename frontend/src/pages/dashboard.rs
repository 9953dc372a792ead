use yew::prelude::*;

use crate::components::icons::{icon_arrow_right, icon_plus, icon_wallet};
use crate::components::page_shell;
use crate::components::stat_card::{StatCard, StatIcon};
use crate::components::transaction_modal::TransactionModal;
use crate::ledger::{Ledger, LedgerAction};
use crate::models::Transaction;
use crate::routes::{navigate, Route};
use crate::stats;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let show_add = use_state(|| false);

    let Some(ledger) = ledger else {
        return html! {};
    };

    let totals = stats::totals(&ledger.transactions);
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
    let to_budget = Callback::from(|_| navigate(Route::Budget));

    html! {
        { page_shell(
            "Hola, Inversor 👋",
            "Tu patrimonio consolidado al día de hoy. Gestiona tus finanzas con precisión.",
            html! {
                <button onclick={open_add} class="bg-primary text-[#102216] font-black px-8 py-4 rounded-2xl shadow-xl shadow-primary/20 flex items-center gap-3">
                    { icon_plus() }
                    {"Nuevo Movimiento"}
                </button>
            },
            html! {
                <>
                    <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Patrimonio Neto" caption="Balance total consolidado"
                            amount={totals.net} icon={StatIcon::Bank} currency_symbol={symbol}
                            negative={totals.net.is_sign_negative() && !totals.net.is_zero()}
                            onclick={to_budget.clone()} />
                        <StatCard title="Flujo de Ingresos" caption="Capital entrante acumulado"
                            amount={totals.income} icon={StatIcon::TrendingUp} currency_symbol={symbol}
                            onclick={to_budget.clone()} />
                        <StatCard title="Salidas de Capital" caption="Gastos y pasivos liquidados"
                            amount={totals.expense} icon={StatIcon::TrendingDown} currency_symbol={symbol}
                            negative={true} onclick={to_budget.clone()} />
                    </section>

                    <div class="bg-card-light dark:bg-card-dark rounded-[3rem] border border-border-light dark:border-border-dark p-10 flex flex-col md:flex-row items-center justify-between gap-8">
                        <div class="flex flex-col gap-3 max-w-xl">
                            <h2 class="text-3xl font-black tracking-tight">{"Presupuesto en Detalle"}</h2>
                            <p class="opacity-70 font-medium text-lg leading-relaxed">
                                {"Para ver el historial completo de tus movimientos, tendencias detalladas y análisis de categorías, visita la sección de presupuesto."}
                            </p>
                        </div>
                        <button onclick={to_budget} class="font-black px-10 py-5 rounded-[2rem] border border-border-light dark:border-border-dark hover:border-primary flex items-center gap-3">
                            { icon_wallet() }
                            {"Ir a Presupuesto"}
                            { icon_arrow_right() }
                        </button>
                    </div>

                    <TransactionModal open={*show_add} on_close={close_add} {on_save} />
                </>
            }
        ) }
    }
}
