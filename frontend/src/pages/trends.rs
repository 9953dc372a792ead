use yew::prelude::*;

use crate::components::icons::{icon_download, icon_sparkles, icon_trending_down, icon_trending_up};
use crate::components::monthly_chart::MonthlyChart;
use crate::components::page_shell;
use crate::ledger::Ledger;
use crate::models::today;
use crate::money::{format_amount, format_thousands, format_whole};
use crate::report;
use crate::stats::{self, CategoryShare, Period, TrendStats};

const SLICE_COLORS: [&str; 6] = ["#13ec5b", "#102216", "#87a893", "#f97316", "#3b82f6", "#a855f7"];

#[function_component(TrendsPage)]
pub fn trends_page() -> Html {
    let ledger = use_context::<UseReducerHandle<Ledger>>();
    let period = use_state(|| Period::ThisYear);
    let export_error = use_state(|| None::<String>);

    let Some(ledger) = ledger else {
        return html! {};
    };

    let filtered = period.filter(&ledger.transactions, today());
    let trend = TrendStats::compute(&filtered);
    let series = stats::monthly_series(&filtered);
    let symbol = ledger.currency_symbol();
    let net = trend.totals.net;

    let on_export = {
        let export_error = export_error.clone();
        Callback::from(move |_| match report::download_csv(&filtered) {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::error!("report export failed: {}", e);
                export_error.set(Some("No se pudo generar el reporte.".to_string()));
            }
        })
    };

    html! {
        { page_shell(
            "Análisis Detallado de Tendencias",
            "Visualiza tus patrones y toma el control de tu futuro financiero.",
            html! {
                <button onclick={on_export} class="flex items-center gap-2 bg-[#102216] dark:bg-white text-white dark:text-[#102216] px-6 py-3 rounded-xl font-bold text-sm shadow-lg">
                    { icon_download() }
                    {"Exportar Reporte"}
                </button>
            },
            html! {
                <>
                    {
                        if let Some(msg) = &*export_error {
                            html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }

                    <div class="flex gap-3 overflow-x-auto pb-2">
                        { for Period::ALL.into_iter().map(|p| {
                            let class_name = if *period == p {
                                "flex h-10 shrink-0 items-center rounded-xl px-6 font-bold text-sm bg-[#102216] dark:bg-primary text-white dark:text-black"
                            } else {
                                "flex h-10 shrink-0 items-center rounded-xl px-6 font-bold text-sm bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark opacity-70"
                            };
                            let period = period.clone();
                            html! {
                                <button key={p.label()} class={class_name} onclick={Callback::from(move |_| period.set(p))}>
                                    { p.label() }
                                </button>
                            }
                        }) }
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="flex flex-col gap-1 p-8 rounded-3xl bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark">
                            <h3 class="text-xs font-black uppercase tracking-widest opacity-60">{"Evolución de Egresos"}</h3>
                            <div class="flex items-baseline gap-2">
                                <span class="text-3xl font-black">{ format_whole(trend.average_monthly_expense, symbol) }</span>
                                <span class="text-[10px] font-bold uppercase tracking-tighter opacity-60">{"promedio/mes"}</span>
                                <span class="ml-auto text-red-500">{ icon_trending_down() }</span>
                            </div>
                        </div>
                        <div class="flex flex-col gap-1 p-8 rounded-3xl bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark">
                            <h3 class="text-xs font-black uppercase tracking-widest opacity-60">{"Patrimonio Neto"}</h3>
                            <div class="flex items-baseline gap-2">
                                <span class={if net.is_sign_negative() && !net.is_zero() { "text-3xl font-black text-red-500" } else { "text-3xl font-black" }}>
                                    { format_amount(net, symbol) }
                                </span>
                                <span class="text-[10px] font-bold uppercase tracking-tighter opacity-60">{"total del período"}</span>
                                <span class="ml-auto text-primary">{ icon_trending_up() }</span>
                            </div>
                        </div>
                    </div>

                    <div class="p-8 rounded-3xl bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark">
                        <h3 class="text-lg font-black mb-1">{"Evolución Mensual"}</h3>
                        <p class="text-xs font-bold uppercase tracking-widest mb-6 opacity-60">{"Ingresos, gastos y patrimonio acumulado"}</p>
                        <MonthlyChart points={series} currency_symbol={symbol} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <Distribution
                            title="Distribución de Gastos"
                            subtitle="Desglose por categoría"
                            empty="Registra gastos para ver el desglose."
                            total={format_thousands(trend.totals.expense, symbol)}
                            shares={trend.expense_by_category.clone()} />
                        <Distribution
                            title="Fuentes de Ingresos"
                            subtitle="Diversificación de entradas"
                            empty="Registra ingresos para ver el desglose."
                            total={format_thousands(trend.totals.income, symbol)}
                            shares={trend.income_by_category.clone()} />
                    </div>

                    <div class="w-full bg-gradient-to-r from-primary/10 to-transparent p-8 rounded-3xl flex flex-col md:flex-row items-center gap-6 border border-primary/10">
                        <div class="bg-primary rounded-2xl p-3 text-black shrink-0">{ icon_sparkles() }</div>
                        <div class="flex flex-col gap-1">
                            <h4 class="text-lg font-black">{"Insight Proactivo"}</h4>
                            <p class="text-sm font-medium opacity-80 max-w-2xl leading-relaxed">
                                { stats::insight(net, &format_amount(net, symbol)) }
                            </p>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

/// `(offset, width)` of each slice on the 100-unit ring. Percentages are
/// rounded one by one, so widths are clipped to whatever is left of the ring.
fn slice_spans(shares: &[CategoryShare]) -> Vec<(u32, u32)> {
    let mut offset = 0u32;
    shares
        .iter()
        .map(|share| {
            let width = share.percent.min(100 - offset);
            let span = (offset, width);
            offset += width;
            span
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct DistributionProps {
    title: &'static str,
    subtitle: &'static str,
    empty: &'static str,
    total: String,
    shares: Vec<CategoryShare>,
}

/// Donut of category shares drawn with dashed circle strokes on a 100-unit
/// path, one circle per slice.
#[function_component(Distribution)]
fn distribution(props: &DistributionProps) -> Html {
    let slices: Vec<Html> = slice_spans(&props.shares)
        .into_iter()
        .enumerate()
        .map(|(i, (offset, width))| {
            let color = SLICE_COLORS[i % SLICE_COLORS.len()];
            html! {
                <circle cx="16" cy="16" r="12" fill="transparent" stroke={color} stroke-width="8"
                    pathLength="100"
                    stroke-dasharray={format!("{} {}", width, 100 - width)}
                    stroke-dashoffset={format!("-{}", offset)} />
            }
        })
        .collect();

    html! {
        <div class="flex flex-col p-8 rounded-3xl bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark min-h-[320px]">
            <h3 class="text-lg font-black mb-1">{ props.title }</h3>
            <p class="text-xs font-bold uppercase tracking-widest mb-8 opacity-60">{ props.subtitle }</p>
            <div class="flex flex-1 items-center gap-10">
                <div class="relative size-40 shrink-0">
                    <svg class="-rotate-90" viewBox="0 0 32 32">
                        <circle cx="16" cy="16" r="12" fill="transparent" stroke="#e2e8f0" stroke-width="8" />
                        { for slices }
                    </svg>
                    <div class="absolute inset-0 flex flex-col items-center justify-center">
                        <span class="text-[10px] font-black opacity-40 uppercase">{"Total"}</span>
                        <span class="text-xl font-black">{ &props.total }</span>
                    </div>
                </div>
                <div class="flex flex-col gap-3 flex-1">
                    {
                        if props.shares.is_empty() {
                            html! { <p class="text-xs opacity-50 italic">{ props.empty }</p> }
                        } else {
                            html! {
                                { for props.shares.iter().enumerate().map(|(i, share)| html! {
                                    <div key={share.category.clone()} class="flex justify-between items-center text-sm">
                                        <div class="flex items-center gap-2">
                                            <span class="size-3 rounded-full" style={format!("background: {}", SLICE_COLORS[i % SLICE_COLORS.len()])}></span>
                                            <span class="font-bold opacity-80">{ &share.category }</span>
                                        </div>
                                        <span class="font-black">{ format!("{}%", share.percent) }</span>
                                    </div>
                                }) }
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn share(category: &str, percent: u32) -> CategoryShare {
        CategoryShare {
            category: category.to_string(),
            amount: dec!(1),
            percent,
        }
    }

    #[test]
    fn slices_follow_each_other_around_the_ring() {
        let spans = slice_spans(&[share("Vivienda", 50), share("Ocio", 30), share("Otros", 20)]);
        assert_eq!(spans, vec![(0, 50), (50, 30), (80, 20)]);
    }

    #[test]
    fn rounding_overflow_is_clipped_to_the_ring() {
        // 33.5% three times rounds to 34 each
        let spans = slice_spans(&[share("A", 34), share("B", 34), share("C", 34)]);
        assert_eq!(spans, vec![(0, 34), (34, 34), (68, 32)]);
        assert_eq!(spans.iter().map(|(_, w)| w).sum::<u32>(), 100);
    }
}
