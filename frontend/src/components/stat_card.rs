use rust_decimal::Decimal;
use yew::prelude::*;

use super::icons::*;
use crate::money::format_amount;

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Bank,
    TrendingUp,
    TrendingDown,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub caption: &'static str,
    pub amount: Decimal,
    pub icon: StatIcon,
    pub currency_symbol: &'static str,
    #[prop_or_default]
    pub negative: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Shows the absolute amount; `negative` only switches the colour.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (badge, value_class) = if props.negative {
        ("p-3 rounded-2xl bg-red-500/10 text-red-500", "text-4xl font-black tracking-tighter text-red-500")
    } else {
        ("p-3 rounded-2xl bg-primary/10 text-primary", "text-4xl font-black tracking-tighter")
    };
    let onclick = props.onclick.clone();

    html! {
        <div {onclick} class="cursor-pointer flex flex-col gap-6 rounded-[2rem] p-8 bg-card-light dark:bg-card-dark border border-border-light dark:border-border-dark shadow-sm hover:border-primary/40 transition-all">
            <div class="flex items-center gap-4">
                <div class={badge}>
                    {
                        match props.icon {
                            StatIcon::Bank => icon_bank(),
                            StatIcon::TrendingUp => icon_trending_up(),
                            StatIcon::TrendingDown => icon_trending_down(),
                        }
                    }
                </div>
                <div class="flex flex-col">
                    <p class="opacity-70 text-xs font-black uppercase tracking-[0.25em]">{ props.title }</p>
                    <p class="text-[10px] font-bold opacity-40 uppercase tracking-widest">{ props.caption }</p>
                </div>
            </div>
            <p class={value_class}>{ format_amount(props.amount.abs(), props.currency_symbol) }</p>
        </div>
    }
}
