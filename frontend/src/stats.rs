//! Aggregates over the transaction list.
//!
//! Everything here is a single pass over an in-memory slice and is recomputed
//! on each render. Empty input always yields zeros.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Goal, Transaction, TransactionKind};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut out = Totals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => out.income += tx.amount,
            TransactionKind::Expense => out.expense += tx.amount,
        }
    }
    out.net = out.income - out.expense;
    out
}

/// `round(part / whole * 100)`, or 0 when `whole` is not positive.
pub fn share_percent(part: Decimal, whole: Decimal) -> u32 {
    if whole <= Decimal::ZERO {
        return 0;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub percent: u32,
}

/// Per-category sums for one kind, in order of first appearance.
pub fn by_category(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut total = Decimal::ZERO;

    for tx in transactions.iter().filter(|t| t.kind == kind) {
        total += tx.amount;
        match shares.iter_mut().find(|s| s.category == tx.category) {
            Some(share) => share.amount += tx.amount,
            None => shares.push(CategoryShare {
                category: tx.category.clone(),
                amount: tx.amount,
                percent: 0,
            }),
        }
    }

    for share in shares.iter_mut() {
        share.percent = share_percent(share.amount, total);
    }
    shares
}

/// Distinct calendar months present in the list, never less than one.
pub fn distinct_months(transactions: &[Transaction]) -> usize {
    let months = transactions
        .iter()
        .map(|t| (t.date.year(), t.date.month()))
        .collect::<std::collections::BTreeSet<_>>();
    months.len().max(1)
}

pub fn average_monthly_expense(transactions: &[Transaction]) -> Decimal {
    let expense = totals(transactions).expense;
    expense / Decimal::from(distinct_months(transactions))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendStats {
    pub totals: Totals,
    pub average_monthly_expense: Decimal,
    pub expense_by_category: Vec<CategoryShare>,
    pub income_by_category: Vec<CategoryShare>,
}

impl TrendStats {
    pub fn compute(transactions: &[Transaction]) -> Self {
        Self {
            totals: totals(transactions),
            average_monthly_expense: average_monthly_expense(transactions),
            expense_by_category: by_category(transactions, TransactionKind::Expense),
            income_by_category: by_category(transactions, TransactionKind::Income),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthPoint {
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub cumulative_net: Decimal,
}

impl MonthPoint {
    pub fn label(&self) -> String {
        const NAMES: [&str; 12] = [
            "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
        ];
        let name = NAMES.get(self.month as usize - 1).copied().unwrap_or("?");
        format!("{} {:02}", name, self.year % 100)
    }
}

/// Income and expense per month in chronological order, with the running net.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthPoint> {
    let mut buckets: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let entry = buckets
            .entry((tx.date.year(), tx.date.month()))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TransactionKind::Income => entry.0 += tx.amount,
            TransactionKind::Expense => entry.1 += tx.amount,
        }
    }

    let mut running = Decimal::ZERO;
    buckets
        .into_iter()
        .map(|((year, month), (income, expense))| {
            running += income - expense;
            MonthPoint {
                year,
                month,
                income,
                expense,
                cumulative_net: running,
            }
        })
        .collect()
}

/// Newest first. Equal dates keep their insertion order reversed, so the
/// latest entry of a day shows on top.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.reverse();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    ThisYear,
    Last30Days,
    ThisQuarter,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::ThisYear, Period::Last30Days, Period::ThisQuarter];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThisYear => "Este Año",
            Self::Last30Days => "Últimos 30 días",
            Self::ThisQuarter => "Este Trimestre",
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::ThisYear => date.year() == today.year() && date <= today,
            Self::Last30Days => date > today - Duration::days(30) && date <= today,
            Self::ThisQuarter => {
                date.year() == today.year()
                    && (date.month0() / 3) == (today.month0() / 3)
                    && date <= today
            }
        }
    }

    pub fn filter(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date, today))
            .cloned()
            .collect()
    }
}

pub fn goal_progress(goal: &Goal) -> u32 {
    share_percent(goal.current, goal.target).min(100)
}

/// Width of the progress bar; never fully empty so the bar stays visible.
pub fn goal_bar_width(goal: &Goal) -> u32 {
    goal_progress(goal).max(5)
}

pub fn goal_remaining(goal: &Goal) -> Decimal {
    (goal.target - goal.current).max(Decimal::ZERO)
}

pub fn goal_is_complete(goal: &Goal) -> bool {
    goal.current >= goal.target
}

pub fn insight(net: Decimal, formatted_net: &str) -> String {
    if net > Decimal::ZERO {
        format!(
            "¡Buen trabajo! Estás manteniendo un patrimonio neto positivo de {}. Tu salud financiera es robusta comparada con el promedio.",
            formatted_net
        )
    } else {
        "Alerta: Tu patrimonio neto actual es negativo. Te recomendamos revisar tus gastos de este mes y priorizar el ahorro.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use rust_decimal_macros::dec;

    fn tx(kind: TransactionKind, amount: Decimal, category: &str, date: (i32, u32, u32)) -> Transaction {
        Transaction {
            id: format!("{}-{}", category, amount),
            kind,
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: category.to_string(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(TransactionKind::Income, dec!(1000), "Sueldo", (2024, 1, 5)),
            tx(TransactionKind::Expense, dec!(300), "Vivienda", (2024, 1, 10)),
            tx(TransactionKind::Expense, dec!(100), "Ocio", (2024, 2, 3)),
            tx(TransactionKind::Expense, dec!(200), "Vivienda", (2024, 2, 20)),
            tx(TransactionKind::Income, dec!(250), "Freelance", (2024, 2, 21)),
        ]
    }

    #[test]
    fn totals_split_by_kind() {
        let t = totals(&sample());
        assert_eq!(t.income, dec!(1250));
        assert_eq!(t.expense, dec!(600));
        assert_eq!(t.net, dec!(650));
    }

    #[test]
    fn empty_list_is_all_zero() {
        let stats = TrendStats::compute(&[]);
        assert_eq!(stats.totals, Totals::default());
        assert_eq!(stats.average_monthly_expense, Decimal::ZERO);
        assert!(stats.expense_by_category.is_empty());
        assert!(monthly_series(&[]).is_empty());
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let shares = by_category(&sample(), TransactionKind::Expense);
        let names: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Vivienda", "Ocio"]);
        assert_eq!(shares[0].amount, dec!(500));
        assert_eq!(shares[0].percent, 83);
        assert_eq!(shares[1].percent, 17);
    }

    #[test]
    fn share_guards_against_zero_total() {
        assert_eq!(share_percent(dec!(10), Decimal::ZERO), 0);
        assert_eq!(share_percent(dec!(1), dec!(8)), 13);
    }

    #[test]
    fn monthly_average_counts_year_and_month() {
        let mut txs = sample();
        // same month number, different year: a separate month
        txs.push(tx(TransactionKind::Expense, dec!(300), "Salud", (2023, 1, 15)));
        assert_eq!(distinct_months(&txs), 3);
        assert_eq!(average_monthly_expense(&txs), dec!(300));
    }

    #[test]
    fn series_is_chronological_with_running_net() {
        let series = monthly_series(&sample());
        assert_eq!(series.len(), 2);
        assert_eq!((series[0].year, series[0].month), (2024, 1));
        assert_eq!(series[0].cumulative_net, dec!(700));
        assert_eq!(series[1].expense, dec!(300));
        assert_eq!(series[1].cumulative_net, dec!(650));
        assert_eq!(series[1].label(), "Feb 24");
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let latest = recent(&sample(), 2);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].category, "Freelance");
        assert_eq!(latest[1].category, "Vivienda");
    }

    #[test]
    fn recent_puts_later_entries_of_a_day_first() {
        let txs = vec![
            tx(TransactionKind::Expense, dec!(1), "Primero", (2024, 3, 1)),
            tx(TransactionKind::Expense, dec!(2), "Segundo", (2024, 3, 1)),
        ];
        assert_eq!(recent(&txs, 10)[0].category, "Segundo");
    }

    #[test]
    fn periods_filter_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let d = |y, m, dd| NaiveDate::from_ymd_opt(y, m, dd).unwrap();

        assert!(Period::ThisYear.contains(d(2024, 1, 1), today));
        assert!(!Period::ThisYear.contains(d(2023, 12, 31), today));
        assert!(Period::Last30Days.contains(d(2024, 4, 16), today));
        assert!(!Period::Last30Days.contains(d(2024, 4, 15), today));
        assert!(Period::ThisQuarter.contains(d(2024, 4, 1), today));
        assert!(!Period::ThisQuarter.contains(d(2024, 3, 31), today));
        assert!(!Period::ThisQuarter.contains(d(2024, 5, 16), today));

        let kept = Period::ThisYear.filter(&sample(), today);
        assert_eq!(kept.len(), 5);
    }

    fn goal(target: Decimal, current: Decimal) -> Goal {
        Goal {
            id: "g".into(),
            title: "Laptop".into(),
            description: String::new(),
            target,
            current,
            priority: Priority::Low,
            category: "Ahorro".into(),
        }
    }

    #[test]
    fn goal_progress_is_capped_and_guarded() {
        assert_eq!(goal_progress(&goal(dec!(200), dec!(50))), 25);
        assert_eq!(goal_progress(&goal(dec!(200), dec!(500))), 100);
        assert_eq!(goal_progress(&goal(Decimal::ZERO, dec!(5))), 0);
        assert_eq!(goal_bar_width(&goal(dec!(200), Decimal::ZERO)), 5);
    }

    #[test]
    fn goal_remaining_and_completion() {
        assert_eq!(goal_remaining(&goal(dec!(200), dec!(50))), dec!(150));
        assert_eq!(goal_remaining(&goal(dec!(200), dec!(250))), Decimal::ZERO);
        assert!(goal_is_complete(&goal(dec!(200), dec!(200))));
        assert!(!goal_is_complete(&goal(dec!(200), dec!(199))));
    }

    #[test]
    fn insight_depends_on_sign() {
        assert!(insight(dec!(10), "$10").contains("$10"));
        assert!(insight(Decimal::ZERO, "$0").starts_with("Alerta"));
    }
}
