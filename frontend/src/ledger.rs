use std::collections::BTreeSet;
use std::rc::Rc;

use rust_decimal::Decimal;
use yew::Reducible;

use crate::models::{Goal, Notification, NotificationKind, Transaction, UserSettings};
use crate::stats;

pub enum LedgerAction {
    AddTransaction(Transaction),
    DeleteTransaction(String),
    AddGoal(Goal),
    DeleteGoal(String),
    Contribute { goal_id: String, amount: Decimal },
    SetSettings(UserSettings),
    DismissNotification(String),
    ClearData,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    pub settings: UserSettings,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    dismissed: BTreeSet<String>,
}

impl Ledger {
    pub fn new(settings: UserSettings, transactions: Vec<Transaction>, goals: Vec<Goal>) -> Self {
        Self {
            settings,
            transactions,
            goals,
            dismissed: BTreeSet::new(),
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.settings.currency.symbol()
    }

    /// Seeded alerts followed by those derived from the current data, minus
    /// anything dismissed this session.
    pub fn notifications(&self) -> Vec<Notification> {
        seeded_notifications()
            .into_iter()
            .chain(derived_notifications(&self.transactions, &self.goals))
            .filter(|n| !self.dismissed.contains(&n.id))
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications().iter().filter(|n| !n.read).count()
    }
}

impl Reducible for Ledger {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LedgerAction::AddTransaction(tx) => {
                log::debug!("adding {:?} of {} in {}", tx.kind, tx.amount, tx.category);
                next.transactions.push(tx);
            }
            LedgerAction::DeleteTransaction(id) => next.transactions.retain(|t| t.id != id),
            LedgerAction::AddGoal(goal) => next.goals.push(goal),
            LedgerAction::DeleteGoal(id) => next.goals.retain(|g| g.id != id),
            LedgerAction::Contribute { goal_id, amount } => {
                match next.goals.iter_mut().find(|g| g.id == goal_id) {
                    Some(goal) if amount > Decimal::ZERO => goal.current += amount,
                    Some(_) => log::warn!("ignoring non-positive contribution {}", amount),
                    None => log::warn!("contribution for unknown goal {}", goal_id),
                }
            }
            LedgerAction::SetSettings(settings) => next.settings = settings,
            LedgerAction::DismissNotification(id) => {
                next.dismissed.insert(id);
            }
            LedgerAction::ClearData => {
                next.transactions.clear();
                next.goals.clear();
            }
        }
        Rc::new(next)
    }
}

fn notification(
    id: &str,
    kind: NotificationKind,
    icon: &str,
    title: &str,
    msg: &str,
    time: &str,
) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        icon: icon.to_string(),
        title: title.to_string(),
        msg: msg.to_string(),
        time: time.to_string(),
        read: false,
    }
}

pub fn seeded_notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            NotificationKind::Danger,
            "error",
            "Gasto Inusual Detectado",
            "Se ha registrado un cargo de $125.000,00 en un comercio no habitual.",
            "Hace 10 min",
        ),
        notification(
            "2",
            NotificationKind::Warning,
            "warning",
            "Factura Próxima",
            "Tu recibo de electricidad vence en 3 días. Asegúrate de tener saldo suficiente.",
            "Hace 2 horas",
        ),
        notification(
            "3",
            NotificationKind::Info,
            "info",
            "Meta Alcanzada 75%",
            "¡Estás muy cerca de completar tu Fondo de Emergencia! Sigue así.",
            "Ayer",
        ),
        notification(
            "4",
            NotificationKind::Success,
            "check_circle",
            "Ingreso Programado",
            "Se ha recibido la transferencia de nómina con éxito.",
            "Ayer",
        ),
    ]
}

pub fn derived_notifications(transactions: &[Transaction], goals: &[Goal]) -> Vec<Notification> {
    let mut out = Vec::new();

    let totals = stats::totals(transactions);
    if totals.net < Decimal::ZERO {
        out.push(notification(
            "net-negative",
            NotificationKind::Danger,
            "trending_down",
            "Patrimonio Neto Negativo",
            "Tus gastos superan a tus ingresos registrados. Revisá tu presupuesto.",
            "Ahora",
        ));
    }

    for goal in goals.iter().filter(|g| stats::goal_is_complete(g)) {
        out.push(notification(
            &format!("goal-done-{}", goal.id),
            NotificationKind::Success,
            "emoji_events",
            "¡Meta Completada!",
            &format!("Alcanzaste tu meta \"{}\".", goal.title),
            "Ahora",
        ));
    }

    out
}
