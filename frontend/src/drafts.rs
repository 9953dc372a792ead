use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{new_id, Goal, Priority, Transaction, TransactionKind};

#[derive(Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("La descripción es obligatoria.")]
    MissingDescription,
    #[error("El título es obligatorio.")]
    MissingTitle,
    #[error("Ingresá un monto válido.")]
    InvalidAmount,
    #[error("El monto debe ser mayor a cero.")]
    NonPositiveAmount,
    #[error("La fecha no es válida.")]
    InvalidDate,
}

/// `1.500` or `12.345.678`: dots that can only be thousands separators.
fn is_grouped(digits: &str) -> bool {
    let mut groups = digits.split('.');
    let head_ok = groups
        .next()
        .map_or(false, |g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    let rest: Vec<&str> = groups.collect();
    head_ok
        && !rest.is_empty()
        && rest
            .iter()
            .all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Parses user-entered money in es-AR notation. `1.500` and `1.500,50` group
/// thousands with dots; `1500,50` and `1500.50` are plain decimals.
pub fn parse_amount(raw: &str) -> Result<Decimal, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftError::InvalidAmount);
    }

    let normalized = match trimmed.split_once(',') {
        Some((whole, cents)) => {
            if whole.contains('.') && !is_grouped(whole) {
                return Err(DraftError::InvalidAmount);
            }
            format!("{}.{}", whole.replace('.', ""), cents)
        }
        None if is_grouped(trimmed) => trimmed.replace('.', ""),
        None => trimmed.to_string(),
    };

    let amount = normalized
        .parse::<Decimal>()
        .map_err(|_| DraftError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(DraftError::NonPositiveAmount);
    }
    Ok(amount)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub kind: TransactionKind,
    pub date: String,
}

impl TransactionDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: TransactionKind::Expense.default_category().to_string(),
            kind: TransactionKind::Expense,
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Switches kind and moves the category onto the new kind's list.
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        if !kind.categories().contains(&self.category.as_str()) {
            self.category = kind.default_category().to_string();
        }
        self.kind = kind;
        self
    }

    pub fn validate(&self, today: NaiveDate) -> Result<Transaction, DraftError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let amount = parse_amount(&self.amount)?;
        let date = match self.date.trim() {
            "" => today,
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DraftError::InvalidDate)?,
        };
        let category = match self.category.trim() {
            "" => self.kind.default_category().to_string(),
            c => c.to_string(),
        };

        Ok(Transaction {
            id: new_id(),
            kind: self.kind,
            amount,
            category,
            date,
            description: description.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalDraft {
    pub title: String,
    pub target: String,
    pub category: String,
    pub priority: Priority,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            target: String::new(),
            category: "Ahorro".to_string(),
            priority: Priority::Medium,
        }
    }
}

impl GoalDraft {
    pub fn validate(&self) -> Result<Goal, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let target = parse_amount(&self.target)?;

        Ok(Goal {
            id: new_id(),
            title: title.to_string(),
            description: String::new(),
            target,
            current: Decimal::ZERO,
            priority: self.priority,
            category: self.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled() -> TransactionDraft {
        TransactionDraft {
            description: "  Supermercado ".into(),
            amount: "1500,75".into(),
            ..TransactionDraft::new(today())
        }
    }

    #[test]
    fn new_draft_defaults_to_expense_housing_today() {
        let draft = TransactionDraft::new(today());
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.category, "Vivienda");
        assert_eq!(draft.date, "2024-06-15");
    }

    #[test]
    fn valid_draft_becomes_a_transaction() {
        let tx = filled().validate(today()).unwrap();
        assert_eq!(tx.description, "Supermercado");
        assert_eq!(tx.amount, dec!(1500.75));
        assert_eq!(tx.category, "Vivienda");
        assert_eq!(tx.date, today());
        assert!(!tx.id.is_empty());
    }

    #[test]
    fn blank_description_is_rejected() {
        let draft = TransactionDraft {
            description: "   ".into(),
            ..filled()
        };
        assert_eq!(draft.validate(today()), Err(DraftError::MissingDescription));
    }

    #[test]
    fn amounts_must_be_positive_numbers() {
        assert_eq!(parse_amount(""), Err(DraftError::InvalidAmount));
        assert_eq!(parse_amount("doce"), Err(DraftError::InvalidAmount));
        assert_eq!(parse_amount("0"), Err(DraftError::NonPositiveAmount));
        assert_eq!(parse_amount("-3"), Err(DraftError::NonPositiveAmount));
        assert_eq!(parse_amount("12.5"), Ok(dec!(12.5)));
        assert_eq!(parse_amount("1500,50"), Ok(dec!(1500.50)));
    }

    #[test]
    fn dots_before_three_digit_groups_are_thousands() {
        assert_eq!(parse_amount("1.500"), Ok(dec!(1500)));
        assert_eq!(parse_amount("12.345.678"), Ok(dec!(12345678)));
        assert_eq!(parse_amount("1.500,50"), Ok(dec!(1500.50)));
        assert_eq!(parse_amount(" 250.000,5 "), Ok(dec!(250000.5)));
        assert_eq!(parse_amount("1500.50"), Ok(dec!(1500.50)));
        assert_eq!(parse_amount("1.50"), Ok(dec!(1.50)));
    }

    #[test]
    fn misplaced_grouping_is_rejected() {
        assert_eq!(parse_amount("1.50,25"), Err(DraftError::InvalidAmount));
        assert_eq!(parse_amount("1,500,25"), Err(DraftError::InvalidAmount));
    }

    #[test]
    fn empty_date_means_today_and_bad_date_fails() {
        let mut draft = filled();
        draft.date = String::new();
        assert_eq!(draft.validate(today()).unwrap().date, today());

        draft.date = "15/06/2024".into();
        assert_eq!(draft.validate(today()), Err(DraftError::InvalidDate));
    }

    #[test]
    fn switching_kind_resets_foreign_category() {
        let draft = filled().with_kind(TransactionKind::Income);
        assert_eq!(draft.category, "Sueldo");

        let mut shared = filled();
        shared.category = "Otros".into();
        assert_eq!(shared.with_kind(TransactionKind::Income).category, "Otros");
    }

    #[test]
    fn goal_draft_starts_with_nothing_saved() {
        let draft = GoalDraft {
            title: "Fondo de Emergencia".into(),
            target: "50000".into(),
            ..GoalDraft::default()
        };
        let goal = draft.validate().unwrap();
        assert_eq!(goal.current, Decimal::ZERO);
        assert_eq!(goal.target, dec!(50000));
        assert_eq!(goal.priority, Priority::Medium);
        assert_eq!(goal.category, "Ahorro");
    }

    #[test]
    fn goal_without_title_is_rejected() {
        let draft = GoalDraft {
            target: "10".into(),
            ..GoalDraft::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingTitle));
    }
}
