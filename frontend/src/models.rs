use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Vivienda",
    "Alimentación",
    "Transporte",
    "Ocio",
    "Salud",
    "Otros",
];
pub const INCOME_CATEGORIES: [&str; 4] = ["Sueldo", "Freelance", "Inversiones", "Otros"];
pub const GOAL_CATEGORIES: [&str; 5] = ["Ahorro", "Emergencia", "Viaje", "Educación", "Vivienda"];

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Today's date in the browser's time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Ingreso",
            Self::Expense => "Gasto",
        }
    }

    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Income => &INCOME_CATEGORIES,
            Self::Expense => &EXPENSE_CATEGORIES,
        }
    }

    pub fn default_category(&self) -> &'static str {
        self.categories()[0]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    #[serde(with = "stored_date")]
    pub date: NaiveDate,
    pub description: String,
}

impl Transaction {
    /// Amount with the sign of its kind: expenses count negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current: Decimal,
    pub priority: Priority,
    pub category: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Currency {
    #[serde(rename = "ARS")]
    Ars,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Ars, Currency::Usd, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ars => "ARS",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ars | Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ars => "Pesos Argentinos",
            Self::Usd => "Dólares (USD)",
            Self::Eur => "Euros (EUR)",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            _ => Self::Ars,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Claro",
            Self::Dark => "Oscuro",
            Self::System => "Sistema",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub currency: Currency,
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: Currency::Ars,
            theme: Theme::System,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Set on replies the app wrote itself after a failed request.
    #[serde(default)]
    pub failed: bool,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
            failed: false,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            failed: true,
            ..Self::new(Role::Model, text)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Danger,
    Warning,
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub icon: String,
    pub title: String,
    pub msg: String,
    pub time: String,
    pub read: bool,
}

/// Parses a stored date. Older data holds full ISO timestamps, so only the
/// leading `YYYY-MM-DD` is read.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

mod stored_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_stored_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date `{}`", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn transaction_reads_legacy_timestamp_dates() {
        let raw = r#"{"id":"k3j2","type":"expense","amount":1500.5,"category":"Ocio","date":"2024-03-09T15:00:00.000Z","description":"Cine"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, dec!(1500.5));
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn transaction_writes_plain_dates_and_numbers() {
        let tx = Transaction {
            id: "a".into(),
            kind: TransactionKind::Income,
            amount: dec!(250),
            category: "Sueldo".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            description: "Pago".into(),
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["date"], "2024-01-31");
        assert_eq!(value["amount"].as_f64(), Some(250.0));
    }

    #[test]
    fn garbage_date_is_rejected() {
        let raw = r#"{"id":"x","type":"income","amount":1,"category":"Otros","date":"ayer","description":"?"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn signed_amount_follows_kind() {
        let mut tx = Transaction {
            id: "a".into(),
            kind: TransactionKind::Expense,
            amount: dec!(40),
            category: "Salud".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: "Farmacia".into(),
        };
        assert_eq!(tx.signed_amount(), dec!(-40));
        tx.kind = TransactionKind::Income;
        assert_eq!(tx.signed_amount(), dec!(40));
    }

    #[test]
    fn settings_keep_their_stored_wire_names() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"currency":"EUR","theme":"dark"}"#).unwrap();
        assert_eq!(settings.currency, Currency::Eur);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(
            serde_json::to_string(&UserSettings::default()).unwrap(),
            r#"{"currency":"ARS","theme":"system"}"#
        );
    }

    #[test]
    fn currency_symbols_and_fallback() {
        assert_eq!(Currency::Ars.symbol(), "$");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::from_code("GBP"), Currency::Ars);

        let stored: UserSettings =
            serde_json::from_str(r#"{"currency":"GBP","theme":"light"}"#).unwrap();
        assert_eq!(stored.currency, Currency::Ars);
    }

    #[test]
    fn goal_priority_round_trips_by_name() {
        let raw = r#"{"id":"g","title":"Laptop","description":"","target":1200,"current":0,"priority":"High","category":"Ahorro"}"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.priority, Priority::High);
        assert_eq!(goal.priority.label(), "Alta");
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
