//! Global Application State
//!
//! Domain entities from the REST API and the reactive state shared across
//! pages via Leptos context. All in-memory state is rebuilt from scratch on
//! page load; the browser tab is the sole owner.

use leptos::*;

use crate::api::auth::{storage_get, storage_remove, storage_set};
use crate::state::i18n::Lang;

const USER_KEY: &str = "ml_user";
const USER_ID_KEY: &str = "ml_user_id";
const PENDING_EMAIL_KEY: &str = "ml_pending_email";
const PENDING_PASSWORD_KEY: &str = "ml_pending_password";
const RESET_EMAIL_KEY: &str = "ml_reset_email";

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Authenticated user profile, when loaded
    pub profile: RwSignal<Option<Profile>>,
    /// Aggregated account balances for the current session
    pub summary: RwSignal<AccountSummary>,
    /// Navigation language from the `?lang=` query parameter
    pub lang: RwSignal<Lang>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        profile: create_rw_signal(cached_profile()),
        summary: create_rw_signal(AccountSummary::default()),
        lang: create_rw_signal(Lang::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Display name for the signed-in user, with the profile fallback chain.
    pub fn display_name(&self) -> String {
        self.profile
            .get()
            .map(|p| p.display_name())
            .unwrap_or_else(|| "Trader".to_string())
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

// ============ User profile ============

/// Read-only profile from `/api/auth/me`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub id: Option<i64>,
}

impl Profile {
    /// Priority fallback: username, full name, email local part, "Trader".
    pub fn display_name(&self) -> String {
        if let Some(username) = nonempty(self.username.as_deref()) {
            return username.to_string();
        }
        if let Some(full_name) = nonempty(self.full_name.as_deref()) {
            return full_name.to_string();
        }
        if let Some(local) = nonempty(self.email.split('@').next()) {
            return local.to_string();
        }
        "Trader".to_string()
    }
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Cache the profile so the navbar can greet before `/api/auth/me` resolves.
pub fn cache_profile(profile: &Profile) {
    if let Ok(json) = serde_json::to_string(profile) {
        storage_set(USER_KEY, &json);
    }
    if let Some(id) = profile.id {
        storage_set(USER_ID_KEY, &id.to_string());
    }
}

pub fn cached_profile() -> Option<Profile> {
    storage_get(USER_KEY).and_then(|json| serde_json::from_str(&json).ok())
}

// ============ Signup/reset handoff ============

/// Persist the credentials the verify-email step needs to finish login.
pub fn set_pending_signup(email: &str, password: &str) {
    storage_set(PENDING_EMAIL_KEY, email);
    storage_set(PENDING_PASSWORD_KEY, password);
}

pub fn pending_email() -> Option<String> {
    storage_get(PENDING_EMAIL_KEY).filter(|e| !e.is_empty())
}

pub fn pending_password() -> Option<String> {
    storage_get(PENDING_PASSWORD_KEY).filter(|p| !p.is_empty())
}

/// The password is held only between signup and verification.
pub fn clear_pending_password() {
    storage_remove(PENDING_PASSWORD_KEY);
}

pub fn clear_pending_signup() {
    storage_remove(PENDING_EMAIL_KEY);
    storage_remove(PENDING_PASSWORD_KEY);
}

pub fn set_reset_email(email: &str) {
    storage_set(RESET_EMAIL_KEY, email);
}

// ============ Accounts ============

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Live,
    Demo,
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Live => "LIVE",
            AccountKind::Demo => "DEMO",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AccountKind::Live => "live",
            AccountKind::Demo => "demo",
        }
    }
}

/// A broker account. Sourced entirely from the backend; the client only
/// aggregates balances and renders.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Account {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(default = "default_broker")]
    pub broker: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_broker() -> String {
    "Deriv".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Account {
    /// Zero-balance card shown when no real account data exists, so the
    /// accounts view is never empty.
    pub fn placeholder(kind: AccountKind) -> Self {
        Self {
            id: match kind {
                AccountKind::Live => "live-default".to_string(),
                AccountKind::Demo => "demo-default".to_string(),
            },
            kind,
            broker: default_broker(),
            balance: 0.0,
            currency: default_currency(),
        }
    }
}

/// Pre-aggregated balances from `/api/accounts/summary`
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct AccountSummary {
    #[serde(default)]
    pub live_balance: f64,
    #[serde(default)]
    pub demo_balance: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub accounts: Option<Vec<Account>>,
}

impl AccountSummary {
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or("USD")
    }

    pub fn total(&self) -> f64 {
        self.live_balance + self.demo_balance
    }

    /// Cards to render, split by kind. Each side always gets at least one
    /// card: a zero-balance placeholder stands in when the backend returned
    /// nothing for that category.
    pub fn cards(&self) -> (Vec<Account>, Vec<Account>) {
        let mut live = Vec::new();
        let mut demo = Vec::new();

        if let Some(accounts) = &self.accounts {
            for account in accounts {
                match account.kind {
                    AccountKind::Live => live.push(account.clone()),
                    AccountKind::Demo => demo.push(account.clone()),
                }
            }
        }

        if live.is_empty() {
            live.push(Account::placeholder(AccountKind::Live));
        }
        if demo.is_empty() {
            demo.push(Account::placeholder(AccountKind::Demo));
        }

        (live, demo)
    }
}

// ============ Performance ============

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
pub struct PerformanceOverview {
    #[serde(default)]
    pub days_traded: u32,
    #[serde(default)]
    pub total_trades: u32,
    #[serde(default)]
    pub total_lots: f64,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub loss_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub side: TradeSide,
    pub lot_size: f64,
    pub entry_price: f64,
    pub exit_price: f64,
    pub pnl: f64,
}

// ============ Plans ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Plan {
    pub code: String,
    pub name: String,
    pub price_usd: f64,
}

impl Plan {
    /// Annual price is ten monthly payments ("2 months free"), to the cent.
    pub fn annual_price_usd(&self) -> f64 {
        (self.price_usd * 10.0 * 100.0).round() / 100.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn price_for(&self, plan: &Plan) -> f64 {
        match self {
            BillingCycle::Monthly => plan.price_usd,
            BillingCycle::Annual => plan.annual_price_usd(),
        }
    }

    pub fn per_label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Annual => "/year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: Option<&str>, full_name: Option<&str>, email: &str) -> Profile {
        Profile {
            username: username.map(String::from),
            full_name: full_name.map(String::from),
            email: email.to_string(),
            id: None,
        }
    }

    #[test]
    fn test_display_name_fallback_chain() {
        assert_eq!(
            profile(Some("llama42"), Some("Ada L."), "ada@gmail.com").display_name(),
            "llama42"
        );
        assert_eq!(
            profile(None, Some("Ada Lovelace"), "ada@gmail.com").display_name(),
            "Ada Lovelace"
        );
        assert_eq!(profile(None, None, "ada@gmail.com").display_name(), "ada");
        assert_eq!(profile(Some("  "), None, "@gmail.com").display_name(), "Trader");
        assert_eq!(profile(None, None, "").display_name(), "Trader");
    }

    #[test]
    fn test_empty_summary_yields_one_placeholder_per_kind() {
        let summary = AccountSummary {
            accounts: Some(Vec::new()),
            ..Default::default()
        };

        let (live, demo) = summary.cards();
        assert_eq!(live.len(), 1);
        assert_eq!(demo.len(), 1);
        assert_eq!(live[0].balance, 0.0);
        assert_eq!(live[0].broker, "Deriv");
        assert_eq!(live[0].currency, "USD");
        assert_eq!(demo[0].kind, AccountKind::Demo);
    }

    #[test]
    fn test_missing_accounts_field_also_yields_placeholders() {
        let (live, demo) = AccountSummary::default().cards();
        assert_eq!(live.len(), 1);
        assert_eq!(demo.len(), 1);
    }

    #[test]
    fn test_cards_split_by_kind() {
        let summary = AccountSummary {
            live_balance: 150.0,
            demo_balance: 10000.0,
            currency: Some("USD".to_string()),
            accounts: Some(vec![
                Account {
                    id: "a".into(),
                    kind: AccountKind::Live,
                    broker: "Deriv".into(),
                    balance: 150.0,
                    currency: "USD".into(),
                },
                Account {
                    id: "b".into(),
                    kind: AccountKind::Demo,
                    broker: "Deriv".into(),
                    balance: 10000.0,
                    currency: "USD".into(),
                },
            ]),
        };

        let (live, demo) = summary.cards();
        assert_eq!(live.len(), 1);
        assert_eq!(demo.len(), 1);
        assert_eq!(summary.total(), 10150.0);
    }

    #[test]
    fn test_annual_price_is_ten_months_to_the_cent() {
        let plan = Plan {
            code: "EARLY_ADOPTER".to_string(),
            name: "Early Adopter".to_string(),
            price_usd: 49.99,
        };
        assert_eq!(plan.annual_price_usd(), 499.9);
        assert_eq!(BillingCycle::Annual.price_for(&plan), 499.9);
        assert_eq!(BillingCycle::Monthly.price_for(&plan), 49.99);
        assert_eq!(BillingCycle::Annual.per_label(), "/year");
    }
}
