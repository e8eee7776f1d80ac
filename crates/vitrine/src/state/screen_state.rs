//! Per-demo state structs.
//!
//! One struct per demo, all local UI state: selections, filters, modal flags
//! and in-memory form fields. Nothing here survives a demo reset.

use vitrine_core::{AuthTimer, CalculatorInputs, LoanFilter, SortKey};

use crate::data::events_board::EventStatus;
use crate::data::market::NftCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgencyPanel {
    #[default]
    Work,
    Services,
    Studio,
}

impl AgencyPanel {
    pub fn next(self) -> Self {
        match self {
            AgencyPanel::Work => AgencyPanel::Services,
            AgencyPanel::Services => AgencyPanel::Studio,
            AgencyPanel::Studio => AgencyPanel::Work,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AgencyPanel::Work => "Work",
            AgencyPanel::Services => "Services",
            AgencyPanel::Studio => "Studio",
        }
    }
}

#[derive(Debug, Default)]
pub struct AgencyState {
    pub panel: AgencyPanel,
    pub selected_project: usize,
    pub show_project_detail: bool,
}

/// Status filter for the events dashboard. `None` keeps every event.
#[derive(Debug, Default)]
pub struct EventsBoardState {
    pub selected_event: usize,
    pub status_filter: Option<EventStatus>,
    pub show_detail: bool,
}

impl EventsBoardState {
    /// Cycle All -> Upcoming -> Live -> Ended -> All.
    pub fn cycle_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(EventStatus::Upcoming),
            Some(EventStatus::Upcoming) => Some(EventStatus::Live),
            Some(EventStatus::Live) => Some(EventStatus::Ended),
            Some(EventStatus::Ended) => None,
        };
        self.selected_event = 0;
    }
}

/// Which banking mockup screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankingStage {
    #[default]
    Login,
    Scanning,
    Accounts,
    Transactions,
}

#[derive(Debug, Default)]
pub struct BankingState {
    pub screen: BankingStage,
    /// Pending fake biometric scan. `None` outside the Scanning screen; Esc
    /// cancels by taking the timer, so a cancelled scan can never resolve.
    pub auth: Option<AuthTimer>,
    pub selected_account: usize,
    pub transactions_scroll: usize,
}

#[derive(Debug, Default)]
pub struct MarketState {
    pub selected_listing: usize,
    pub category_filter: Option<NftCategory>,
    pub sort_by_price: bool,
}

impl MarketState {
    pub fn cycle_filter(&mut self) {
        self.category_filter = match self.category_filter {
            None => Some(NftCategory::ALL[0]),
            Some(current) => {
                let idx = NftCategory::ALL.iter().position(|c| *c == current).unwrap_or(0);
                NftCategory::ALL.get(idx + 1).copied()
            }
        };
        self.selected_listing = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MortgagePanel {
    #[default]
    Form,
    Offers,
    Schedule,
}

impl MortgagePanel {
    pub fn next(self) -> Self {
        match self {
            MortgagePanel::Form => MortgagePanel::Offers,
            MortgagePanel::Offers => MortgagePanel::Schedule,
            MortgagePanel::Schedule => MortgagePanel::Form,
        }
    }
}

/// Labels for the eight calculator fields, in form order.
pub const MORTGAGE_FIELDS: [&str; 8] = [
    "Home price ($)",
    "Down payment ($)",
    "Loan term (years)",
    "Interest rate (%)",
    "Property tax ($/yr)",
    "Insurance ($/yr)",
    "PMI ($/yr)",
    "HOA ($/mo)",
];

#[derive(Debug)]
pub struct MortgageState {
    pub panel: MortgagePanel,
    /// Raw text of the eight form fields, parallel to [`MORTGAGE_FIELDS`].
    pub fields: [String; 8],
    pub focused_field: usize,
    /// True while the focused field is capturing keystrokes.
    pub editing: bool,
    pub filter: LoanFilter,
    pub sort: SortKey,
    pub selected_offer: usize,
    pub schedule_scroll: usize,
}

impl Default for MortgageState {
    fn default() -> Self {
        let defaults = CalculatorInputs::default();
        Self {
            panel: MortgagePanel::Form,
            fields: [
                format!("{:.0}", defaults.home_price),
                format!("{:.0}", defaults.down_payment),
                format!("{:.0}", defaults.loan_term_years),
                format!("{}", defaults.annual_interest_rate_pct),
                format!("{:.0}", defaults.annual_property_tax),
                format!("{:.0}", defaults.annual_insurance),
                format!("{:.0}", defaults.annual_pmi),
                format!("{:.0}", defaults.monthly_hoa),
            ],
            focused_field: 0,
            editing: false,
            filter: LoanFilter::default(),
            sort: SortKey::default(),
            selected_offer: 0,
            schedule_scroll: 0,
        }
    }
}

impl MortgageState {
    /// Parse the form into calculator inputs.
    ///
    /// Degenerate but parseable values (zero rate, zero term) pass through on
    /// purpose; the calculator documents what they produce.
    pub fn inputs(&self) -> Result<CalculatorInputs, String> {
        let parse = |idx: usize| -> Result<f64, String> {
            self.fields[idx]
                .parse::<f64>()
                .map_err(|_| format!("{} is not a number: {:?}", MORTGAGE_FIELDS[idx], self.fields[idx]))
        };

        Ok(CalculatorInputs {
            home_price: parse(0)?,
            down_payment: parse(1)?,
            loan_term_years: parse(2)?,
            annual_interest_rate_pct: parse(3)?,
            annual_property_tax: parse(4)?,
            annual_insurance: parse(5)?,
            annual_pmi: parse(6)?,
            monthly_hoa: parse(7)?,
        })
    }
}

/// Labels for the catering inquiry form fields.
pub const INQUIRY_FIELDS: [&str; 5] = ["Name", "Email", "Event date", "Guest count", "Notes"];

#[derive(Debug, Default)]
pub struct CateringState {
    pub selected_package: usize,
    /// False while browsing packages, true while the inquiry form has focus.
    pub form_focused: bool,
    pub fields: [String; 5],
    pub focused_field: usize,
    pub editing: bool,
    /// Set when the user "sends" the inquiry. Nothing is transmitted; the
    /// flag only switches the form to a confirmation blurb.
    pub submitted: bool,
}
