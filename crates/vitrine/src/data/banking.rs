//! Sample content for the mobile banking demo.

#[derive(Debug, Clone)]
pub struct BankAccount {
    pub name: &'static str,
    /// Last four digits only; the mockup never shows a full number.
    pub number_suffix: &'static str,
    pub balance: f64,
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub date: &'static str,
    pub merchant: &'static str,
    /// Negative for spending, positive for credits.
    pub amount: f64,
    pub category: &'static str,
}

pub fn accounts() -> Vec<BankAccount> {
    vec![
        BankAccount { name: "Everyday Checking", number_suffix: "4821", balance: 3_258.14 },
        BankAccount { name: "Rainy Day Savings", number_suffix: "7710", balance: 12_480.00 },
        BankAccount { name: "Travel Card", number_suffix: "0934", balance: -642.37 },
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction { date: "08-25", merchant: "Foundry Coffee", amount: -6.75, category: "Dining" },
        Transaction { date: "08-24", merchant: "Payroll - Meridian", amount: 2_450.00, category: "Income" },
        Transaction { date: "08-24", merchant: "Harbor Grocers", amount: -84.12, category: "Groceries" },
        Transaction { date: "08-23", merchant: "Transit Pass", amount: -48.00, category: "Transport" },
        Transaction { date: "08-22", merchant: "Waveform Records", amount: -23.99, category: "Shopping" },
        Transaction { date: "08-21", merchant: "City Utilities", amount: -112.40, category: "Bills" },
        Transaction { date: "08-20", merchant: "Refund - Trailhead", amount: 35.50, category: "Shopping" },
        Transaction { date: "08-19", merchant: "Nightjar Bistro", amount: -67.80, category: "Dining" },
        Transaction { date: "08-18", merchant: "Streaming Plus", amount: -14.99, category: "Bills" },
        Transaction { date: "08-17", merchant: "Harbor Grocers", amount: -51.63, category: "Groceries" },
    ]
}
