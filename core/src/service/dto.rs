use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Direct,
    Meal,
    Health,
    Others,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Direct, Category::Meal, Category::Health, Category::Others];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Direct => "Remuneração Direta",
            Category::Meal => "Alimentação",
            Category::Health => "Saúde e Proteção",
            Category::Others => "Outros Benefícios",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    pub category: Category,
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(category: Category, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category,
            label: label.into(),
            amount,
        }
    }
}

/// Subtotals and grand total for one configuration snapshot. Values are unrounded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CompensationSummary {
    pub meal_allowance_total: Decimal,
    pub plr_monthly: Decimal,
    pub voucher_total: Decimal,
    pub others_total: Decimal,

    // Displayed subtotals
    pub direct_total: Decimal,
    pub meal_total: Decimal,
    pub health_total: Decimal,

    pub grand_total: Decimal,
}

impl CompensationSummary {
    pub fn subtotal(&self, category: Category) -> Decimal {
        match category {
            Category::Direct => self.direct_total,
            Category::Meal => self.meal_total,
            Category::Health => self.health_total,
            Category::Others => self.others_total,
        }
    }
}
