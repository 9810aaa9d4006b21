use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::DateSelection;
use crate::format::format_brl;
use crate::model::config::AppConfig;
use crate::service::aggregator::{aggregate, line_items, LABEL_REFECTORY};
use crate::service::dto::{Category, CompensationSummary};

pub const TITLE: &str = "Extrato de Remuneração Total";
pub const GRAND_TOTAL_LABEL: &str = "Total Mensal Estimado";
pub const NO_OTHERS_MESSAGE: &str = "Nenhum benefício adicional cadastrado.";
pub const DISCLAIMER: &str = "Este extrato tem finalidade meramente informativa e de simulação, \
não substituindo o holerite oficial ou documentos legais da empresa.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatementLine {
    pub label: String,
    /// Secondary text under the label, e.g. the day count behind the meal allowance.
    pub detail: Option<String>,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatementSection {
    pub category: Category,
    pub title: String,
    pub lines: Vec<StatementLine>,
    pub subtotal: Decimal,
}

impl StatementSection {
    /// Text shown when the section has no lines.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self.category {
            Category::Others if self.lines.is_empty() => Some(NO_OTHERS_MESSAGE),
            _ => None,
        }
    }
}

/// The printable document for one period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Statement {
    pub period: DateSelection,
    pub sections: Vec<StatementSection>,
    pub summary: CompensationSummary,
    pub generated_on: NaiveDate,
}

impl Statement {
    pub fn build(config: &AppConfig, period: DateSelection) -> Self {
        let summary = aggregate(config);
        let items = line_items(config);

        let sections = Category::ALL.iter().map(|&category| {
            let lines = items.iter()
                .filter(|item| item.category == category)
                .map(|item| StatementLine {
                    detail: (item.label == LABEL_REFECTORY && category == Category::Meal).then(|| {
                        format!("({} dias x {})", config.refectory_days, format_brl(config.refectory_daily))
                    }),
                    label: item.label.clone(),
                    amount: item.amount,
                })
                .collect();

            StatementSection {
                category,
                title: category.title().to_string(),
                lines,
                subtotal: summary.subtotal(category),
            }
        }).collect();

        Self {
            period,
            sections,
            summary,
            generated_on: Local::now().date_naive(),
        }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn reference(&self) -> String {
        format!("Referência: {}", self.period)
    }

    pub fn total_caption(&self) -> String {
        format!(
            "Soma de salário e benefícios para {}/{}",
            self.period.month_name(),
            self.period.year
        )
    }

    pub fn footer(&self) -> String {
        format!(
            "Gerado automaticamente pelo sistema RemuneraFácil em {}.",
            self.generated_on.format("%d/%m/%Y")
        )
    }

    pub fn grand_total(&self) -> Decimal {
        self.summary.grand_total
    }
}
