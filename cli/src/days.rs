use remunera_core::calendar::{days_in_month, DateSelection};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Mês")]
    month: String,
    #[tabled(rename = "Dias")]
    days: u32,
    #[tabled(rename = "Dias úteis")]
    business_days: u32,
}

pub fn render_year(year: i32) -> String {
    let rows: Vec<MonthRow> = (0..12)
        .map(|m| {
            let period = DateSelection::new(year, m);
            MonthRow {
                month: period.month_name().to_string(),
                days: days_in_month(period.year, period.month + 1),
                business_days: period.business_days(),
            }
        })
        .collect();
    let total: u32 = rows.iter().map(|r| r.business_days).sum();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    format!("{}\n{}: {} business days", table, year, total)
}
