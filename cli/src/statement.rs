use remunera_core::format::format_brl;
use remunera_core::statement::{Statement, DISCLAIMER, GRAND_TOTAL_LABEL};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use unicode_width::UnicodeWidthStr;

const DOCUMENT_WIDTH: usize = 64;

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "Categoria")]
    section: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Valor")]
    amount: String,
}

pub fn render_table(statement: &Statement, colored: bool) -> String {
    let mut rows = Vec::new();

    for section in &statement.sections {
        // Category name only on the first row of the group
        let mut section_col = section.title.clone();
        for line in &section.lines {
            let item = match &line.detail {
                Some(detail) => format!("{}\n{}", line.label, detail),
                None => line.label.clone(),
            };
            rows.push(StatementRow {
                section: std::mem::take(&mut section_col),
                item,
                amount: format_brl(line.amount),
            });
        }
        if let Some(message) = section.empty_message() {
            rows.push(StatementRow {
                section: std::mem::take(&mut section_col),
                item: message.to_string(),
                amount: String::new(),
            });
        }
        rows.push(StatementRow {
            section: section_col,
            item: "Subtotal".to_string(),
            amount: format_brl(section.subtotal),
        });
    }

    rows.push(StatementRow {
        section: String::new(),
        item: GRAND_TOTAL_LABEL.to_string(),
        amount: format_brl(statement.grand_total()),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    if colored {
        table
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN))
            .with(Modify::new(Rows::last()).with(Color::BOLD));
    }

    format!("{}\n{}\n{}", statement.title(), statement.reference(), table)
}

/// One dotted-leader line: `label ..... amount`, padded to `width` display columns.
fn leader_line(indent: usize, label: &str, amount: &str, width: usize) -> String {
    let used = indent + label.width() + amount.width() + 2;
    let dots = width.saturating_sub(used).max(1);
    format!("{}{} {} {}", " ".repeat(indent), label, ".".repeat(dots), amount)
}

/// Plain-text printable document.
pub fn render_text(statement: &Statement) -> String {
    let mut out = Vec::new();
    out.push(statement.title().to_string());
    out.push(statement.reference());
    out.push("=".repeat(DOCUMENT_WIDTH));

    for section in &statement.sections {
        out.push(String::new());
        out.push(section.title.clone());
        for line in &section.lines {
            out.push(leader_line(2, &line.label, &format_brl(line.amount), DOCUMENT_WIDTH));
            if let Some(detail) = &line.detail {
                out.push(format!("    {}", detail));
            }
        }
        if let Some(message) = section.empty_message() {
            out.push(format!("  {}", message));
        }
        out.push(leader_line(2, "Subtotal", &format_brl(section.subtotal), DOCUMENT_WIDTH));
    }

    out.push(String::new());
    out.push("=".repeat(DOCUMENT_WIDTH));
    out.push(leader_line(0, GRAND_TOTAL_LABEL, &format_brl(statement.grand_total()), DOCUMENT_WIDTH));
    out.push(statement.total_caption());
    out.push(String::new());
    out.push(DISCLAIMER.to_string());
    out.push(statement.footer());

    out.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use remunera_core::{AppConfig, DateSelection};

    fn sample() -> Statement {
        Statement::build(&AppConfig::default_for(21), DateSelection::new(2024, 1))
    }

    #[test]
    fn test_leader_line_aligns_accented_labels() {
        let plain = leader_line(2, "Subtotal", "R$\u{a0}1,00", 40);
        let accented = leader_line(2, "Salário Base", "R$\u{a0}1,00", 40);
        assert_eq!(plain.width(), 40);
        assert_eq!(accented.width(), 40);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample());
        assert!(text.starts_with("Extrato de Remuneração Total\nReferência: Fevereiro / 2024\n"));
        assert!(text.contains("(21 dias x R$\u{a0}24,00)"));
        assert!(text.contains("Auxílio Wellhub (Gympass)"));
        assert!(text.contains("R$\u{a0}3.454,00"));
        assert!(!text.contains("PLR"));
    }

    #[test]
    fn test_render_table_without_color() {
        let table = render_table(&sample(), false);
        assert!(table.contains("Remuneração Direta"));
        assert!(table.contains(GRAND_TOTAL_LABEL));
        assert!(!table.contains('\u{1b}'));
    }
}
