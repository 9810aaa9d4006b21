use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Row, Table, Wrap},
    Frame,
};
use remunera_core::format::format_brl;
use remunera_core::service::dto::Category;
use remunera_core::statement::GRAND_TOTAL_LABEL;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

fn category_color(category: Category) -> Color {
    match category {
        Category::Direct => Color::Green,
        Category::Meal => Color::Yellow,
        Category::Health => Color::Red,
        Category::Others => Color::Magenta,
    }
}

/// Left-aligns `text` in `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn toggle_label(enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled("[x]", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ ]", Style::default().fg(Color::DarkGray))
    }
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status / input
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let date = app.store.date();
    let header = Paragraph::new(Line::from(vec![
        Span::styled("REMUNERAÇÃO TOTAL", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(" < ", Style::default().fg(Color::DarkGray)),
        Span::styled(date.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(55),
        ])
        .split(main_chunks[1]);

    draw_config_panel(f, app, content_chunks[0]);
    draw_statement(f, app, content_chunks[1]);
    draw_status(f, app, main_chunks[2]);

    let footer = Paragraph::new(
        "←/→ mês | [/] ano | p PLR | v VA | +/- D dias | c dias úteis | a/d benefício | r reset | e exportar | q sair",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_config_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Parameters
            Constraint::Min(4),     // Other benefits
        ])
        .split(area);

    let config = app.store.config();
    let muted = Style::default().fg(Color::DarkGray);
    let days_mode = if config.use_calculated_days {
        Span::styled(format!(" (dias úteis: {})", app.store.business_days()), Style::default().fg(Color::Blue))
    } else {
        Span::styled(format!(" (manual, úteis: {})", app.store.business_days()), Style::default().fg(Color::Yellow))
    };

    let params = vec![
        Line::from(vec![Span::styled("Salário Base:   ", muted), Span::raw(format_brl(config.salary))]),
        Line::from(vec![Span::styled("Refeitório/dia: ", muted), Span::raw(format_brl(config.refectory_daily))]),
        Line::from(vec![Span::styled("Dias:           ", muted), Span::raw(config.refectory_days.to_string()), days_mode]),
        Line::from(vec![Span::styled("Plano de Saúde: ", muted), Span::raw(format_brl(config.health_plan))]),
        Line::from(vec![Span::styled("Seguro de Vida: ", muted), Span::raw(format_brl(config.life_insurance))]),
        Line::from(vec![
            toggle_label(config.plr.enabled),
            Span::styled(" PLR anual:    ", muted),
            Span::raw(format_brl(config.plr.amount)),
        ]),
        Line::from(vec![
            Span::styled("    Mensalizado:  ", muted),
            Span::raw(format_brl(config.plr.per_month())),
        ]),
        Line::from(vec![
            toggle_label(config.va.enabled),
            Span::styled(" Vale Alim.:   ", muted),
            Span::raw(format_brl(config.va.amount)),
        ]),
    ];

    let params_block = Paragraph::new(params)
        .block(Block::default().title(" Parâmetros de Cálculo ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(params_block, chunks[0]);

    let rows: Vec<Row> = config.others.iter().map(|benefit| {
        let lock = if benefit.fixed { "🔒" } else { "  " };
        Row::new(vec![
            Span::raw(lock),
            Span::raw(benefit.name.clone()),
            Span::raw(format_brl(benefit.value)),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Fixed marker
            Constraint::Min(10),    // Name
            Constraint::Length(14), // Value
        ]
    )
    .block(Block::default().title(" Outros Benefícios ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, chunks[1], &mut app.state);
}

fn draw_statement(f: &mut Frame, app: &App, area: Rect) {
    let statement = app.store.statement();
    let mut lines = vec![
        Line::from(Span::styled(statement.reference(), Style::default().fg(Color::DarkGray))),
    ];

    for section in &statement.sections {
        let color = category_color(section.category);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(section.title.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD))));
        for line in &section.lines {
            let label = match &line.detail {
                Some(detail) => format!("{} {}", line.label, detail),
                None => line.label.clone(),
            };
            lines.push(Line::from(vec![
                Span::raw(format!("  {}", pad(&label, 40))),
                Span::raw(format_brl(line.amount)),
            ]));
        }
        if let Some(message) = section.empty_message() {
            lines.push(Line::from(Span::styled(format!("  {}", message), Style::default().add_modifier(Modifier::ITALIC))));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", pad("Subtotal", 40)), Style::default().fg(Color::DarkGray)),
            Span::styled(format_brl(section.subtotal), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(pad(GRAND_TOTAL_LABEL, 42), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(format_brl(statement.grand_total()), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::from(Span::styled(statement.total_caption(), Style::default().fg(Color::DarkGray))));

    let block = Paragraph::new(lines)
        .block(Block::default().title(format!(" {} ", statement.title())).borders(Borders::ALL).border_type(BorderType::Rounded))
        .wrap(Wrap { trim: false });
    f.render_widget(block, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let (prompt, text) = match app.input_mode {
        InputMode::AddingBenefit => ("Novo benefício (nome valor): ", app.input.as_str()),
        InputMode::EditingDays => ("Dias de refeitório: ", app.input.as_str()),
        InputMode::Normal => ("", app.status.as_deref().unwrap_or("")),
    };

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::raw(text),
    ]);
    f.render_widget(Paragraph::new(line), area);

    if !matches!(app.input_mode, InputMode::Normal) {
        let cursor_x = area.x + (prompt.chars().count() + app.cursor_position) as u16;
        f.set_cursor_position((cursor_x, area.y));
    }
}
