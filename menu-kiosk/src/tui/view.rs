//! Rendering (reads state only)

use ratatui::{prelude::*, widgets::*};
use shared::order::Modal;
use shared::util::{format_price, format_total};

use super::input::{Focus, ViewState};
use crate::app::AppState;
use crate::catalog::{ALL_LABEL, CatalogStatus};

pub fn ui(f: &mut Frame, state: &AppState, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Category filter
            Constraint::Min(1),    // Menu + Cart
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    render_header(f, state, chunks[0]);
    render_categories(f, state, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_menu(f, state, view, main_chunks[0]);
    render_cart(f, state, view, main_chunks[1]);

    let help = Paragraph::new(
        "←/→ category  ↑/↓ move  Tab menu/cart  Enter select  +/- quantity  c checkout  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);

    if let Some(item) = state.staging().item() {
        render_staging(f, item, state.staging().quantity());
    } else {
        match state.modal() {
            Modal::None => {}
            Modal::Error => render_dialog(
                f,
                " エラー ",
                vec![Line::from("カートが空です。商品を追加してください。")],
                "Enter/Esc: 閉じる",
                Color::Red,
            ),
            Modal::Checkout => render_dialog(
                f,
                " お会計の確認 ",
                vec![
                    Line::from(format_total(state.total())),
                    Line::from("この内容で会計してもよろしいですか？"),
                ],
                "Enter/y: 会計する  Esc/n: キャンセル",
                Color::Yellow,
            ),
            Modal::ThankYou => render_dialog(
                f,
                " ありがとうございました！ ",
                vec![Line::from("またのご来店をお待ちしております。")],
                "Enter: トップに戻る",
                Color::Green,
            ),
        }
    }
}

fn render_header(f: &mut Frame, state: &AppState, area: Rect) {
    let status = match state.catalog().status() {
        CatalogStatus::Loading => Span::styled(" メニュー読み込み中... ", Style::default().fg(Color::Yellow)),
        CatalogStatus::Loaded => Span::styled(
            format!(" {} 品 ", state.catalog().items().len()),
            Style::default().fg(Color::Green),
        ),
        CatalogStatus::Failed(reason) => Span::styled(
            format!(" メニュー取得失敗: {} ", reason),
            Style::default().fg(Color::Red),
        ),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" メニュー一覧 ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        status,
        Span::raw(" | "),
        Span::styled(
            format!(" 🛒 {} ", state.cart().len()),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_categories(f: &mut Frame, state: &AppState, area: Rect) {
    let active = state.filter().label();
    let mut spans = Vec::new();

    let labels = std::iter::once(ALL_LABEL.to_string()).chain(state.categories());
    for label in labels {
        let style = if label == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    let filter = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" カテゴリ "));
    f.render_widget(filter, area);
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::DIM)
    }
}

fn render_menu(f: &mut Frame, state: &AppState, view: &ViewState, area: Rect) {
    let items: Vec<ListItem> = state
        .visible_items()
        .into_iter()
        .map(|item| {
            let mut lines = vec![Line::from(vec![
                Span::styled(item.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    format!("{} (税込)", format_price(item.price)),
                    Style::default().fg(Color::Green),
                ),
            ])];
            if let Some(comment) = &item.comment {
                lines.push(Line::from(Span::styled(
                    format!("  {}", comment),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let focused = view.focus == Focus::Menu;
    let list = List::new(items)
        .block(
            Block::default()
                .title(" メニュー ")
                .borders(Borders::ALL)
                .border_style(panel_border(focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(view.menu_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_cart(f: &mut Frame, state: &AppState, view: &ViewState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let focused = view.focus == Focus::Cart;
    let block = Block::default()
        .title(" 注文カート ")
        .borders(Borders::ALL)
        .border_style(panel_border(focused));

    let lines = state.cart_lines();
    if lines.is_empty() {
        let empty = Paragraph::new("まだ注文はありません。")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, chunks[0]);
    } else {
        let rows: Vec<Row> = lines
            .iter()
            .map(|line| {
                Row::new(vec![
                    line.item.name.clone(),
                    format_price(line.item.price),
                    format!("- {} +", line.quantity),
                    format_price(line.subtotal()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(15),
                Constraint::Percentage(25),
            ],
        )
        .header(
            Row::new(vec!["商品", "単価", "数量", "小計"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(block);

        let mut table_state = TableState::default();
        if focused {
            table_state.select(Some(view.cart_cursor));
        }
        f.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let total = Paragraph::new(format_total(state.total()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(total, chunks[1]);
}

fn render_staging(f: &mut Frame, item: &shared::MenuItem, quantity: u32) {
    render_dialog(
        f,
        " 注文確認 ",
        vec![
            Line::from(format!("{} ~ {}", item.name, format_price(item.price))),
            Line::from(""),
            Line::from(vec![
                Span::raw("－  "),
                Span::styled(
                    quantity.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  ＋"),
            ])
            .alignment(Alignment::Center),
        ],
        "+/-: 数量  Enter: カート追加  Esc: キャンセル",
        Color::Cyan,
    );
}

fn render_dialog(f: &mut Frame, title: &str, mut body: Vec<Line>, hint: &str, color: Color) {
    let area = centered_rect(50, 9, f.area());
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Rect of `percent_x`% width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
