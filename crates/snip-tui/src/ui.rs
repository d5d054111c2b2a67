use crate::app::{App, AppMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(frame.area());

    render_items_panel(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    match app.mode {
        AppMode::AddItem => render_input_popup(
            frame,
            "Add Item",
            "Item text:",
            &app.input.text(),
            app.input.cursor_pos(),
        ),
        AppMode::EditItem => render_input_popup(
            frame,
            "Edit Item",
            "New item text:",
            &app.input.text(),
            app.input.cursor_pos(),
        ),
        AppMode::OpenList => render_input_popup(
            frame,
            "Open List",
            "File path:",
            &app.input.text(),
            app.input.cursor_pos(),
        ),
        AppMode::SaveListAs => render_input_popup(
            frame,
            "Save List As",
            "File path:",
            &app.input.text(),
            app.input.cursor_pos(),
        ),
        AppMode::ConfirmClear => render_confirm_clear_popup(app, frame),
        AppMode::Normal => {}
    }
}

fn render_items_panel(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![];

    if app.list.is_empty() {
        lines.push(Line::from(Span::styled(
            "No items yet. Press 'a' to add one!",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (idx, item) in app.list.items().iter().enumerate() {
            let is_selected = app.selection.get() == Some(idx);
            let cursor = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::White).bg(Color::Blue)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", cursor, item),
                style,
            )));
        }
    }

    let title = format!("Snippets ({})", app.list_path().display());
    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(content, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let status = app.list.status();
    let counts = format!(
        "Items in list: {} / Copy count: {}",
        status.item_count, status.copy_count
    );

    let second_line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            "a: add | e: edit | d: delete | Enter: copy | x: clear | o: open | s: save as | q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(
            counts,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        second_line,
    ];

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input_text: &str,
    cursor_pos: usize,
) {
    let area = centered_rect(60, 30, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let label_widget = Paragraph::new(label).style(Style::default().fg(Color::Yellow));
    frame.render_widget(label_widget, chunks[0]);

    let input = Paragraph::new(input_text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    let cursor_x = chunks[1].x + cursor_pos as u16 + 1;
    let cursor_y = chunks[1].y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn render_confirm_clear_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Clear All")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let count = app.list.len();
    let message = Paragraph::new(format!(
        "Would you like to clear {} item{}?",
        count,
        if count == 1 { "" } else { "s" }
    ))
    .style(Style::default().fg(Color::Yellow));
    frame.render_widget(message, chunks[0]);

    let confirm_text = Paragraph::new("Press ENTER/y to clear, n/ESC to cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(confirm_text, chunks[1]);
}
