//! Top-level UI layout — input sidebar, plan page, 1-line status bar.

pub mod plan_page;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, Pane};
use crate::theme;

const SIDEBAR_WIDTH: u16 = 36;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    // Split: sidebar | page.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(main_area);

    let sidebar_active = app.active_pane == Pane::Sidebar;
    let page_active = app.active_pane == Pane::Page;

    let sidebar_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(sidebar_active))
        .title(" Inputs ")
        .title_style(theme::panel_title(sidebar_active));
    let sidebar_inner = sidebar_block.inner(columns[0]);
    f.render_widget(sidebar_block, columns[0]);
    sidebar::render(f, sidebar_inner, app);

    let page_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(page_active))
        .title(" Plan ")
        .title_style(theme::panel_title(page_active));
    let page_inner = page_block.inner(columns[1]);
    f.render_widget(page_block, columns[1]);
    plan_page::render(f, page_inner, app);

    status_bar::render(f, status_area, app);
}
