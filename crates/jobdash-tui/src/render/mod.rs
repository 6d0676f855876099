//! Main render/view function (View in TEA pattern)


use jobdash_app::{AppState, Screen};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI
///
/// Only scroll bookkeeping is written back: the viewport height of the run
/// output and log detail views is known only here.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    let route = state.current_route();
    let header = widgets::MainHeader::new(state.router.current_path())
        .breadcrumb(route.as_ref().and_then(|r| r.breadcrumb()))
        .address_input(state.address_input.as_deref())
        .server(&state.settings.server.base_url);
    frame.render_widget(header, areas.header);

    let body = areas.body;
    match &mut state.screen {
        Screen::Blank => {
            frame.render_widget(
                Paragraph::new(Line::styled(" Nothing mounted", styles::text_muted())),
                body,
            );
        }
        Screen::JobList(screen) => {
            let (table, form) = layout::split_job_list(body);
            frame.render_widget(widgets::JobTable::new(state.jobs.items(), screen), table);
            frame.render_widget(widgets::JobFormView::new(&screen.form), form);
        }
        Screen::JobRun(run) => {
            run.output
                .scroll
                .set_visible_lines(layout::inner_rows(body));
            frame.render_widget(widgets::RunOutputView::new(run), body);
        }
        Screen::LogList(screen) => {
            let table = widgets::LogTable::new(state.logs.items(), screen, state.logs.cursors());
            frame.render_widget(table, body);
        }
        Screen::LogDetail(detail) => {
            detail.scroll.set_visible_lines(layout::inner_rows(body));
            frame.render_widget(widgets::LogDetailView::new(detail), body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(message) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(message), area);
    }
}
