//! Job form: command input, inline field error and submit status

use jobdash_app::form::{JobForm, CMD_FIELD};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct JobFormView<'a> {
    form: &'a JobForm,
}

impl<'a> JobFormView<'a> {
    pub fn new(form: &'a JobForm) -> Self {
        Self { form }
    }

    fn title(&self) -> String {
        if self.form.draft.is_update() {
            format!(" Edit job {} ", self.form.draft.id)
        } else {
            " New job ".to_string()
        }
    }
}

impl Widget for JobFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.form.editing).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut input = vec![
            Span::styled(" cmd: ", styles::text_muted()),
            Span::styled(self.form.draft.cmd.as_str(), styles::text_primary()),
        ];
        if self.form.editing {
            input.push(Span::styled("█", styles::accent()));
        }
        if self.form.submitting {
            input.push(Span::styled("  saving...", styles::text_muted()));
        }

        let error = match self.form.error_for(CMD_FIELD) {
            Some(text) => Line::styled(format!("       {}", text), styles::status_red()),
            None => Line::raw(""),
        };

        let status = match &self.form.status {
            Some(status) if status.success => {
                Line::styled(format!(" {}", status.message), styles::status_green())
            }
            Some(status) => Line::styled(format!(" {}", status.message), styles::status_red()),
            None => Line::raw(""),
        };

        Paragraph::new(vec![Line::from(input), error, status]).render(inner, buf);
    }
}
