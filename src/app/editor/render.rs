use super::util::{cell_of_grapheme, centered_rect, grapheme_cells};
use super::{Editor, MENU_HEIGHT, STATUS_HEIGHT};
use crate::app::dialog::{ConfirmChoice, Dialog, MessageLevel};
use crate::app::menu::{accelerator, MenuEntry};
use crate::app::status_bar::StatusKind;
use crate::models::TagMask;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

fn tag_modifiers(mask: TagMask) -> Modifier {
    let mut m = Modifier::empty();
    if mask.bold {
        m |= Modifier::BOLD;
    }
    if mask.italic {
        m |= Modifier::ITALIC;
    }
    if mask.underline {
        m |= Modifier::UNDERLINED;
    }
    m
}

/// Appends to the last span when the style matches.
fn push_styled(spans: &mut Vec<Span<'static>>, text: &str, style: Style) {
    if let Some(last) = spans.last_mut() {
        if last.style == style {
            last.content.to_mut().push_str(text);
            return;
        }
    }
    spans.push(Span::styled(text.to_string(), style));
}

impl Editor {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MENU_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let menu_area = chunks[0];
        let text_area = chunks[1];
        let status_area = chunks[2];

        self.last_text_area = (text_area.width > 0 && text_area.height > 0).then_some(text_area);
        if self.follow_cursor {
            self.scroll_to_cursor(text_area);
        }

        self.render_text(frame, text_area);
        self.render_menu_bar(frame, menu_area);
        self.render_status(frame, status_area);
        self.render_dropdown(frame, area);

        if let Some(cursor) = self.render_dialog(frame, area) {
            frame.set_cursor_position(cursor);
        } else if self.dialog.is_none() && !self.menu.is_open() {
            if let Some(cursor) = self.text_cursor(text_area) {
                frame.set_cursor_position(cursor);
            }
        }
    }

    fn cursor_cell(&self) -> (usize, usize) {
        let buffer = self.document.buffer();
        let (row, col) = buffer.cursor();
        let line = buffer.line_content(row);
        (row, cell_of_grapheme(&line, col, self.tab_size))
    }

    fn scroll_to_cursor(&mut self, area: Rect) {
        let (height, width) = (usize::from(area.height), usize::from(area.width));
        if height == 0 || width == 0 {
            return;
        }
        let (row, cell) = self.cursor_cell();
        if row < self.scroll.0 {
            self.scroll.0 = row;
        } else if row >= self.scroll.0 + height {
            self.scroll.0 = row + 1 - height;
        }
        if cell < self.scroll.1 {
            self.scroll.1 = cell;
        } else if cell >= self.scroll.1 + width {
            self.scroll.1 = cell + 1 - width;
        }
    }

    fn text_cursor(&self, area: Rect) -> Option<(u16, u16)> {
        let (row, cell) = self.cursor_cell();
        let y = row.checked_sub(self.scroll.0)?;
        let x = cell.checked_sub(self.scroll.1)?;
        if y >= usize::from(area.height) || x >= usize::from(area.width) {
            return None;
        }
        Some((area.x + x as u16, area.y + y as u16))
    }

    fn render_text(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = self.document.buffer();
        let tags = self.document.tags();
        let selection = buffer.selection_char_range();
        let selected_style = Style::default().bg(self.theme.selection_bg);

        let first = self.scroll.0;
        let last = (first + usize::from(area.height)).min(buffer.len_lines());
        let left = self.scroll.1;
        let right = left + usize::from(area.width);

        let mut lines = Vec::with_capacity(last.saturating_sub(first));
        for row in first..last {
            let content = buffer.line_content(row);
            let mut char_pos = buffer.rope().line_to_char(row);
            let mut col = 0usize;
            let mut spans: Vec<Span<'static>> = Vec::new();

            for g in content.graphemes(true) {
                if col >= right {
                    break;
                }
                let w = grapheme_cells(g, col, self.tab_size);
                let mut style = Style::default().add_modifier(tag_modifiers(tags.mask_at(char_pos)));
                if selection.as_ref().is_some_and(|r| r.contains(&char_pos)) {
                    style = style.patch(selected_style);
                }

                if col + w > left {
                    if g == "\t" || col < left {
                        // tab, or a wide char cut by the left edge
                        let visible = (col + w).min(right) - col.max(left);
                        push_styled(&mut spans, &" ".repeat(visible), style);
                    } else if col + w > right {
                        push_styled(&mut spans, &" ".repeat(right - col), style);
                    } else {
                        push_styled(&mut spans, g, style);
                    }
                }

                col += w;
                char_pos += g.chars().count();
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let bar_style = Style::default()
            .bg(self.theme.menu_bar_bg)
            .fg(self.theme.menu_bar_fg);
        let open_style = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg);

        let mut spans: Vec<Span> = Vec::new();
        for (index, menu) in self.menu.menus().iter().enumerate() {
            let style = if self.menu.open_index() == Some(index) {
                open_style
            } else {
                bar_style
            };
            spans.push(Span::styled(format!(" {} ", menu.title), style));
        }

        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let mut name = self.document.file_name();
        if self.document.is_dirty() {
            name.push_str(" [Modified]");
        }
        let name = format!("{name} ");
        let free = usize::from(area.width).saturating_sub(used);
        if name.width() < free {
            spans.push(Span::styled(" ".repeat(free - name.width()), bar_style));
            spans.push(Span::styled(name, bar_style.add_modifier(Modifier::BOLD)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);
    }

    fn render_dropdown(&mut self, frame: &mut Frame, area: Rect) {
        let Some(index) = self.menu.open_index() else {
            self.last_dropdown_area = None;
            return;
        };
        let rect = self.menu.dropdown_rect(index, &self.keybindings, area);
        self.last_dropdown_area = (rect.width > 2 && rect.height > 2).then_some(rect);
        let Some(rect) = self.last_dropdown_area else {
            return;
        };

        let base = Style::default()
            .bg(self.theme.menu_bar_bg)
            .fg(self.theme.menu_bar_fg);
        let selected = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg);
        let inner_width = usize::from(rect.width - 2);

        let menu = &self.menu.menus()[index];
        let lines: Vec<Line> = menu
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                MenuEntry::Separator => Line::styled(
                    "─".repeat(inner_width),
                    base.fg(self.theme.menu_muted_fg),
                ),
                MenuEntry::Item { label, command } => {
                    let accel = accelerator(&self.keybindings, command).unwrap_or_default();
                    let gap = inner_width.saturating_sub(label.width() + accel.width() + 2);
                    let text = format!(" {label}{}{accel} ", " ".repeat(gap));
                    let mut style = if i == self.menu.highlighted() {
                        selected
                    } else {
                        base
                    };
                    if !self.command_enabled(*command) {
                        style = style.fg(self.theme.menu_muted_fg);
                    }
                    Line::styled(text, style)
                }
            })
            .collect();

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).style(base).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(base.fg(self.theme.dialog_border)),
            ),
            rect,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let buffer = self.document.buffer();
        let (row, col) = buffer.cursor();
        let right = format!(
            "Ln {}, Col {}  {}pt  {} ",
            row + 1,
            col + 1,
            self.document.font_size(),
            self.status.word_count_label()
        );

        let message_style = match self.status.kind() {
            StatusKind::Saved => Style::default().fg(self.theme.saved_fg),
            StatusKind::Error => Style::default().fg(self.theme.error_fg),
            StatusKind::Idle | StatusKind::Info => Style::default().fg(self.theme.status_fg),
        };

        let width = usize::from(area.width);
        let room = width.saturating_sub(right.width());
        let mut message = String::from(" ");
        for g in self.status.message().graphemes(true) {
            if message.width() + g.width() > room {
                break;
            }
            message.push_str(g);
        }
        let gap = width.saturating_sub(message.width() + right.width());
        let line = Line::from(vec![
            Span::styled(message, message_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(right, Style::default().fg(self.theme.status_fg)),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().add_modifier(Modifier::REVERSED)),
            area,
        );
    }

    /// Draws the open dialog; returns the cursor position for prompts.
    fn render_dialog(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        let dialog = self.dialog.as_ref()?;
        let border = match dialog {
            Dialog::Message {
                level: MessageLevel::Error,
                ..
            } => self.theme.error_fg,
            _ => self.theme.dialog_border,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", dialog.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let muted = Style::default().fg(self.theme.menu_muted_fg);

        match dialog {
            Dialog::Confirm {
                message, choice, ..
            } => {
                let rect = centered_rect(50, 7, area);
                let mut buttons: Vec<Span> = Vec::new();
                for option in ConfirmChoice::ALL {
                    let style = if option == *choice {
                        Style::default()
                            .bg(self.theme.menu_selected_bg)
                            .fg(self.theme.menu_selected_fg)
                    } else {
                        Style::default()
                    };
                    buttons.push(Span::styled(format!("[ {} ]", option.label()), style));
                    buttons.push(Span::raw("  "));
                }
                let lines = vec![
                    Line::from(message.as_str()),
                    Line::raw(""),
                    Line::from(buttons),
                    Line::styled("y / n / c", muted),
                ];
                frame.render_widget(Clear, rect);
                frame.render_widget(
                    Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                    rect,
                );
                None
            }
            Dialog::Prompt {
                label, input, hint, ..
            } => {
                let height = if hint.is_some() { 7 } else { 6 };
                let rect = centered_rect(60, height, area);
                let field_width = usize::from(rect.width.saturating_sub(2));
                let (visible, cursor_col) = input.visible(field_width);

                let mut lines = vec![Line::from(label.as_str()), Line::from(visible.to_string())];
                if let Some(hint) = hint {
                    lines.push(Line::styled(format!("Types: {hint}"), muted));
                }
                lines.push(Line::raw(""));
                lines.push(Line::styled("[Enter] OK  [Esc] Cancel", muted));

                frame.render_widget(Clear, rect);
                frame.render_widget(Paragraph::new(lines).block(block), rect);

                let x = rect.x + 1 + cursor_col as u16;
                let y = rect.y + 2;
                (x < rect.right().saturating_sub(1) && y < rect.bottom()).then_some((x, y))
            }
            Dialog::Message { body, .. } => {
                let width = (body.width() as u16 + 4).clamp(30, 70);
                let body_rows = (body.width() as u16 / width.saturating_sub(2).max(1)) + 1;
                let rect = centered_rect(width, body_rows + 4, area);
                let lines = vec![
                    Line::from(body.as_str()),
                    Line::raw(""),
                    Line::styled("[Enter] OK", muted),
                ];
                frame.render_widget(Clear, rect);
                frame.render_widget(
                    Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                    rect,
                );
                None
            }
        }
    }
}
