// SPDX-License-Identifier: MPL-2.0
//! Typewriter code terminal shown in the about section.
//!
//! The terminal reveals a fixed list of code lines one character per step.
//! Reaching the end of a line costs one step and moves to the next line;
//! after the last line it stops for good. Steps are driven by app ticks and
//! paced by the configured typing interval.

pub mod highlight;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Space};
use iced::{Color, Element, Font, Length};
use std::time::{Duration, Instant};

/// Lines kept on screen; older lines scroll off the top.
pub const VISIBLE_LINES: usize = 14;

/// Most steps taken in one tick after a long stall (e.g. a suspended window).
const MAX_CATCH_UP_STEPS: u32 = 8;

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    /// Line currently being typed.
    line: usize,
    /// Characters of `line` already revealed.
    column: usize,
    interval: Duration,
    last_step: Option<Instant>,
}

impl Typewriter {
    #[must_use]
    pub fn new(lines: Vec<String>, interval: Duration) -> Self {
        Self {
            lines,
            line: 0,
            column: 0,
            interval,
            last_step: None,
        }
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.line < self.lines.len()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reveals one more character, or moves to the next line when the
    /// current one is complete. Returns `false` once everything is typed.
    pub fn step(&mut self) -> bool {
        let Some(current) = self.lines.get(self.line) else {
            return false;
        };
        if self.column < current.chars().count() {
            self.column += 1;
        } else {
            self.line += 1;
            self.column = 0;
        }
        true
    }

    /// Advances by as many steps as the interval allows since the last one.
    /// Returns whether the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_typing() {
            return false;
        }
        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            return self.step();
        };
        if self.interval.is_zero() {
            self.finish();
            return true;
        }

        let elapsed = now.saturating_duration_since(last);
        let due = u32::try_from(elapsed.as_nanos() / self.interval.as_nanos())
            .unwrap_or(u32::MAX);
        if due == 0 {
            return false;
        }
        self.last_step = Some(
            self.interval
                .checked_mul(due)
                .and_then(|span| last.checked_add(span))
                .unwrap_or(now),
        );

        let mut changed = false;
        for _ in 0..due.min(MAX_CATCH_UP_STEPS) {
            changed |= self.step();
        }
        changed
    }

    /// Reveals everything at once.
    pub fn finish(&mut self) {
        self.line = self.lines.len();
        self.column = 0;
    }

    /// Lines as currently displayed: completed lines plus the partial one.
    #[must_use]
    pub fn displayed_lines(&self) -> Vec<&str> {
        let mut shown: Vec<&str> = self
            .lines
            .iter()
            .take(self.line)
            .map(String::as_str)
            .collect();
        if let Some(current) = self.lines.get(self.line) {
            let end = current
                .char_indices()
                .nth(self.column)
                .map_or(current.len(), |(byte, _)| byte);
            shown.push(&current[..end]);
        }
        shown
    }

    /// One-based `(line, column)` of the caret, for the status bar.
    #[must_use]
    pub fn caret(&self) -> (usize, usize) {
        if self.is_typing() {
            (self.line + 1, self.column + 1)
        } else {
            let last = self.lines.last().map_or(0, |l| l.chars().count());
            (self.lines.len().max(1), last + 1)
        }
    }
}

/// Renders the terminal window.
pub fn view<'a, Message: 'a>(typewriter: &'a Typewriter, i18n: &I18n) -> Element<'a, Message> {
    let dot = |color: Color| {
        Container::new(Space::new().width(10.0).height(10.0))
            .style(styles::container::marker(color))
    };
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center)
        .push(dot(Color::from_rgb8(0xff, 0x5f, 0x57)))
        .push(dot(Color::from_rgb8(0xff, 0xbd, 0x2e)))
        .push(dot(Color::from_rgb8(0x28, 0xca, 0x42)))
        .push(Space::new().width(spacing::XS))
        .push(muted(i18n.tr("terminal-file-name")));

    let displayed = typewriter.displayed_lines();
    let skip = displayed.len().saturating_sub(VISIBLE_LINES);
    let mut body = Column::new().spacing(2.0);
    for (index, line) in displayed.iter().enumerate().skip(skip) {
        body = body.push(code_row(index + 1, line));
    }
    if typewriter.is_typing() {
        body = body.push(
            Row::new()
                .push(gutter(displayed.len() + 1))
                .push(text("▍").font(Font::MONOSPACE).color(palette::ACCENT_400)),
        );
    }

    let (line, column) = typewriter.caret();
    let footer = Row::new()
        .spacing(spacing::SM)
        .push(muted(i18n.tr("terminal-language")))
        .push(Space::new().width(Length::Fill))
        .push(muted("UTF-8".to_string()))
        .push(muted(i18n.tr_with_args(
            "terminal-caret",
            &[("line", &line.to_string()), ("column", &column.to_string())],
        )));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(
                Container::new(body)
                    .height(sizing::TERMINAL_HEIGHT)
                    .width(Length::Fill),
            )
            .push(footer),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::terminal)
    .into()
}

fn code_row<'a, Message: 'a>(number: usize, line: &'a str) -> Element<'a, Message> {
    let mut row = Row::new().push(gutter(number));
    for token in highlight::highlight(line) {
        row = row.push(
            text(token.text)
                .font(Font::MONOSPACE)
                .size(typography::CODE)
                .color(token.kind.color()),
        );
    }
    row.into()
}

fn gutter<'a, Message: 'a>(number: usize) -> Element<'a, Message> {
    Container::new(
        text(format!("{number:>2}"))
            .font(Font::MONOSPACE)
            .size(typography::CODE)
            .color(palette::SYNTAX_COMMENT),
    )
    .width(sizing::TERMINAL_GUTTER)
    .into()
}

fn muted<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(10);

    fn typewriter(lines: &[&str]) -> Typewriter {
        Typewriter::new(lines.iter().map(ToString::to_string).collect(), MS)
    }

    #[test]
    fn reveals_one_character_per_step() {
        let mut tw = typewriter(&["abc"]);
        assert_eq!(tw.displayed_lines(), vec![""]);
        tw.step();
        assert_eq!(tw.displayed_lines(), vec!["a"]);
        tw.step();
        assert_eq!(tw.displayed_lines(), vec!["ab"]);
    }

    #[test]
    fn end_of_line_costs_one_step_then_moves_on() {
        let mut tw = typewriter(&["ab", "c"]);
        tw.step();
        tw.step();
        assert_eq!(tw.displayed_lines(), vec!["ab"]);
        tw.step();
        assert_eq!(tw.displayed_lines(), vec!["ab", ""]);
        tw.step();
        assert_eq!(tw.displayed_lines(), vec!["ab", "c"]);
    }

    #[test]
    fn stops_after_last_line() {
        let mut tw = typewriter(&["a", ""]);
        let mut steps = 0;
        while tw.step() {
            steps += 1;
        }
        // "a": 1 char + 1 line end, "": 1 line end.
        assert_eq!(steps, 3);
        assert!(!tw.is_typing());
        assert_eq!(tw.displayed_lines(), vec!["a", ""]);
        assert!(!tw.step());
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let mut tw = typewriter(&["né"]);
        tw.step();
        tw.step();
        assert_eq!(tw.displayed_lines(), vec!["né"]);
    }

    #[test]
    fn tick_paces_steps_by_interval() {
        let mut tw = typewriter(&["abcdef"]);
        let t0 = Instant::now();

        assert!(tw.tick(t0));
        assert_eq!(tw.displayed_lines(), vec!["a"]);

        assert!(!tw.tick(t0 + Duration::from_millis(5)));
        assert!(tw.tick(t0 + Duration::from_millis(25)));
        assert_eq!(tw.displayed_lines(), vec!["abc"]);
    }

    #[test]
    fn tick_catch_up_is_bounded() {
        let mut tw = typewriter(&["abcdefghijklmnopqrstuvwxyz"]);
        let t0 = Instant::now();
        tw.tick(t0);
        tw.tick(t0 + Duration::from_secs(10));
        assert_eq!(
            tw.displayed_lines()[0].len(),
            1 + MAX_CATCH_UP_STEPS as usize
        );
    }

    #[test]
    fn catch_up_stays_bounded_past_u32_steps() {
        let lines = vec!["abcdefghijklmnopqrstuvwxyz".to_string()];
        let mut tw = Typewriter::new(lines, Duration::from_nanos(1));
        let t0 = Instant::now();
        tw.tick(t0);

        assert!(tw.tick(t0 + Duration::from_nanos((1 << 32) + 3)));
        assert_eq!(
            tw.displayed_lines()[0].len(),
            1 + MAX_CATCH_UP_STEPS as usize
        );
        assert_eq!(tw.caret(), (1, 2 + MAX_CATCH_UP_STEPS as usize));
    }

    #[test]
    fn finish_reveals_everything() {
        let mut tw = typewriter(&["one", "two"]);
        tw.finish();
        assert!(!tw.is_typing());
        assert_eq!(tw.displayed_lines(), vec!["one", "two"]);
        assert_eq!(tw.caret(), (2, 4));
    }

    #[test]
    fn empty_program_is_done_immediately() {
        let tw = typewriter(&[]);
        assert!(!tw.is_typing());
        assert!(tw.displayed_lines().is_empty());
    }
}
