//! Month grid construction.
//!
//! # Invariants
//! - Output is `first_weekday` blanks followed by one cell per day.
//! - No trailing blanks: the last week row may be short.
//! - At most `MAX_VISIBLE_EVENTS` events per day, first ones in storage
//!   order; the rest are counted in `overflow`.

use super::YearMonth;
use crate::model::event::Event;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Events rendered inside one day cell before collapsing into "+N more".
pub const MAX_VISIBLE_EVENTS: usize = 2;

/// One unit of the 7-column month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Leading padding before day 1. Not bound to a date, not clickable.
    Blank,
    Day(DayCell),
}

impl Cell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Blank => None,
            Self::Day(day) => Some(day),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// A grid cell bound to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    /// Up to `MAX_VISIBLE_EVENTS` events, storage order.
    pub visible: Vec<Event>,
    /// Events of this day not in `visible`.
    pub overflow: usize,
}

impl DayCell {
    /// `YYYY-MM-DD` key of this day.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn event_count(&self) -> usize {
        self.visible.len() + self.overflow
    }

    /// `+N more` when events were hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

/// Lays out `month` as grid cells.
///
/// `events` may span any dates; only those inside `month` are attached.
pub fn build_month_grid(month: YearMonth, today: NaiveDate, events: &[Event]) -> Vec<Cell> {
    let leading = month.first_weekday() as usize;
    let days = month.days() as usize;

    let mut by_date: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
    for event in events {
        if event.date.year() == month.year() && event.date.month() == month.month() {
            by_date.entry(event.date).or_default().push(event);
        }
    }

    let mut cells = Vec::with_capacity(leading + days);
    cells.extend(std::iter::repeat(Cell::Blank).take(leading));

    for date in month.first_day().iter_days().take(days) {
        let on_day = by_date.remove(&date).unwrap_or_default();
        let overflow = on_day.len().saturating_sub(MAX_VISIBLE_EVENTS);
        let visible = on_day
            .into_iter()
            .take(MAX_VISIBLE_EVENTS)
            .cloned()
            .collect();

        cells.push(Cell::Day(DayCell {
            day: date.day(),
            date,
            is_today: date == today,
            visible,
            overflow,
        }));
    }

    cells
}
