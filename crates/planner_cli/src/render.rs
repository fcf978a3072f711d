//! Plain-text rendering of planner views.

use planner_core::{Cell, Event, Task, YearMonth};

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Month grid as text: header, 7-column day numbers, then the busy days.
///
/// Today is wrapped in brackets, days with events get a trailing `*`.
pub fn month(ym: YearMonth, cells: &[Cell]) -> String {
    let mut lines = vec![format!("{:^27}", ym.label()), WEEKDAY_HEADER.to_string()];
    lines.extend(cells.chunks(7).map(|week| {
        let line: String = week.iter().map(cell_text).collect();
        line.trim_end().to_string()
    }));

    let busy: Vec<String> = cells
        .iter()
        .filter_map(Cell::as_day)
        .filter(|day| day.event_count() > 0)
        .map(|day| {
            let titles: Vec<&str> = day.visible.iter().map(|e| e.title.as_str()).collect();
            match day.overflow_label() {
                Some(more) => format!("{}  {}  {more}", day.date_iso(), titles.join(", ")),
                None => format!("{}  {}", day.date_iso(), titles.join(", ")),
            }
        })
        .collect();
    if !busy.is_empty() {
        lines.push(String::new());
        lines.extend(busy);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Blank => "    ".to_string(),
        Cell::Day(day) => {
            let marker = if day.event_count() > 0 { "*" } else { " " };
            if day.is_today {
                format!("[{:>2}]", day.day)
            } else {
                format!(" {:>2}{marker}", day.day)
            }
        }
    }
}

/// One event per line: date, time, title, category, id.
pub fn event_line(event: &Event) -> String {
    let mut line = event.date_iso();
    if let Some(time) = &event.time {
        line.push(' ');
        line.push_str(time);
    }
    line.push_str("  ");
    line.push_str(&event.title);
    if let Some(category) = &event.category {
        line.push_str(" • ");
        line.push_str(category);
    }
    line.push_str(&format!("  ({})", event.id));
    line
}

/// One task per line: checkbox, title, due date, id.
pub fn task_line(task: &Task) -> String {
    let check = if task.done { "[x]" } else { "[ ]" };
    let mut line = format!("{check} {}", task.title);
    if let Some(due) = task.due {
        line.push_str(&format!("  due {}", due.format("%Y-%m-%d")));
    }
    line.push_str(&format!("  ({})", task.id));
    line
}

#[cfg(test)]
mod tests {
    use super::{event_line, month, task_line};
    use chrono::NaiveDate;
    use planner_core::{build_month_grid, Event, Task, YearMonth};
    use uuid::Uuid;

    #[test]
    fn month_marks_today_and_lists_busy_days() {
        let ym = YearMonth::new(2025, 6).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events: Vec<Event> = ["a", "b", "c"]
            .iter()
            .map(|title| Event {
                id: Uuid::new_v4(),
                title: title.to_string(),
                date: on,
                time: None,
                category: None,
                description: None,
            })
            .collect();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let text = month(ym, &build_month_grid(ym, today, &events));

        assert!(text.contains("June 2025"));
        assert!(text.contains("[15]"));
        assert!(text.contains(" 10*"));
        assert!(text.contains("2025-06-10  a, b  +1 more"));
    }

    #[test]
    fn task_line_shows_completion() {
        let task = Task {
            id: Uuid::nil(),
            title: "Buy milk".to_string(),
            due: None,
            description: None,
            done: true,
        };
        assert!(task_line(&task).starts_with("[x] Buy milk"));
    }

    #[test]
    fn event_line_includes_optional_fields_when_present() {
        let event = Event {
            id: Uuid::nil(),
            title: "Dentist".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            time: Some("09:30".to_string()),
            category: Some("health".to_string()),
            description: None,
        };

        assert_eq!(
            event_line(&event),
            format!("2025-06-03 09:30  Dentist • health  ({})", Uuid::nil())
        );
    }

    #[test]
    fn quiet_month_has_no_busy_section() {
        let ym = YearMonth::new(2025, 2).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let text = month(ym, &build_month_grid(ym, today, &[]));

        assert!(text.ends_with("28\n"));
        assert!(!text.contains("\n\n"));
    }
}
