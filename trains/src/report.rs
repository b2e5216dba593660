//! Stores data structures related to displaying trains on a terminal.

use rand::Rng;

use std::borrow::Cow;
use std::io::{self, Write};

use crate::train::Train;

/// Shown in place of a missing destination or departure time.
pub const MISSING_TEXT: &str = "None";

/// A missing train number is replaced by a random one in this range.
pub const MISSING_NUM_RANGE: (i64, i64) = (1000, 10000);

/// A table column: its header and its width in characters.
#[derive(Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

pub const COLUMNS: [Column; 3] = [
    Column {
        header: "№ поезда",
        width: 15,
    },
    Column {
        header: "Пункт назначения",
        width: 30,
    },
    Column {
        header: "Время отъезда",
        width: 25,
    },
];

/// A train with every gap filled in, ready to be printed.
///
/// The number is already rendered, since `serde_json::Number` ignores padding when displayed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TableRow<'a> {
    pub num: String,
    pub destination: Cow<'a, str>,
    pub start_time: Cow<'a, str>,
}

impl<'a> TableRow<'a> {
    /// Fills the missing fields of `train`, drawing a stand-in number from `rng` if needed.
    pub fn fill<R: Rng>(train: &'a Train, rng: &mut R) -> Self {
        let text = |field: &'a Option<String>| -> Cow<'a, str> {
            match field {
                Some(s) => Cow::Borrowed(s.as_str()),
                None => Cow::Borrowed(MISSING_TEXT),
            }
        };

        Self {
            num: match train.num {
                Some(ref num) => num.to_string(),
                None => rng
                    .gen_range::<i64, _, _>(MISSING_NUM_RANGE.0, MISSING_NUM_RANGE.1)
                    .to_string(),
            },
            destination: text(&train.destination),
            start_time: text(&train.start_time),
        }
    }
}

/// The `+---+---+---+` line drawn around the table and under the header.
pub fn separator() -> String {
    let mut line = String::from("+");

    for column in COLUMNS.iter() {
        line.push('-');
        line.extend(std::iter::repeat('-').take(column.width));
        line.push_str("-+");
    }

    line
}

fn write_cells(out: &mut dyn Write, cells: [&dyn std::fmt::Display; 3]) -> io::Result<()> {
    write!(out, "|")?;

    for (cell, column) in cells.iter().zip(COLUMNS.iter()) {
        write!(out, " {:^width$} |", cell, width = column.width)?;
    }

    writeln!(out)
}

/// Writes `trains` as a table, in the order they are given.
pub fn display_trains<'a, I>(trains: I, out: &mut dyn Write) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Train>,
{
    let line = separator();
    let mut rng = rand::thread_rng();

    writeln!(out, "{}", line)?;
    write_cells(
        out,
        [&COLUMNS[0].header, &COLUMNS[1].header, &COLUMNS[2].header],
    )?;
    writeln!(out, "{}", line)?;

    for train in trains {
        let row = TableRow::fill(train, &mut rng);
        write_cells(out, [&row.num, &row.destination, &row.start_time])?;
    }

    writeln!(out, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(trains: &[Train]) -> String {
        let mut out = Vec::new();
        display_trains(trains, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn centered(text: &str, width: usize) -> String {
        let pad = width - text.chars().count();
        format!("{}{}{}", " ".repeat(pad / 2), text, " ".repeat(pad - pad / 2))
    }

    #[test]
    fn separator_spans_all_columns() {
        let expected = format!("+-{}-+-{}-+-{}-+", "-".repeat(15), "-".repeat(30), "-".repeat(25));
        assert_eq!(separator(), expected);
    }

    #[test]
    fn empty_table_is_header_only() {
        let output = render(&[]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], separator());
        assert_eq!(lines[2], separator());
        assert_eq!(lines[3], separator());
        assert_eq!(
            lines[1],
            format!(
                "| {} | {} | {} |",
                centered("№ поезда", 15),
                centered("Пункт назначения", 30),
                centered("Время отъезда", 25)
            )
        );
    }

    #[test]
    fn rows_are_centered_and_kept_in_order() {
        let trains = [
            Train::new(7, "Омск".into(), "10:00".into()),
            Train::new(3, "Berlin".into(), "09:00".into()),
        ];
        let output = render(&trains);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[3],
            format!(
                "| {} | {} | {} |",
                centered("7", 15),
                centered("Омск", 30),
                centered("10:00", 25)
            )
        );
        assert!(lines[4].contains("Berlin"));
    }

    #[test]
    fn missing_destination_reads_none() {
        let train = Train {
            num: Some(7.into()),
            destination: None,
            start_time: Some("10:00".into()),
        };
        let output = render(&[train]);

        assert_eq!(
            output.lines().nth(3).unwrap(),
            format!(
                "| {} | {} | {} |",
                centered("7", 15),
                centered("None", 30),
                centered("10:00", 25)
            )
        );
    }

    #[test]
    fn missing_number_is_drawn_from_range() {
        let train = Train::default();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let row = TableRow::fill(&train, &mut rng);

            let num: i64 = row.num.parse().unwrap();
            assert!((1000..10000).contains(&num), "{}", num);
            assert_eq!(row.destination, MISSING_TEXT);
            assert_eq!(row.start_time, MISSING_TEXT);
        }
    }

    #[test]
    fn present_fields_are_borrowed_as_is() {
        let train = Train::new(12, " Paris ".into(), "9:00".into());
        let row = TableRow::fill(&train, &mut rand::thread_rng());

        assert_eq!(
            row,
            TableRow {
                num: "12".into(),
                destination: Cow::Borrowed(" Paris "),
                start_time: Cow::Borrowed("9:00"),
            }
        );
    }
}
