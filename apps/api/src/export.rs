//! CSV export of joke records.

use chrono::{DateTime, Utc};

use crate::models::JokeRecord;

pub const CSV_HEADER: [&str; 7] = [
    "id",
    "created_at",
    "template_key",
    "template_name",
    "user_input",
    "add_on",
    "generated_joke",
];

/// Renders `records` as CSV, one row per record in the given order.
/// Rows end with CRLF; fields are quoted only when needed.
pub fn records_to_csv(records: &[JokeRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().copied());
    for record in records {
        let id = record.id.to_string();
        let created_at = record.created_at_label();
        push_row(
            &mut out,
            [
                id.as_str(),
                created_at.as_str(),
                record.template_key.as_str(),
                record.template_name.as_str(),
                record.user_input.as_str(),
                record.add_on.as_str(),
                record.generated_joke.as_str(),
            ],
        );
    }
    out
}

/// `jokes-YYYYMMDD-HHMMSS.csv` for the given moment.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("jokes-{}.csv", now.format("%Y%m%d-%H%M%S"))
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(id: i64, joke: &str) -> JokeRecord {
        JokeRecord {
            id,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            template_key: "ironie".into(),
            template_name: "Ironie (Irony)".into(),
            user_input: "deploy".into(),
            add_on: String::new(),
            generated_joke: joke.into(),
        }
    }

    #[test]
    fn test_header_only_for_no_records() {
        assert_eq!(
            records_to_csv(&[]),
            "id,created_at,template_key,template_name,user_input,add_on,generated_joke\r\n"
        );
    }

    #[test]
    fn test_rows_follow_given_order() {
        let csv = records_to_csv(&[record(2, "second"), record(1, "first")]);
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(
            lines[1],
            "2,2024-01-02T03:04:05+00:00,ironie,Ironie (Irony),deploy,,second"
        );
        assert!(lines[2].starts_with("1,"));
    }

    #[test]
    fn test_fields_with_specials_are_quoted() {
        let csv = records_to_csv(&[record(1, "He said \"great\", then\nleft")]);
        assert!(csv.contains(",\"He said \"\"great\"\", then\nleft\"\r\n"), "{csv}");
    }

    #[test]
    fn test_export_filename() {
        let now = Utc.with_ymd_and_hms(2024, 11, 5, 13, 7, 9).unwrap();
        assert_eq!(export_filename(now), "jokes-20241105-130709.csv");
    }
}
