//! Rendering of the selection for `--list`.

use clipsift_models::ClipRecord;

const HEADERS: [&str; 8] = [
    "name", "tag", "nclip", "rating", "duration", "t1", "t2", "link",
];

/// Render records as an aligned text table, header row first.
pub fn render_table(records: &[&ClipRecord]) -> String {
    let rows: Vec<[String; 8]> = records
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.tag.clone(),
                r.nclip.to_string(),
                r.rating.to_string(),
                r.duration.to_string(),
                r.t1.as_str().to_string(),
                r.t2.as_str().to_string(),
                r.link.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().copied(), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 8]) {
    let mut line = String::new();
    for (cell, width) in cells.zip(widths.iter()) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = *width));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render records as a pretty-printed JSON array.
pub fn render_json(records: &[&ClipRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use clipsift_models::Timestamp;

    use super::*;

    fn record(name: &str, tag: &str, nclip: u32, rating: u8) -> ClipRecord {
        ClipRecord {
            name: name.to_string(),
            tag: tag.to_string(),
            nclip,
            rating,
            duration: 20.0,
            t1: Timestamp::from_seconds(60.0),
            t2: Timestamp::from_seconds(80.0),
            link: "https://example.com/v".to_string(),
        }
    }

    #[test]
    fn table_aligns_columns_across_rows() {
        let a = record("Opener", "chat", 3, 7);
        let b = record("Wipe on the last boss", "raid night", 12, 10);
        let records = vec![&a, &b];

        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        let tag_col = lines[0].find("tag").unwrap();
        assert_eq!(lines[1].find("chat"), Some(tag_col));
        assert_eq!(lines[2].find("raid night"), Some(tag_col));
        assert!(lines.iter().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn table_renders_normalized_timestamps() {
        let a = record("Opener", "chat", 1, 5);
        let records = vec![&a];

        let table = render_table(&records);

        assert!(table.contains("01:00"));
        assert!(table.contains("01:20"));
    }

    #[test]
    fn json_is_an_array_of_records() {
        let a = record("Opener", "chat", 3, 7);
        let records = vec![&a];

        let json = render_json(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["name"], "Opener");
        assert_eq!(value[0]["t1"], "01:00");
        assert_eq!(value[0]["rating"], 7);
    }
}
