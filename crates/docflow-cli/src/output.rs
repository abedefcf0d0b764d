use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render rows as space-aligned columns under a dashed header rule.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let widths = column_widths(headers, &rows);

    println!("{}", align_row(headers, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("  "));
    for row in &rows {
        println!("{}", align_row(row, &widths));
    }
}

/// Each column is as wide as its widest cell, header included.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|cell| cell.len())
                .chain([h.len()])
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn align_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell.as_ref(), width = *w))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_cover_header_and_widest_cell() {
        let rows = vec![
            vec!["2a".to_string(), "Technical Design Review".to_string()],
            vec!["5b".to_string(), "User Docs".to_string()],
        ];
        assert_eq!(column_widths(&["ID", "STAGE"], &rows), vec![2, 23]);
        // header wins when cells are narrower
        assert_eq!(column_widths(&["IDENTIFIER", "S"], &rows), vec![10, 23]);
    }

    #[test]
    fn rows_align_on_column_boundaries() {
        let widths = vec![4, 6];
        assert_eq!(
            align_row(&["1a", "Alice"], &widths),
            "1a    Alice "
        );
    }
}
