use api::Record;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Numeric `(x, y)` pairs; records missing either coordinate are skipped.
pub fn scatter_points<'a, I>(records: I, x_field: &str, y_field: &str) -> Vec<ScatterPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            Some(ScatterPoint {
                x: record.number(x_field)?,
                y: record.number(y_field)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::fields;

    #[test]
    fn incomplete_rows_are_skipped() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[
                {"SepalLengthCm": 5.1, "SepalWidthCm": 3.5},
                {"SepalLengthCm": 4.9},
                {"SepalLengthCm": "6.3", "SepalWidthCm": 3.3}
            ]"#,
        )
        .unwrap();

        let points = scatter_points(&records, fields::SEPAL_LENGTH, fields::SEPAL_WIDTH);
        assert_eq!(
            points,
            vec![ScatterPoint { x: 5.1, y: 3.5 }, ScatterPoint { x: 6.3, y: 3.3 }]
        );
    }
}
