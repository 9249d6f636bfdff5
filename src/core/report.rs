use crate::core::aggregate::{aggregate, DateRole};
use crate::core::reader::open_records;
use crate::core::writer::writer_for;
use crate::domain::model::{AggregatedCounts, OutputRow};
use crate::domain::ports::ReportConfig;
use crate::utils::error::{ReportError, Result};

/// Joins the two count tables on (retriever, date). The assigned side
/// drives iteration: one output row per assigned key, in order of first
/// occurrence; keys present only in `closed` are dropped. That asymmetry
/// matches the system being replaced and is kept on purpose.
pub fn join(assigned: &AggregatedCounts, closed: &AggregatedCounts) -> Vec<OutputRow> {
    assigned
        .iter()
        .map(|(key, count)| OutputRow {
            name: key.retriever.clone(),
            assigned: count,
            closed: closed.count(key),
        })
        .collect()
}

/// Runs the whole pipeline for one report:
/// validate inputs, aggregate assigned, aggregate closed, join, write.
/// Strictly linear; the first stage error aborts the run. Returns the
/// output path on success. No output file is touched before the write
/// stage, but a failure during the write itself may leave a truncated
/// file behind.
pub fn generate_report<C: ReportConfig>(config: &C) -> Result<String> {
    for path in [config.assigned_path(), config.closed_path()] {
        if !path.is_file() {
            return Err(ReportError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    let assigned = read_counts(config.assigned_path(), DateRole::Assigned)?;
    let closed = read_counts(config.closed_path(), DateRole::Closed)?;

    let rows = join(&assigned, &closed);
    tracing::debug!("joined report has {} rows", rows.len());

    let output = config.output_path();
    writer_for(output)?.write_table(output, &rows)?;
    tracing::info!("successfully created {}", output.display());

    Ok(output.display().to_string())
}

fn read_counts(path: &std::path::Path, role: DateRole) -> Result<AggregatedCounts> {
    let counts = aggregate(open_records(path)?, role)?;
    tracing::info!(
        "successfully read {} file: {} ({} distinct keys)",
        role.label(),
        path.display(),
        counts.len()
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Key;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn counts(keys: &[(&str, u32, u64)]) -> AggregatedCounts {
        let mut counts = AggregatedCounts::new();
        for &(name, date, n) in keys {
            for _ in 0..n {
                counts.increment(Key::new(name, day(date)));
            }
        }
        counts
    }

    #[test]
    fn test_join_emits_one_row_per_assigned_key() {
        let assigned = counts(&[("Alice", 5, 2), ("Bob", 6, 1)]);
        let closed = counts(&[("Alice", 5, 1)]);

        let rows = join(&assigned, &closed);

        assert_eq!(
            rows,
            vec![
                OutputRow {
                    name: "Alice".to_string(),
                    assigned: 2,
                    closed: 1,
                },
                OutputRow {
                    name: "Bob".to_string(),
                    assigned: 1,
                    closed: 0,
                },
            ]
        );
    }

    #[test]
    fn test_join_drops_closed_only_keys() {
        let assigned = counts(&[("Alice", 5, 1)]);
        let closed = counts(&[("Alice", 5, 3), ("Carol", 7, 2)]);

        let rows = join(&assigned, &closed);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].closed, 3);
    }

    #[test]
    fn test_join_row_count_matches_assigned_keys() {
        let assigned = counts(&[("Alice", 5, 1), ("Alice", 6, 4), ("Bob", 5, 2)]);
        let closed = AggregatedCounts::new();

        let rows = join(&assigned, &closed);

        assert_eq!(rows.len(), assigned.len());
        assert!(rows.iter().all(|row| row.closed == 0));
    }

    #[test]
    fn test_join_keeps_assigned_insertion_order() {
        let assigned = counts(&[("Zoe", 9, 1), ("Alice", 5, 1), ("Bob", 6, 1)]);

        let rows = join(&assigned, &AggregatedCounts::new());

        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Alice", "Bob"]);
    }
}
