use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cell of an input table. Spreadsheet backends deliver typed dates,
/// the csv backend delivers everything as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Empty,
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Short type label for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "integer",
            Value::Float(_) => "number",
            Value::Date(_) => "date",
            Value::DateTime(_) => "date-time",
            Value::Empty => "empty",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Date(d) => write!(f, "{}", d),
            Value::DateTime(dt) => write!(f, "{}", dt),
            Value::Empty => Ok(()),
        }
    }
}

/// One data row of an input file. `row` is the 1-based spreadsheet row
/// number (the header is row 1) so errors can point at the source.
#[derive(Debug, Clone)]
pub struct Record {
    pub row: u32,
    pub fields: HashMap<String, Value>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }
}

/// Correlation key between the assigned and closed tables. Date-times are
/// truncated to their calendar date before a key is built; a key never
/// carries a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub retriever: String,
    pub date: NaiveDate,
}

impl Key {
    pub fn new(retriever: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            retriever: retriever.into(),
            date,
        }
    }
}

/// Count per unique key, iterated in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct AggregatedCounts {
    entries: Vec<(Key, u64)>,
    index: HashMap<Key, usize>,
}

impl AggregatedCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: Key) {
        match self.index.get(&key) {
            Some(&at) => self.entries[at].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`, 0 if the key was never seen.
    pub fn count(&self, key: &Key) -> u64 {
        self.index.get(key).map_or(0, |&at| self.entries[at].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, u64)> {
        self.entries.iter().map(|(key, n)| (key, *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the consolidated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub name: String,
    pub assigned: u64,
    pub closed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_counts_preserve_first_occurrence_order() {
        let mut counts = AggregatedCounts::new();
        counts.increment(Key::new("Bob", day(6)));
        counts.increment(Key::new("Alice", day(5)));
        counts.increment(Key::new("Bob", day(6)));

        let keys: Vec<&Key> = counts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], &Key::new("Bob", day(6)));
        assert_eq!(keys[1], &Key::new("Alice", day(5)));
        assert_eq!(counts.count(&Key::new("Bob", day(6))), 2);
        assert_eq!(counts.count(&Key::new("Alice", day(5))), 1);
    }

    #[test]
    fn test_counts_unknown_key_is_zero() {
        let counts = AggregatedCounts::new();
        assert_eq!(counts.count(&Key::new("Alice", day(5))), 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_value_emptiness() {
        assert!(Value::Empty.is_empty());
        assert!(Value::Text("   ".to_string()).is_empty());
        assert!(!Value::Text("Alice".to_string()).is_empty());
        assert!(!Value::Int(0).is_empty());
    }
}
