//! Plain-text table rendering
//!
//! Two table shapes, matching what `kubectl get` and `kubectl describe`
//! print: a column-aligned list table and a two-column key/value details
//! table. Both render into a caller-supplied sink.

use std::io::{self, Write};

/// Column-aligned table with a header row.
#[derive(Debug, Default)]
pub struct ListTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl ListTable {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self, out: &mut dyn Write, no_headers: bool) -> io::Result<()> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        if !no_headers {
            let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
            write_aligned(out, &header, &widths)?;
        }
        for row in &self.rows {
            write_aligned(out, row, &widths)?;
        }
        Ok(())
    }
}

/// Two-column key/value table for describe-style output.
#[derive(Debug, Default)]
pub struct DetailsTable {
    rows: Vec<(&'static str, String)>,
}

impl DetailsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &'static str, value: impl Into<String>) {
        self.rows.push((label, value.into()));
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        // +1 for the colon appended to each label.
        let width = self
            .rows
            .iter()
            .map(|(label, _)| label.len() + 1)
            .max()
            .unwrap_or(0);
        for (label, value) in &self.rows {
            let line = format!("{:<width$}  {}", format!("{label}:"), value);
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

fn write_aligned(out: &mut dyn Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            let width = widths.get(i).copied().unwrap_or(0);
            line.push_str(&format!("{cell:<width$}  "));
        }
    }
    writeln!(out, "{}", line.trim_end())
}
