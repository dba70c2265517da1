// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of IPAC tables.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};

use super::{Column, ColumnType, IpacTable, ReadIpacError};

/// The string used for null values when a table doesn't declare its own.
const DEFAULT_NULL: &str = "null";

/// Read the IPAC table at `path`. Columns named in `int64_columns` are parsed
/// as 64-bit integers no matter what type the header declares.
pub fn read_ipac_table<P: AsRef<Path>>(
    path: P,
    int64_columns: &[&str],
) -> Result<IpacTable, ReadIpacError> {
    let path = path.as_ref();
    debug!("Reading IPAC table {}", path.display());
    let f = File::open(path).map_err(|err| ReadIpacError::File {
        path: path.to_path_buf(),
        err,
    })?;
    let table = parse_ipac_table(&mut BufReader::new(f), int64_columns)?;
    debug!(
        "Read {} rows and {} columns from {}",
        table.num_rows(),
        table.num_columns(),
        path.display()
    );
    Ok(table)
}

/// Parse a buffer containing an IPAC table into an [IpacTable].
pub fn parse_ipac_table<T: BufRead>(
    buf: &mut T,
    int64_columns: &[&str],
) -> Result<IpacTable, ReadIpacError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut table = IpacTable::default();
    let mut header_lines: Vec<(u32, String)> = vec![];
    let mut header: Option<Header> = None;
    let mut columns: Vec<Column> = vec![];

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let content = line.trim_end_matches(&['\n', '\r'][..]);

        if content.trim().is_empty() {
            // Blank lines carry nothing.
        } else if let Some(rest) = content.strip_prefix('\\') {
            parse_keyword(rest, &mut table);
        } else if content.starts_with('|') {
            if header.is_some() {
                return Err(ReadIpacError::HeaderAfterData { line_num });
            }
            header_lines.push((line_num, content.to_string()));
        } else {
            if header.is_none() {
                let h = Header::parse(&header_lines, int64_columns)?;
                columns = h.types.iter().map(|&t| Column::new(t)).collect();
                header = Some(h);
            }
            if let Some(h) = header.as_ref() {
                h.parse_data_line(content, line_num, &mut columns)?;
            }
        }

        line.clear();
    }

    // A table may legitimately have no data lines.
    let header = match header {
        Some(h) => h,
        None => {
            let h = Header::parse(&header_lines, int64_columns)?;
            columns = h.types.iter().map(|&t| Column::new(t)).collect();
            h
        }
    };
    table.columns = header.names.into_iter().zip(columns).collect();

    Ok(table)
}

fn parse_keyword(rest: &str, table: &mut IpacTable) {
    match rest.split_once('=') {
        Some((key, value)) if !rest.starts_with(' ') => {
            let value = value.trim().trim_matches(|c: char| c == '"' || c == '\'');
            trace!("IPAC keyword {} = {}", key.trim(), value);
            table
                .keywords
                .insert(key.trim().to_string(), value.to_string());
        }
        _ => table.comments.push(rest.trim().to_string()),
    }
}

/// Split a header line into its cells.
fn header_cells(line: &str) -> Vec<&str> {
    let line = line.trim_end();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Get the text of a data line between byte positions `start` and `end`,
/// clipped to the length of the line.
fn cell(line: &str, start: usize, end: usize, line_num: u32) -> Result<&str, ReadIpacError> {
    let start = start.min(line.len());
    let end = end.min(line.len());
    line.get(start..end)
        .ok_or(ReadIpacError::Misaligned { line_num })
}

struct Header {
    /// The byte positions of the column delimiters in the names line. There is
    /// one more of these than there are columns.
    pipes: Vec<usize>,
    names: Vec<String>,
    types: Vec<ColumnType>,
    nulls: Vec<String>,
}

impl Header {
    fn parse(lines: &[(u32, String)], int64_columns: &[&str]) -> Result<Header, ReadIpacError> {
        let (names_line_num, names_line) = lines.first().ok_or(ReadIpacError::NoHeader)?;
        let names_line_num = *names_line_num;

        let mut pipes: Vec<usize> = names_line
            .char_indices()
            .filter(|&(_, c)| c == '|')
            .map(|(i, _)| i)
            .collect();
        if !names_line.trim_end().ends_with('|') {
            pipes.push(names_line.trim_end().len());
        }

        let mut names: Vec<String> = Vec::with_capacity(pipes.len());
        for (i_col, name) in header_cells(names_line).into_iter().enumerate() {
            if name.is_empty() {
                return Err(ReadIpacError::EmptyColumnName {
                    line_num: names_line_num,
                    column: i_col + 1,
                });
            }
            if names.iter().any(|n| n == name) {
                return Err(ReadIpacError::DuplicateColumn {
                    line_num: names_line_num,
                    column: name.to_string(),
                });
            }
            names.push(name.to_string());
        }

        // Every other header line must agree with the names line.
        for (line_num, line) in lines.iter().skip(1) {
            let got = header_cells(line).len();
            if got != names.len() {
                return Err(ReadIpacError::HeaderColumnMismatch {
                    line_num: *line_num,
                    expected: names.len(),
                    got,
                });
            }
        }

        let (types_line_num, types_line) = lines.get(1).ok_or(ReadIpacError::NoTypes {
            line_num: names_line_num,
        })?;
        let types = header_cells(types_line)
            .into_iter()
            .zip(names.iter())
            .map(|(t, name)| {
                if int64_columns.contains(&name.as_str()) {
                    return Ok(ColumnType::Int);
                }
                ColumnType::from_ipac(t).ok_or_else(|| ReadIpacError::UnknownType {
                    line_num: *types_line_num,
                    column: name.clone(),
                    col_type: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // The third line holds units, which we don't use. The fourth holds the
        // null markers.
        let nulls = match lines.get(3) {
            Some((_, nulls_line)) => header_cells(nulls_line)
                .into_iter()
                .map(|n| {
                    if n.is_empty() {
                        DEFAULT_NULL.to_string()
                    } else {
                        n.to_string()
                    }
                })
                .collect(),
            None => vec![DEFAULT_NULL.to_string(); names.len()],
        };

        Ok(Header {
            pipes,
            names,
            types,
            nulls,
        })
    }

    fn parse_data_line(
        &self,
        line: &str,
        line_num: u32,
        columns: &mut [Column],
    ) -> Result<(), ReadIpacError> {
        let leading = cell(line, 0, self.pipes[0] + 1, line_num)?.trim();
        if !leading.is_empty() {
            return Err(ReadIpacError::DataBeforeFirstColumn {
                line_num,
                data: leading.to_string(),
            });
        }

        let extent = line.trim_end().len();
        for (i_col, column) in columns.iter_mut().enumerate() {
            // Blank values are nulls, but a line that stops before a column
            // starts is missing data.
            if extent <= self.pipes[i_col] {
                return Err(ReadIpacError::MissingData {
                    line_num,
                    column: self.names[i_col].clone(),
                });
            }
            // A value may extend up to and including the position of its
            // closing delimiter.
            let value = cell(line, self.pipes[i_col] + 1, self.pipes[i_col + 1] + 1, line_num)?;
            self.push_value(i_col, value.trim(), column, line_num)?;
        }

        let last = self.pipes[self.pipes.len() - 1];
        let rest = cell(line, last + 1, line.len(), line_num)?.trim();
        if !rest.is_empty() {
            return Err(ReadIpacError::ExtraData {
                line_num,
                data: rest.to_string(),
            });
        }

        Ok(())
    }

    fn push_value(
        &self,
        i_col: usize,
        value: &str,
        column: &mut Column,
        line_num: u32,
    ) -> Result<(), ReadIpacError> {
        let is_null = value.is_empty() || value == self.nulls[i_col];
        let bad_value = |col_type| ReadIpacError::BadValue {
            line_num,
            column: self.names[i_col].clone(),
            col_type,
            value: value.to_string(),
        };

        match column {
            Column::Int(v) => {
                let parsed = if is_null {
                    None
                } else {
                    Some(
                        value
                            .parse::<i64>()
                            .map_err(|_| bad_value(ColumnType::Int))?,
                    )
                };
                v.push(parsed);
            }

            Column::Double(v) => {
                let parsed = if is_null {
                    None
                } else {
                    Some(
                        value
                            .parse::<f64>()
                            .map_err(|_| bad_value(ColumnType::Double))?,
                    )
                };
                v.push(parsed);
            }

            Column::Char(v) => v.push((!is_null).then(|| value.to_string())),
        }

        Ok(())
    }
}
