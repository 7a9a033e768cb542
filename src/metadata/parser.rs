// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented parser for the metadata format.
//!
//! # Grammar
//!
//! ```text
//! file    := line*
//! line    := blank | comment | scalar | open | close
//! comment := '#' .*
//! scalar  := key ':' value      value := '"' escaped '"' | bare-token
//! open    := key '{'
//! close   := '}'
//! ```
//!
//! Single pass, no backtracking, no recovery: the first malformed line
//! fails the file. Only `axes { }` blocks are interpreted; every other
//! block is skipped with brace-depth tracking so nested unknown blocks
//! cannot desynchronize the parser.

use crate::error::MetadataError;

use super::{Axis, FamilyMetadata};

/// Parser state. `SkipBlock` counts nested braces inside unknown blocks.
enum State {
    TopLevel,
    InAxes(AxisFields),
    SkipBlock { depth: usize, opened_at: usize },
}

/// Accumulator for the fields of one `axes { }` block.
#[derive(Default)]
struct AxisFields {
    opened_at: usize,
    tag: Option<String>,
    min_value: Option<f64>,
    max_value: Option<f64>,
}

impl AxisFields {
    fn finish(self, line: usize) -> Result<Axis, MetadataError> {
        let missing = |field: &str| MetadataError::MissingField {
            block: "axes".to_string(),
            field: field.to_string(),
            line,
        };
        Ok(Axis {
            tag: self.tag.ok_or_else(|| missing("tag"))?,
            min_value: self.min_value.ok_or_else(|| missing("min_value"))?,
            max_value: self.max_value.ok_or_else(|| missing("max_value"))?,
        })
    }
}

/// Parse a metadata file.
///
/// # Errors
///
/// Returns a [`MetadataError`] carrying the 1-based line number of the
/// first malformed line, unterminated block, or invalid axis field.
pub fn parse_metadata(input: &str) -> Result<FamilyMetadata, MetadataError> {
    let mut meta = FamilyMetadata::default();
    let mut state = State::TopLevel;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        state = match state {
            State::TopLevel => top_level_line(&mut meta, line, line_no)?,
            State::InAxes(fields) => axes_line(&mut meta, fields, line, line_no)?,
            State::SkipBlock { depth, opened_at } => {
                skip_block_line(line, depth, opened_at, line_no)?
            }
        };
    }

    match state {
        State::TopLevel => Ok(meta),
        State::InAxes(fields) => Err(MetadataError::UnterminatedBlock {
            opened_at: fields.opened_at,
        }),
        State::SkipBlock { opened_at, .. } => Err(MetadataError::UnterminatedBlock { opened_at }),
    }
}

fn top_level_line(
    meta: &mut FamilyMetadata,
    line: &str,
    line_no: usize,
) -> Result<State, MetadataError> {
    if line == "}" {
        return Err(MetadataError::UnexpectedClose { line: line_no });
    }

    if let Some(key) = block_open(line) {
        return Ok(if key == "axes" {
            State::InAxes(AxisFields {
                opened_at: line_no,
                ..AxisFields::default()
            })
        } else {
            State::SkipBlock {
                depth: 1,
                opened_at: line_no,
            }
        });
    }

    let (key, value) = scalar(line, line_no)?;
    match key {
        "name" => meta.name = Some(value),
        "designer" => meta.designer = Some(value),
        "license" => meta.license = Some(value),
        "category" => meta.category = Some(value),
        "date_added" => meta.date_added = Some(value),
        "subsets" => meta.subsets.push(value),
        // Unknown scalar keys are ignored, the schema grows over time
        _ => {}
    }
    Ok(State::TopLevel)
}

fn axes_line(
    meta: &mut FamilyMetadata,
    mut fields: AxisFields,
    line: &str,
    line_no: usize,
) -> Result<State, MetadataError> {
    if line == "}" {
        meta.axes.push(fields.finish(line_no)?);
        return Ok(State::TopLevel);
    }

    if block_open(line).is_some() {
        return Err(MetadataError::Syntax {
            line: line_no,
            message: "nested block inside axes".to_string(),
        });
    }

    let (key, value) = scalar(line, line_no)?;
    match key {
        "tag" => fields.tag = Some(value),
        "min_value" => fields.min_value = Some(number(key, &value, line_no)?),
        "max_value" => fields.max_value = Some(number(key, &value, line_no)?),
        _ => {}
    }
    Ok(State::InAxes(fields))
}

fn skip_block_line(
    line: &str,
    depth: usize,
    opened_at: usize,
    line_no: usize,
) -> Result<State, MetadataError> {
    if line == "}" {
        return Ok(if depth == 1 {
            State::TopLevel
        } else {
            State::SkipBlock {
                depth: depth - 1,
                opened_at,
            }
        });
    }
    if block_open(line).is_some() {
        return Ok(State::SkipBlock {
            depth: depth + 1,
            opened_at,
        });
    }
    // Scalars inside skipped blocks still have to be well-formed lines
    scalar(line, line_no)?;
    Ok(State::SkipBlock { depth, opened_at })
}

/// `key {` lines; returns the key.
fn block_open(line: &str) -> Option<&str> {
    let key = line.strip_suffix('{')?.trim_end();
    (!key.is_empty() && !key.contains(':')).then_some(key)
}

/// Split a `key: value` line and decode the value.
fn scalar<'a>(line: &'a str, line_no: usize) -> Result<(&'a str, String), MetadataError> {
    let Some((key, rest)) = line.split_once(':') else {
        return Err(MetadataError::Syntax {
            line: line_no,
            message: format!("expected 'key: value', got '{line}'"),
        });
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(MetadataError::Syntax {
            line: line_no,
            message: "empty key".to_string(),
        });
    }
    let value = decode_value(rest.trim(), line_no)?;
    Ok((key, value))
}

/// Decode a quoted string (with `\"` and `\\` escapes) or a bare token.
fn decode_value(raw: &str, line_no: usize) -> Result<String, MetadataError> {
    if !raw.starts_with('"') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw[1..].chars();
    loop {
        match chars.next() {
            Some('"') => {
                let rest = chars.as_str().trim();
                if !rest.is_empty() {
                    return Err(MetadataError::Syntax {
                        line: line_no,
                        message: format!("trailing characters after string: '{rest}'"),
                    });
                }
                return Ok(out);
            }
            Some('\\') => match chars.next() {
                Some(c @ ('"' | '\\')) => out.push(c),
                Some(c) => {
                    return Err(MetadataError::Syntax {
                        line: line_no,
                        message: format!("unknown escape '\\{c}'"),
                    });
                }
                None => {
                    return Err(MetadataError::Syntax {
                        line: line_no,
                        message: "unterminated escape".to_string(),
                    });
                }
            },
            Some(c) => out.push(c),
            None => {
                return Err(MetadataError::Syntax {
                    line: line_no,
                    message: "unterminated string".to_string(),
                });
            }
        }
    }
}

fn number(key: &str, value: &str, line_no: usize) -> Result<f64, MetadataError> {
    value.parse().map_err(|_| MetadataError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
        line: line_no,
    })
}
