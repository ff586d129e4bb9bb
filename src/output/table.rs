// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Aligned two-column tables and age formatting for list output.

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use std::io::{self, Write};

const COLUMN_PADDING: usize = 3;

/// Write a left-aligned two-column table. The first column is padded to the
/// widest cell plus a fixed gap; the last column carries no trailing padding.
pub fn write_table(out: &mut dyn Write, header: [&str; 2], rows: &[[String; 2]]) -> io::Result<()> {
    let width = rows
        .iter()
        .map(|row| row[0].len())
        .chain(std::iter::once(header[0].len()))
        .max()
        .unwrap_or(0)
        + COLUMN_PADDING;

    writeln!(out, "{:<width$}{}", header[0], header[1])?;
    for row in rows {
        writeln!(out, "{:<width$}{}", row[0], row[1])?;
    }
    Ok(())
}

/// Render the elapsed time since a creation timestamp in the most coarse
/// unit that is non-zero, kubectl style (`30s`, `5m`, `2h`, `3d`).
pub fn format_age(created: Option<&Time>, now: DateTime<Utc>) -> String {
    let Some(Time(created)) = created else {
        return "---".to_string();
    };

    let elapsed = now.signed_duration_since(*created);
    if elapsed.num_seconds() < 0 {
        return "0s".to_string();
    }

    if elapsed.num_days() > 0 {
        format!("{}d", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h", elapsed.num_hours())
    } else if elapsed.num_minutes() > 0 {
        format!("{}m", elapsed.num_minutes())
    } else {
        format!("{}s", elapsed.num_seconds())
    }
}
