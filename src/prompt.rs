// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Interactive confirmation for destructive commands.

use crate::error::Result;
use crate::streams::IoStreams;
use std::io::{BufRead, Write};

/// Ask the user to confirm deletion of the named resource. Returns true only
/// on an affirmative answer (`y` or `yes`, case-insensitive). A closed input
/// stream counts as a refusal.
pub fn confirm_deletion(kind: &str, name: &str, streams: &mut IoStreams<'_>) -> Result<bool> {
    write!(
        streams.out,
        "Are you sure you want to delete {} \"{}\" (y/n): ",
        kind, name
    )?;
    streams.out.flush()?;

    let mut answer = String::new();
    if streams.input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn confirm_with_input(input: &str) -> (bool, String) {
        let mut input = Cursor::new(input.to_string());
        let mut out = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let mut streams = IoStreams {
            input: &mut input,
            out: &mut out,
            err: &mut err,
        };

        let confirmed = confirm_deletion("clustertask", "tomatoes", &mut streams).unwrap();
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_confirm_with_y() {
        let (confirmed, _) = confirm_with_input("y\n");
        assert!(confirmed);
    }

    #[test]
    fn test_confirm_with_yes_any_case() {
        assert!(confirm_with_input("yes\n").0);
        assert!(confirm_with_input("YES\n").0);
        assert!(confirm_with_input("Y\n").0);
    }

    #[test]
    fn test_confirm_trims_whitespace() {
        assert!(confirm_with_input("  y  \n").0);
    }

    #[test]
    fn test_refuse_with_n() {
        assert!(!confirm_with_input("n\n").0);
    }

    #[test]
    fn test_refuse_with_anything_else() {
        assert!(!confirm_with_input("sure\n").0);
        assert!(!confirm_with_input("\n").0);
    }

    #[test]
    fn test_empty_stream_refuses_without_blocking() {
        assert!(!confirm_with_input("").0);
    }

    #[test]
    fn test_prompt_text() {
        let (_, out) = confirm_with_input("n\n");
        assert_eq!(
            out,
            "Are you sure you want to delete clustertask \"tomatoes\" (y/n): "
        );
    }
}
