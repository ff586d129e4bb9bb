// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Input and output streams handed to command handlers.

use std::io::{BufRead, Write};

/// The streams a command reads from and writes to. Commands never touch
/// stdin/stdout/stderr directly, so tests can run them against in-memory
/// buffers.
pub struct IoStreams<'a> {
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}
