// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use kube::Client;
use std::io;

use tknctl::cli::{self, Cli};
use tknctl::streams::IoStreams;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = Client::try_default().await?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let mut streams = IoStreams {
        input: &mut input,
        out: &mut out,
        err: &mut err,
    };

    cli::run(cli, client, &mut streams).await?;
    Ok(())
}
