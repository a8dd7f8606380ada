// Copyright 2024 OKX Group
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Print a CUDA device's compute capability as `<major>.<minor>`.
#[derive(Debug, Parser)]
#[command(name = "cudacap", version)]
struct Cli {
    /// Device ordinal to query.
    #[arg(default_value_t = 0)]
    device: u32,

    /// List every visible device instead of printing one capability.
    #[arg(short, long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Logging goes to stderr so stdout carries only the result for
    // shell capture.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("CUDACAP_LOG")
                .unwrap_or_else(|_| "cudacap=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if cli.list {
        for summary in cudacap::list_devices()? {
            println!("{}", summary);
        }
        return Ok(());
    }

    println!("{}", cudacap::compute_capability(cli.device)?);
    Ok(())
}
