// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use clap::Parser;
use payjp_postprocess::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_PACKAGE};
use payjp_postprocess::pipeline::run;
use std::path::PathBuf;

const DESCRIPTION: &str = concat!(
    "Rewrites the generated PAY.JP v2 Go client in place, renaming the",
    " response payload fields and normalizing `Id` suffixes, and generates",
    " the error field mappings used by the hand-written client code."
);

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Cli {
    /// The generated client, rewritten in place.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the error field mappings.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// The Go package for the error field mappings, used only if the
    /// generated client does not declare one.
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Log more details, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    enable_tracing(cli.verbose);

    let config = Config::new(cli.input, cli.output).with_package(cli.package);
    let summary = run(&config)?;

    println!("Successfully post-processed {}", config.input.display());
    println!("Successfully generated {}", config.output.display());
    print!("{summary}");
    Ok(())
}

fn enable_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
