// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

mod args;
mod errors;
mod scenario;

use std::process::ExitCode;
use std::str::FromStr;

use crate::args::{CmdArgs, Parser};
use crate::errors::FrrgenError;
use crate::scenario::Scenario;

use services::{ConfigAssembler, FileLayout, LifecyclePlan, ServiceRegistry};
use tracectl::{TracingConfig, trace_target};
use tracing::{error, info, warn};

trace_target!("frrgen", LevelFilter::INFO, &["frrsvc"]);

/// The files of the selected service and node, each preceded by a header line,
/// then the lifecycle plan if asked for
fn render(
    args: &CmdArgs,
    scenario: &Scenario,
    registry: &ServiceRegistry,
) -> Result<String, FrrgenError> {
    let node_id = args.node().ok_or(FrrgenError::MissingArgument("node"))?;
    let node = scenario.topology.node(node_id)?;
    let assembler = ConfigAssembler::new(registry, &scenario.options);

    let files = match args.file() {
        Some(filename) => vec![(
            filename.to_owned(),
            assembler.generate(&scenario.topology, node, args.service(), filename)?,
        )],
        None => assembler.generate_all(&scenario.topology, node, args.service())?,
    };
    for service in registry.resolve(node)?.iter().filter(|s| s.custom_needed) {
        warn!(
            "Config of {} on node {} is a stub that needs to be completed",
            service.name, node.name
        );
    }

    let mut output = String::new();
    for (filename, text) in &files {
        output += &format!("==> {filename} <==\n");
        output += text;
    }
    if args.plan() {
        let layout = FileLayout::new(args.node_dir());
        let plan = LifecyclePlan::new(registry, node, &layout)?;
        output += "==> lifecycle <==\n";
        output += &plan.to_string();
    }
    info!(
        "Generated {} file(s) of {} for node {}",
        files.len(),
        args.service(),
        node.name
    );
    Ok(output)
}

fn run(args: &CmdArgs) -> Result<String, FrrgenError> {
    let tracing = args.tracing().map(TracingConfig::from_str).transpose()?;
    let targets = tracectl::init(tracing.as_ref())?;
    if args.show_tracing_targets() {
        return Ok(targets.to_string());
    }
    if args.tracing_config_generate() {
        return Ok(format!("{}\n", targets.as_config_string()));
    }

    let path = args
        .scenario()
        .ok_or(FrrgenError::MissingArgument("scenario"))?;
    let scenario = Scenario::load(path)?;
    let registry = ServiceRegistry::frr()?;
    render(args, &scenario, &registry)
}

fn main() -> ExitCode {
    let args = CmdArgs::parse();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("frrgen: {e}");
            ExitCode::FAILURE
        }
    }
}
