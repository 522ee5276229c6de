// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

pub(crate) use clap::Parser;
use services::frr::ZEBRA;
use std::path::{Path, PathBuf};
use topology::NodeId;

/// Node directory used to expand `{{file}}` placeholders when none is given
pub(crate) const DEFAULT_NODE_DIR: &str = "/tmp/frrsvc";

#[derive(Debug, Parser)]
#[command(name = "frrgen")]
#[command(version = "0.1")]
#[command(about = "Generate the FRR configuration files and lifecycle commands of an emulated node", long_about = None)]
pub(crate) struct CmdArgs {
    #[arg(
        long,
        value_name = "PATH",
        required_unless_present_any = ["show_tracing_targets", "tracing_config_generate"],
        help = "YAML scenario with an optional 'options' section and a 'topology' section"
    )]
    scenario: Option<PathBuf>,

    #[arg(
        long,
        value_name = "ID",
        required_unless_present_any = ["show_tracing_targets", "tracing_config_generate"],
        help = "Id of the node to generate files for"
    )]
    node: Option<u32>,

    #[arg(long, value_name = "NAME", default_value = ZEBRA, help = "Service owning the files to generate")]
    service: String,

    #[arg(
        long,
        value_name = "FILENAME",
        help = "Only generate this file. All the files owned by the service are generated otherwise"
    )]
    file: Option<String>,

    #[arg(long, default_value_t = false, help = "Print the startup, validate and shutdown commands of the node")]
    plan: bool,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_NODE_DIR,
        help = "Directory of the node, to which relative file names in commands are resolved"
    )]
    node_dir: PathBuf,

    #[arg(
        long,
        default_value_t = false,
        help = "Show configurable tracing targets and exit"
    )]
    show_tracing_targets: bool,

    #[arg(long, help = "generate tracing configuration as a string and exit")]
    tracing_config_generate: bool,

    #[arg(
        long,
        value_name = "tracing configuration",
        help = "Tracing config string as comma-separated sequence of tag=level, with level one in [off,error,warn,info,debug,trace].
Passing default=level sets the default log-level.
Passing all=level allows setting the log-level of all targets to level.
E.g. default=error,frrsvc=debug"
    )]
    tracing: Option<String>,
}

impl CmdArgs {
    pub fn scenario(&self) -> Option<&Path> {
        self.scenario.as_deref()
    }
    pub fn node(&self) -> Option<NodeId> {
        self.node.map(NodeId::new)
    }
    pub fn service(&self) -> &str {
        &self.service
    }
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
    pub fn plan(&self) -> bool {
        self.plan
    }
    pub fn node_dir(&self) -> &Path {
        &self.node_dir
    }
    pub fn show_tracing_targets(&self) -> bool {
        self.show_tracing_targets
    }
    pub fn tracing_config_generate(&self) -> bool {
        self.tracing_config_generate
    }
    pub fn tracing(&self) -> Option<&str> {
        self.tracing.as_deref()
    }
}
