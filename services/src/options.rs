// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Session options that affect the generated files

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Directories searched for FRR daemons, as a quoted shell word list
pub const DEFAULT_FRR_SBIN_SEARCH: &str = "\"/usr/local/sbin /usr/sbin /usr/lib/frr\"";
/// Directories searched for vtysh, as a quoted shell word list
pub const DEFAULT_FRR_BIN_SEARCH: &str = "\"/usr/local/bin /usr/bin /usr/lib/frr\"";
/// Runtime state directory of FRR daemons
pub const DEFAULT_FRR_STATE_DIR: &str = "/var/run/frr";

/// Options for FRR file generation. N.B. we derive a builder type `FrrOptionsBuilder`
/// and provide defaults for each field. The same defaults apply when the
/// options are read from a scenario file with fields left out.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrrOptions {
    #[builder(setter(into), default = DEFAULT_FRR_SBIN_SEARCH.to_string())]
    pub frr_sbin_search: String,

    #[builder(setter(into), default = DEFAULT_FRR_BIN_SEARCH.to_string())]
    pub frr_bin_search: String,

    #[builder(setter(into), default = DEFAULT_FRR_STATE_DIR.to_string())]
    pub frr_state_dir: String,

    /// Declare point-to-point links as such to OSPF daemons
    #[builder(default = false)]
    pub ospf_ptp_hint: bool,
}

impl Default for FrrOptions {
    fn default() -> Self {
        Self {
            frr_sbin_search: DEFAULT_FRR_SBIN_SEARCH.to_string(),
            frr_bin_search: DEFAULT_FRR_BIN_SEARCH.to_string(),
            frr_state_dir: DEFAULT_FRR_STATE_DIR.to_string(),
            ospf_ptp_hint: false,
        }
    }
}

impl Display for FrrOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        writeln!(f, "FRR options")?;
        writeln!(f, "  sbin search : {}", self.frr_sbin_search)?;
        writeln!(f, "  bin search  : {}", self.frr_bin_search)?;
        writeln!(f, "  state dir   : {}", self.frr_state_dir)?;
        writeln!(f, "  ospf p2p    : {}", self.ospf_ptp_hint)
    }
}
