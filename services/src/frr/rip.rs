// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! RIP and RIPng fragments: redistribute everything, on every network

use crate::builder::{ConfigBuilder, MARKER};
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};

pub struct Rip;
pub struct Ripng;

impl FragmentContributor for Rip {
    fn node_fragment(&self, _ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += "router rip";
        config += "  redistribute static";
        config += "  redistribute connected";
        config += "  redistribute ospf";
        config += "  network 0.0.0.0/0";
        config += MARKER;
        Ok(config)
    }
}

impl FragmentContributor for Ripng {
    fn node_fragment(&self, _ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += "router ripng";
        config += "  redistribute static";
        config += "  redistribute connected";
        config += "  redistribute ospf6";
        config += "  network ::/0";
        config += MARKER;
        Ok(config)
    }
}
