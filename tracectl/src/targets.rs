// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Automated, static registry of tracing targets across all linked crates

use crate::LevelFilter;
use linkme::distributed_slice;

pub struct STarget {
    pub(crate) target: &'static str,
    pub(crate) name: &'static str,
    pub(crate) level: LevelFilter,
    pub(crate) tags: &'static [&'static str],
}
impl STarget {
    pub const fn new(
        target: &'static str,
        name: &'static str,
        level: LevelFilter,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            target,
            name,
            level,
            tags,
        }
    }
}

#[distributed_slice]
pub static TRACING_TARGETS: [STarget];

#[macro_export]
macro_rules! trace_target_deps {
    () => {
        use linkme::distributed_slice;
        use $crate::LevelFilter;
        use $crate::targets::{STarget, TRACING_TARGETS};
    };
}

#[macro_export]
/// Macro to declare a tracing target for the calling module, its name, default level and tags
macro_rules! trace_target {
    // NOTE: the const scope lets every invocation import what it needs and
    // name its static TRACE_TGT without clashing with other invocations.
    ($name:expr, $level:expr, $tags:expr) => {
        const _: () = {
            use $crate::trace_target_deps;
            trace_target_deps!();

            #[distributed_slice(TRACING_TARGETS)]
            static TRACE_TGT: STarget = STarget::new(module_path!(), $name, $level, $tags);
        };
    };
}
