// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Declarative description of one service

use ordermap::OrderSet;

use crate::frr::ServiceKind;

#[derive(Clone, Debug, Default, PartialEq)]
/// Command templates handed to the process supervisor. A template may refer to
/// a file owned by the service as `{{filename}}`.
pub struct LifecycleCommands {
    pub startup: Vec<String>,
    pub shutdown: Vec<String>,
    pub validate: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
/// A service: its name, which services its config folds into, the files it
/// owns, how it is started and stopped, and which address families its
/// interface fragments are about.
pub struct ServiceDescriptor {
    pub name: String, /* key */
    pub group: String,
    pub dependencies: OrderSet<String>,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
    pub commands: LifecycleCommands,
    pub ipv4_routing: bool,
    pub ipv6_routing: bool,
    pub custom_needed: bool, /* generated config is a stub to be completed */
    pub meta: Option<String>,
    pub kind: ServiceKind,
}

impl ServiceDescriptor {
    pub fn new(name: &str, kind: ServiceKind) -> Self {
        Self {
            name: name.to_owned(),
            group: String::new(),
            dependencies: OrderSet::new(),
            dirs: vec![],
            files: vec![],
            commands: LifecycleCommands::default(),
            ipv4_routing: false,
            ipv6_routing: false,
            custom_needed: false,
            meta: None,
            kind,
        }
    }
    #[must_use]
    pub fn set_group(mut self, group: &str) -> Self {
        self.group = group.to_owned();
        self
    }
    #[must_use]
    pub fn add_dependency(mut self, service: &str) -> Self {
        self.dependencies.insert(service.to_owned());
        self
    }
    #[must_use]
    pub fn add_dir(mut self, dir: &str) -> Self {
        self.dirs.push(dir.to_owned());
        self
    }
    #[must_use]
    pub fn add_file(mut self, filename: &str) -> Self {
        self.files.push(filename.to_owned());
        self
    }
    #[must_use]
    pub fn add_startup(mut self, command: &str) -> Self {
        self.commands.startup.push(command.to_owned());
        self
    }
    #[must_use]
    pub fn add_shutdown(mut self, command: &str) -> Self {
        self.commands.shutdown.push(command.to_owned());
        self
    }
    #[must_use]
    pub fn add_validate(mut self, command: &str) -> Self {
        self.commands.validate.push(command.to_owned());
        self
    }
    #[must_use]
    pub fn set_ipv4_routing(mut self, value: bool) -> Self {
        self.ipv4_routing = value;
        self
    }
    #[must_use]
    pub fn set_ipv6_routing(mut self, value: bool) -> Self {
        self.ipv6_routing = value;
        self
    }
    #[must_use]
    pub fn set_custom_needed(mut self, value: bool) -> Self {
        self.custom_needed = value;
        self
    }
    #[must_use]
    pub fn set_meta(mut self, meta: &str) -> Self {
        self.meta = Some(meta.to_owned());
        self
    }
    pub fn owns(&self, filename: &str) -> bool {
        self.files.iter().any(|f| f == filename)
    }
    pub fn depends_on(&self, service: &str) -> bool {
        self.dependencies.contains(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let svc = ServiceDescriptor::new("MyDaemon", ServiceKind::Rip)
            .set_group("Test")
            .add_dependency("FRRzebra")
            .add_dependency("FRRzebra")
            .add_dependency("Other")
            .add_file("my.conf")
            .add_startup("sh {{my.conf}}")
            .set_ipv6_routing(true);

        let deps: Vec<_> = svc.dependencies.iter().map(String::as_str).collect();
        assert_eq!(deps, vec!["FRRzebra", "Other"]);
        assert!(svc.depends_on("Other"));
        assert!(!svc.depends_on("MyDaemon"));
        assert!(svc.owns("my.conf"));
        assert!(!svc.owns("other.conf"));
        assert!(svc.ipv6_routing && !svc.ipv4_routing);
        assert!(!svc.custom_needed);
        assert_eq!(svc.commands.startup, vec!["sh {{my.conf}}"]);
    }
}
