// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Zebra: the anchor service that owns the unified FRR config and the files
//! used to boot all FRR daemons of a node.

use crate::fragment::FragmentContributor;
use crate::frr::{FRR_BOOT, FRR_CONF, FRR_DAEMONS, FRR_VTYSH};
use crate::options::FrrOptions;

/// Zebra contributes no fragment to the file it owns
pub struct Zebra;
impl FragmentContributor for Zebra {}

/// The files owned by zebra
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZebraFile {
    /// frr.conf, assembled from the fragments of all dependent services
    Integrated,
    BootScript,
    Vtysh,
    Daemons,
}

impl ZebraFile {
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        match filename {
            FRR_CONF => Some(ZebraFile::Integrated),
            FRR_BOOT => Some(ZebraFile::BootScript),
            FRR_VTYSH => Some(ZebraFile::Vtysh),
            FRR_DAEMONS => Some(ZebraFile::Daemons),
            _ => None,
        }
    }
}

/// Shell script that boots zebra, then every daemon with a stanza in frr.conf
#[must_use]
pub fn boot_script(options: &FrrOptions) -> String {
    let mut script = String::with_capacity(BOOT_SCRIPT_BODY.len() + 256);
    script += "#!/bin/sh\n";
    script += "# auto-generated by zebra service\n";
    script += format!("FRR_CONF={FRR_CONF}\n").as_str();
    script += format!("FRR_SBIN_SEARCH={}\n", options.frr_sbin_search).as_str();
    script += format!("FRR_BIN_SEARCH={}\n", options.frr_bin_search).as_str();
    script += format!("FRR_STATE_DIR={}\n", options.frr_state_dir).as_str();
    script += BOOT_SCRIPT_BODY;
    script
}

#[must_use]
pub fn vtysh_conf() -> String {
    "service integrated-vtysh-config\n".to_string()
}

#[must_use]
pub fn daemons() -> String {
    DAEMONS.to_string()
}

const BOOT_SCRIPT_BODY: &str = r#"
searchforprog()
{
    prog=$1
    searchpath=$@
    ret=
    for p in $searchpath; do
        if [ -x $p/$prog ]; then
            ret=$p
            break
        fi
    done
    echo $ret
}

confcheck()
{
    CONF_DIR=`dirname $FRR_CONF`
    # if /etc/frr exists, point /etc/frr/frr.conf -> CONF_DIR
    if [ "$CONF_DIR" != "/etc/frr" ] && [ -d /etc/frr ] && [ ! -e /etc/frr/frr.conf ]; then
        ln -s $CONF_DIR/frr.conf /etc/frr/frr.conf
    fi
    # if /etc/frr exists, point /etc/frr/vtysh.conf -> CONF_DIR
    if [ "$CONF_DIR" != "/etc/frr" ] && [ -d /etc/frr ] && [ ! -e /etc/frr/vtysh.conf ]; then
        ln -s $CONF_DIR/vtysh.conf /etc/frr/vtysh.conf
    fi
}

bootdaemon()
{
    FRR_SBIN_DIR=$(searchforprog $1 $FRR_SBIN_SEARCH)
    if [ "z$FRR_SBIN_DIR" = "z" ]; then
        echo "ERROR: FRR's '$1' daemon not found in search path:"
        echo "  $FRR_SBIN_SEARCH"
        return 1
    fi

    flags=""

    if [ "$1" = "pimd" ] && \
        grep -E -q '^[[:space:]]*router[[:space:]]+pim6[[:space:]]*$' $FRR_CONF; then
        flags="$flags -6"
    fi

    #force FRR to use the generated conf file
    flags="$flags -d -f $FRR_CONF"
    $FRR_SBIN_DIR/$1 $flags

    if [ "$?" != "0" ]; then
        echo "ERROR: FRR's '$1' daemon failed to start!:"
        return 1
    fi
}

bootfrr()
{
    FRR_BIN_DIR=$(searchforprog 'vtysh' $FRR_BIN_SEARCH)
    if [ "z$FRR_BIN_DIR" = "z" ]; then
        echo "ERROR: FRR's 'vtysh' program not found in search path:"
        echo "  $FRR_BIN_SEARCH"
        return 1
    fi

    # fix /var/run/frr permissions
    id -u frr 2>/dev/null >/dev/null
    if [ "$?" = "0" ]; then
        chown frr $FRR_STATE_DIR
    fi

    bootdaemon "zebra"
    for r in rip ripng ospf6 ospf bgp babel; do
        if grep -q "^router \<${r}\>" $FRR_CONF; then
            bootdaemon "${r}d"
        fi
    done

    if grep -E -q '^[[:space:]]*router[[:space:]]+pim6?[[:space:]]*$' $FRR_CONF; then
        bootdaemon "pimd"
    fi

    $FRR_BIN_DIR/vtysh -b
}

if [ "$1" != "zebra" ]; then
    echo "WARNING: '$1': all FRR daemons are launched by the 'zebra' service!"
    exit 1
fi
confcheck
bootfrr
"#;

const DAEMONS: &str = r#"#
# When activation a daemon at the first time, a config file, even if it is
# empty, has to be present *and* be owned by the user and group "frr", else
# the daemon will not be started by /etc/init.d/frr. The permissions should
# be u=rw,g=r,o=.
# When using "vtysh" such a config file is also needed. It should be owned by
# group "frrvty" and set to ug=rw,o= though. Check /etc/pam.d/frr, too.
#
# The watchfrr and zebra daemons are always started.
#
bgpd=yes
ospfd=yes
ospf6d=yes
ripd=yes
ripngd=yes
isisd=yes
pimd=yes
ldpd=yes
nhrpd=yes
eigrpd=yes
babeld=yes
sharpd=yes
pbrd=yes
bfdd=yes
fabricd=yes

#
# If this option is set the /etc/init.d/frr script automatically loads
# the config via "vtysh -b" when the servers are started.
# Check /etc/pam.d/frr if you intend to use "vtysh"!
#
vtysh_enable=yes
zebra_options="  -A 127.0.0.1 -s 90000000"
bgpd_options="   -A 127.0.0.1"
ospfd_options="  -A 127.0.0.1"
ospf6d_options=" -A ::1"
ripd_options="   -A 127.0.0.1"
ripngd_options=" -A ::1"
isisd_options="  -A 127.0.0.1"
pimd_options="   -A 127.0.0.1"
ldpd_options="   -A 127.0.0.1"
nhrpd_options="  -A 127.0.0.1"
eigrpd_options=" -A 127.0.0.1"
babeld_options=" -A 127.0.0.1"
sharpd_options=" -A 127.0.0.1"
pbrd_options="   -A 127.0.0.1"
staticd_options="-A 127.0.0.1"
bfdd_options="   -A 127.0.0.1"
fabricd_options="-A 127.0.0.1"

# The list of daemons to watch is automatically generated by the init script.
#watchfrr_options=""

# for debugging purposes, you can specify a "wrap" command to start instead
# of starting the daemon directly, e.g. to use valgrind on ospfd:
#   ospfd_wrap="/usr/bin/valgrind"
# or you can use "all_wrap" for all daemons, e.g. to use perf record:
#   all_wrap="/usr/bin/perf record --call-graph -"
# the normal daemon command is added to this at the end.
"#;
