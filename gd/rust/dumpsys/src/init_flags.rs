//! Init flag snapshot for the dumpsys report

use crate::record::{DumpBuffer, RecordBuilder, RecordOffset};
use bt_common::init_flags;

/// Read-only source of the init flag values surfaced in the snapshot
///
/// One accessor per tracked flag, mirroring the registry's getters, so the
/// snapshot can be built from the process-wide registry or a test substitute.
pub trait FlagValues {
    fn btaa_hci_is_enabled(&self) -> bool;
    fn btm_dm_flush_discovery_queue_on_search_cancel_is_enabled(&self) -> bool;
    fn gatt_robust_caching_client_is_enabled(&self) -> bool;
    fn gatt_robust_caching_server_is_enabled(&self) -> bool;
    fn gd_core_is_enabled(&self) -> bool;
    fn gd_l2cap_is_enabled(&self) -> bool;
    fn gd_link_policy_is_enabled(&self) -> bool;
    fn gd_rust_is_enabled(&self) -> bool;
    fn gd_security_is_enabled(&self) -> bool;
    fn get_hci_adapter(&self) -> i32;
    fn irk_rotation_is_enabled(&self) -> bool;
    fn logging_debug_enabled_for_all_is_enabled(&self) -> bool;
    fn pass_phy_update_callback_is_enabled(&self) -> bool;
    fn sdp_serialization_is_enabled(&self) -> bool;
    fn sdp_skip_rnr_if_known_is_enabled(&self) -> bool;
}

/// Flag values read live from the process-wide registry
pub struct RegistryFlagValues;

impl FlagValues for RegistryFlagValues {
    fn btaa_hci_is_enabled(&self) -> bool {
        init_flags::btaa_hci_is_enabled()
    }

    fn btm_dm_flush_discovery_queue_on_search_cancel_is_enabled(&self) -> bool {
        init_flags::btm_dm_flush_discovery_queue_on_search_cancel_is_enabled()
    }

    fn gatt_robust_caching_client_is_enabled(&self) -> bool {
        init_flags::gatt_robust_caching_client_is_enabled()
    }

    fn gatt_robust_caching_server_is_enabled(&self) -> bool {
        init_flags::gatt_robust_caching_server_is_enabled()
    }

    fn gd_core_is_enabled(&self) -> bool {
        init_flags::gd_core_is_enabled()
    }

    fn gd_l2cap_is_enabled(&self) -> bool {
        init_flags::gd_l2cap_is_enabled()
    }

    fn gd_link_policy_is_enabled(&self) -> bool {
        init_flags::gd_link_policy_is_enabled()
    }

    fn gd_rust_is_enabled(&self) -> bool {
        init_flags::gd_rust_is_enabled()
    }

    fn gd_security_is_enabled(&self) -> bool {
        init_flags::gd_security_is_enabled()
    }

    fn get_hci_adapter(&self) -> i32 {
        init_flags::get_hci_adapter()
    }

    fn irk_rotation_is_enabled(&self) -> bool {
        init_flags::irk_rotation_is_enabled()
    }

    fn logging_debug_enabled_for_all_is_enabled(&self) -> bool {
        init_flags::logging_debug_enabled_for_all_is_enabled()
    }

    fn pass_phy_update_callback_is_enabled(&self) -> bool {
        init_flags::pass_phy_update_callback_is_enabled()
    }

    fn sdp_serialization_is_enabled(&self) -> bool {
        init_flags::sdp_serialization_is_enabled()
    }

    fn sdp_skip_rnr_if_known_is_enabled(&self) -> bool {
        init_flags::sdp_skip_rnr_if_known_is_enabled()
    }
}

/// Writes one init flag record into the buffer and returns its handle
///
/// The field order is a compatibility contract with the downstream consumer
/// of the report and must not change.
pub fn dump(buffer: &mut DumpBuffer, flags: &impl FlagValues) -> RecordOffset {
    let title = buffer.intern("----- Init Flags -----");
    let mut builder = RecordBuilder::new(buffer, "InitFlagsData");
    builder.add_string("title", title);
    builder.add_bool("gd_advertising_enabled", true);
    builder.add_bool("gd_scanning_enabled", true);
    builder.add_bool("gd_acl_enabled", true);
    builder.add_bool("gd_hci_enabled", true);
    builder.add_bool("gd_controller_enabled", true);
    builder.add_bool("btaa_hci_is_enabled", flags.btaa_hci_is_enabled());
    builder.add_bool(
        "btm_dm_flush_discovery_queue_on_search_cancel_is_enabled",
        flags.btm_dm_flush_discovery_queue_on_search_cancel_is_enabled(),
    );
    builder.add_bool(
        "gatt_robust_caching_client_is_enabled",
        flags.gatt_robust_caching_client_is_enabled(),
    );
    builder.add_bool(
        "gatt_robust_caching_server_is_enabled",
        flags.gatt_robust_caching_server_is_enabled(),
    );
    builder.add_bool("gd_core_is_enabled", flags.gd_core_is_enabled());
    builder.add_bool("gd_l2cap_is_enabled", flags.gd_l2cap_is_enabled());
    builder.add_bool("gd_link_policy_is_enabled", flags.gd_link_policy_is_enabled());
    builder.add_bool("gd_rust_is_enabled", flags.gd_rust_is_enabled());
    builder.add_bool("gd_security_is_enabled", flags.gd_security_is_enabled());
    builder.add_i32("get_hci_adapter", flags.get_hci_adapter());
    builder.add_bool("irk_rotation_is_enabled", flags.irk_rotation_is_enabled());
    // is_debug_logging_enabled_for_tag -- skipped in dumpsys
    builder.add_bool(
        "logging_debug_enabled_for_all_is_enabled",
        flags.logging_debug_enabled_for_all_is_enabled(),
    );
    builder.add_bool(
        "pass_phy_update_callback_is_enabled",
        flags.pass_phy_update_callback_is_enabled(),
    );
    builder.add_bool("sdp_serialization_is_enabled", flags.sdp_serialization_is_enabled());
    builder.add_bool("sdp_skip_rnr_if_known_is_enabled", flags.sdp_skip_rnr_if_known_is_enabled());
    builder.finish()
}

/// Writes one init flag record using the process-wide registry values
pub fn dump_current(buffer: &mut DumpBuffer) -> RecordOffset {
    dump(buffer, &RegistryFlagValues)
}
