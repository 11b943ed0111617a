use log::{error, info};
use paste::paste;
use std::collections::HashMap;
use std::sync::Mutex;

/// Explicit per-tag debug logging settings, parsed from the
/// INIT_logging_debug_{enabled,disabled}_for_tags flag values
#[derive(Default, Debug)]
struct ExplicitTagSettings {
    map: HashMap<String, bool>,
}

fn parse_hci_adapter(adapter: &mut i32, value: &str) {
    *adapter = value.parse().unwrap_or(0);
}

fn parse_logging_tag(settings: &mut ExplicitTagSettings, value: &str, enabled: bool) {
    for tag in value.split(',') {
        settings.map.insert(tag.to_string(), enabled);
    }
}

macro_rules! init_flags {
    (
        flags: { $($flag:ident),* },
        extra_fields: { $($efield:ident : $etype:ty),* },
        extra_parsed_flags: { $($pkey:literal => $pfunc:ident($pfield:ident $(, $parg:expr)*)),* },
        dependencies: { $($parent:ident => $child:ident),* }
    ) => {
        #[derive(Default)]
        struct InitFlags {
            $($flag: bool,)*
            $($efield: $etype,)*
        }

        /// Sets all bool flags to true, for testing
        pub fn set_all_for_testing() {
            *FLAGS.lock().unwrap() = InitFlags { $($flag: true,)* ..Default::default() };
        }

        impl InitFlags {
            fn parse(flags: Vec<String>) -> Self {
                $(let mut $flag = false;)*
                $(let mut $efield = <$etype>::default();)*

                for flag in flags {
                    let values: Vec<&str> = flag.split("=").collect();
                    if values.len() != 2 {
                        error!("Bad flag {}, must be in <FLAG>=<VALUE> format", flag);
                        continue;
                    }

                    match values[0] {
                        $(concat!("INIT_", stringify!($flag)) =>
                            $flag = values[1].parse().unwrap_or(false),)*
                        $($pkey => $pfunc(&mut $pfield, values[1] $(, $parg)*),)*
                        _ => {}
                    }
                }

                Self { $($flag,)* $($efield,)* }.reconcile()
            }

            fn reconcile(mut self) -> Self {
                // Loop to ensure dependencies can be specified in any order
                loop {
                    let mut any_change = false;
                    $(if self.$parent && !self.$child {
                        self.$child = true;
                        any_change = true;
                    })*

                    if !any_change {
                        break;
                    }
                }

                self
            }

            fn log(&self) {
                info!(concat!("Flags loaded: ",
                    $(stringify!($flag), "={} ",)*
                    $(stringify!($efield), "={:?} ",)*),
                    $(self.$flag,)*
                    $(self.$efield,)*);
            }
        }

        paste! {
            $(
                #[allow(missing_docs)]
                pub fn [<$flag _is_enabled>]() -> bool {
                    FLAGS.lock().unwrap().$flag
                }
            )*
        }
    };
}

init_flags!(
    flags: {
        btaa_hci,
        btm_dm_flush_discovery_queue_on_search_cancel,
        gatt_robust_caching_client,
        gatt_robust_caching_server,
        gd_core,
        gd_l2cap,
        gd_link_policy,
        gd_rust,
        gd_security,
        irk_rotation,
        logging_debug_enabled_for_all,
        pass_phy_update_callback,
        sdp_serialization,
        sdp_skip_rnr_if_known
    },
    extra_fields: {
        hci_adapter: i32,
        logging_debug_explicit_tag_settings: ExplicitTagSettings
    },
    extra_parsed_flags: {
        "INIT_hci_adapter" => parse_hci_adapter(hci_adapter),
        "INIT_logging_debug_enabled_for_tags" =>
            parse_logging_tag(logging_debug_explicit_tag_settings, true),
        "INIT_logging_debug_disabled_for_tags" =>
            parse_logging_tag(logging_debug_explicit_tag_settings, false)
    },
    dependencies: {
        gd_core => gd_security
    }
);

lazy_static! {
    static ref FLAGS: Mutex<InitFlags> = Mutex::new(InitFlags::default());
}

/// Loads the flag values from the passed-in vector of string values
pub fn load(flags: Vec<String>) {
    crate::init_logging();

    let flags = InitFlags::parse(flags);
    flags.log();
    *FLAGS.lock().unwrap() = flags;
}

/// Returns the index of the HCI adapter in use
pub fn get_hci_adapter() -> i32 {
    FLAGS.lock().unwrap().hci_adapter
}

/// Checks whether debug logging is turned on for a tag, falling back to the
/// logging_debug_enabled_for_all flag when the tag has no explicit setting
pub fn is_debug_logging_enabled_for_tag(tag: &str) -> bool {
    let flags = FLAGS.lock().unwrap();
    flags
        .logging_debug_explicit_tag_settings
        .map
        .get(tag)
        .copied()
        .unwrap_or(flags.logging_debug_enabled_for_all)
}
