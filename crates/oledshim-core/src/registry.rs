//! Ordered registry of script-backed feature toggles.

use log::debug;

use crate::action::{ActionMode, ActionRunner, ActionStatus};

/// Optional custom-script hook; its feature entry exists only while
/// this path does.
pub const CUSTOM_SCRIPT: &str = "/online/oled_custom.sh";

const ENABLED_DISABLED_LABELS: &[&str] = &["Disabled", "Enabled"];

/// One configurable device behavior exposed in the menu.
#[derive(Debug)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub script: &'static str,
    pub labels: &'static [&'static str],
}

/// Fixed menu topology. The custom entry must stay last so the
/// one-shot availability probe can drop it from the tail.
const FEATURES: &[FeatureSpec] = &[
    FeatureSpec {
        name: "Network Mode",
        script: "/app/bin/oled_hijack/radio_mode.sh",
        labels: &[
            "Auto",
            "GSM Only",
            "UMTS Only",
            "LTE Only",
            "LTE -> UMTS",
            "LTE -> GSM",
            "UMTS -> GSM",
        ],
    },
    FeatureSpec {
        name: "TTL Mangling",
        script: "/app/bin/oled_hijack/ttlfix.sh",
        labels: &["Disabled", "TTL=64", "TTL=128", "TTL=65 (WiFi Ext.)"],
    },
    FeatureSpec {
        name: "Anticensorship",
        script: "/app/bin/oled_hijack/anticensorship.sh",
        labels: ENABLED_DISABLED_LABELS,
    },
    FeatureSpec {
        name: "Device IMEI",
        script: "/app/bin/oled_hijack/imei_change.sh",
        labels: &["Stock", "Random Android", "Random WinPhone"],
    },
    FeatureSpec {
        name: "Remote Access",
        script: "/app/bin/oled_hijack/remote_access.sh",
        labels: &[
            "Web & Telnet",
            "Web only",
            "Web, Telnet, ADB",
            "Telnet & ADB only",
            "All disabled",
        ],
    },
    FeatureSpec {
        name: "Work w/o Battery",
        script: "/app/bin/oled_hijack/no_battery.sh",
        labels: ENABLED_DISABLED_LABELS,
    },
    FeatureSpec {
        name: "USB Mode",
        script: "/app/bin/oled_hijack/usb_mode.sh",
        labels: &["Stock", "AT, Network, SD", "AT, Network", "Debug mode"],
    },
    FeatureSpec {
        name: "Custom Script",
        script: CUSTOM_SCRIPT,
        labels: ENABLED_DISABLED_LABELS,
    },
];

/// Registry owning the action runner and the one-shot optional probe.
///
/// Value indices are never cached: every render queries the backing
/// scripts again.
pub struct FeatureRegistry<AR: ActionRunner> {
    runner: AR,
    custom_enabled: Option<bool>,
}

impl<AR: ActionRunner> FeatureRegistry<AR> {
    pub const fn new(runner: AR) -> Self {
        Self {
            runner,
            custom_enabled: None,
        }
    }

    /// Number of active features. First call probes the optional entry.
    pub fn len(&mut self) -> usize {
        if self.custom_enabled() {
            FEATURES.len()
        } else {
            FEATURES.len() - 1
        }
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    pub fn feature(&mut self, index: usize) -> Option<&'static FeatureSpec> {
        if index < self.len() {
            Some(&FEATURES[index])
        } else {
            None
        }
    }

    /// Current value index of the feature, freshly read from its script.
    ///
    /// An interrupted action reads as index 0 for this pass.
    pub fn query(&mut self, index: usize) -> usize {
        let Some(spec) = self.feature(index) else {
            return 0;
        };
        match self.runner.run(spec.script, ActionMode::Get) {
            ActionStatus::Value(value) => value as usize,
            ActionStatus::Interrupted => {
                debug!("get interrupted for {}, defaulting to 0", spec.name);
                0
            }
        }
    }

    /// Rotate the feature to its next value. The script's status is
    /// not consumed.
    pub fn advance(&mut self, index: usize) {
        let Some(spec) = self.feature(index) else {
            debug!("advance beyond registry (index {index}), ignored");
            return;
        };
        let _ = self.runner.run(spec.script, ActionMode::SetNext);
    }

    fn custom_enabled(&mut self) -> bool {
        if let Some(enabled) = self.custom_enabled {
            return enabled;
        }
        let enabled = self.runner.resource_exists(CUSTOM_SCRIPT);
        if !enabled {
            debug!("{CUSTOM_SCRIPT} absent, custom script entry disabled");
        }
        self.custom_enabled = Some(enabled);
        enabled
    }
}
