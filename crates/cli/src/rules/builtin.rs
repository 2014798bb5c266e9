// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in area rule table for the Zephyr tree.

use super::Rule;

/// A rule table entry with static storage.
pub struct BuiltinRule {
    pub area: &'static str,
    pub patterns: &'static [&'static str],
    pub labels: &'static [&'static str],
}

impl From<&BuiltinRule> for Rule {
    fn from(rule: &BuiltinRule) -> Self {
        Rule {
            area: rule.area.to_string(),
            patterns: rule.patterns.iter().map(|p| p.to_string()).collect(),
            labels: rule.labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// The built-in rules, in evaluation order.
pub const RULES: &[BuiltinRule] = &[
    BuiltinRule {
        area: "Modem",
        patterns: &["^drivers/modem"],
        labels: &["area: Modem"],
    },
    BuiltinRule {
        area: "PWM",
        patterns: &["^drivers/pwm"],
        labels: &["area: PWM"],
    },
    BuiltinRule {
        area: "C Library",
        patterns: &["^lib/libc"],
        labels: &["area: C Library"],
    },
    BuiltinRule {
        area: "DTS",
        patterns: &["^dts", ".dts"],
        labels: &["area: Device Tree"],
    },
    BuiltinRule {
        area: "Watchdog",
        patterns: &["^drivers/watchdog"],
        labels: &["area: Watchdog"],
    },
    BuiltinRule {
        area: "Sensors",
        patterns: &["^drivers/sensor"],
        labels: &["area: Sensors"],
    },
    BuiltinRule {
        area: "ADC",
        patterns: &["^drivers/adc"],
        labels: &["area: ADC"],
    },
    BuiltinRule {
        area: "Counter",
        patterns: &["^drivers/counter"],
        labels: &["area: Counter"],
    },
    BuiltinRule {
        area: "Timer",
        patterns: &["^drivers/timer"],
        labels: &["area: Timer"],
    },
    BuiltinRule {
        area: "I2S",
        patterns: &["^drivers/i2s"],
        labels: &["area: I2S"],
    },
    BuiltinRule {
        area: "I2C",
        patterns: &["^drivers/i2c"],
        labels: &["area: I2C"],
    },
    BuiltinRule {
        area: "SPI",
        patterns: &["^drivers/spi"],
        labels: &["area: SPI"],
    },
    BuiltinRule {
        area: "Boards",
        patterns: &["^boards/"],
        labels: &["area: Boards"],
    },
    BuiltinRule {
        area: "POSIX",
        patterns: &["^lib/posix/"],
        labels: &["area: POSIX"],
    },
    BuiltinRule {
        area: "Native Port",
        patterns: &["^arch/posix/", "^soc/posix", ".*native_posix.*"],
        labels: &["area: native port"],
    },
    BuiltinRule {
        area: "X86",
        patterns: &["^arch/x86/"],
        labels: &["area: X86"],
    },
    BuiltinRule {
        area: "ARM",
        patterns: &["^arch/arm/"],
        labels: &["area: ARM"],
    },
    BuiltinRule {
        area: "Nios2",
        patterns: &["^arch/nios2/"],
        labels: &["area: NIOS2"],
    },
    BuiltinRule {
        area: "Xtensa",
        patterns: &["^arch/xtensa/"],
        labels: &["area: Xtensa"],
    },
    BuiltinRule {
        area: "RISCv32",
        patterns: &["^arch/riscv32/"],
        labels: &["area: RISCv32"],
    },
    BuiltinRule {
        area: "ARC",
        patterns: &["^arch/arc"],
        labels: &["area: ARC"],
    },
    BuiltinRule {
        area: "Networking",
        patterns: &["^subsys/net", "^samples/net/", "^tests/net/"],
        labels: &["area: Networking"],
    },
    BuiltinRule {
        area: "Logging",
        patterns: &["^subsys/logging"],
        labels: &["area: Logging"],
    },
    BuiltinRule {
        area: "Shell",
        patterns: &["^subsys/shell"],
        labels: &["area: Shell"],
    },
    BuiltinRule {
        area: "Console",
        patterns: &["^subsys/console"],
        labels: &["area: Console"],
    },
    BuiltinRule {
        area: "Testsuite",
        patterns: &["^subsys/testsuite"],
        labels: &["area: Testing Suite"],
    },
    BuiltinRule {
        area: "Settings",
        patterns: &["^subsys/settings"],
        labels: &["area: Settings"],
    },
    BuiltinRule {
        area: "File System",
        patterns: &["^subsys/fs"],
        labels: &["area: File System"],
    },
    BuiltinRule {
        area: "Storage",
        patterns: &["^subsys/storage"],
        labels: &["area: Storage"],
    },
    BuiltinRule {
        area: "Bluetooth",
        patterns: &["^subsys/bluetooth", ".*bluetooth.*"],
        labels: &["area: Bluetooth"],
    },
    BuiltinRule {
        area: "Bluetooth Mesh",
        patterns: &["^subsys/bluetooth/mesh"],
        labels: &["area: Bluetooth Mesh"],
    },
    BuiltinRule {
        area: "API",
        patterns: &["^include/"],
        labels: &["area: API"],
    },
    BuiltinRule {
        area: "Samples",
        patterns: &["^samples/"],
        labels: &["area: Samples"],
    },
    BuiltinRule {
        area: "Tests",
        patterns: &["^tests/"],
        labels: &["area: Tests"],
    },
    BuiltinRule {
        area: "Kernel",
        patterns: &["^kernel/", "^tests/kernel/"],
        labels: &["area: Kernel"],
    },
    BuiltinRule {
        area: "External",
        patterns: &["^ext/"],
        labels: &["EXT"],
    },
    BuiltinRule {
        area: "Documentation",
        patterns: &["^doc/", r"\.rst$", r"\.txt$"],
        labels: &["area: Documentation"],
    },
    BuiltinRule {
        area: "Build System",
        patterns: &["^cmake/", "^CMakeLists.txt"],
        labels: &["area: Build System"],
    },
    BuiltinRule {
        area: "Kconfig",
        patterns: &["^scripts/kconfig", "^Kconfig", "^Kconfig.zephyr"],
        labels: &["area: Kconfig"],
    },
    BuiltinRule {
        area: "Sanitycheck",
        patterns: &["^scripts/sanitycheck", "^scripts/sanity_chk"],
        labels: &["area: Sanitycheck"],
    },
    BuiltinRule {
        area: "Manifest",
        patterns: &["^west.yml"],
        labels: &["area: Modules"],
    },
];

/// Materialize the built-in table as owned rules.
pub fn rules() -> Vec<Rule> {
    RULES.iter().map(Rule::from).collect()
}
