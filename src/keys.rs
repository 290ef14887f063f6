//! Well-known sensor keys
//!
//! Named constants for the temperature keys commonly present on machines
//! served by the SMC. Pure data: presence of any given key depends on the
//! hardware, and this list is nowhere near exhaustive.

/// Ambient air sensor
pub const AMBIENT_AIR_0: &str = "TA0P";
pub const AMBIENT_AIR_1: &str = "TA1P";

/// CPU die diode
pub const CPU_0_DIODE: &str = "TC0D";
pub const CPU_0_HEATSINK: &str = "TC0H";
pub const CPU_0_PROXIMITY: &str = "TC0P";

/// Enclosure bottom-side bays
pub const ENCLOSURE_BASE_0: &str = "TB0T";
pub const ENCLOSURE_BASE_1: &str = "TB1T";
pub const ENCLOSURE_BASE_2: &str = "TB2T";
pub const ENCLOSURE_BASE_3: &str = "TB3T";

/// GPU die diode
pub const GPU_0_DIODE: &str = "TG0D";
pub const GPU_0_HEATSINK: &str = "TG0H";
pub const GPU_0_PROXIMITY: &str = "TG0P";

/// Memory slots
pub const MEM_SLOT_0: &str = "TM0S";
pub const MEM_SLOTS_PROXIMITY: &str = "TM0P";

/// Northbridge
pub const NORTHBRIDGE_DIODE: &str = "TN0D";
pub const NORTHBRIDGE_HEATSINK: &str = "TN0H";
pub const NORTHBRIDGE_PROXIMITY: &str = "TN0P";

/// Thunderbolt ports
pub const THUNDERBOLT_0: &str = "TI0P";
pub const THUNDERBOLT_1: &str = "TI1P";

/// Wireless module
pub const WIRELESS_MODULE: &str = "TW0P";

/// Every well-known key with a human-readable label, for listings.
pub const ALL: &[(&str, &str)] = &[
    (AMBIENT_AIR_0, "ambient air 0"),
    (AMBIENT_AIR_1, "ambient air 1"),
    (CPU_0_DIODE, "CPU 0 diode"),
    (CPU_0_HEATSINK, "CPU 0 heatsink"),
    (CPU_0_PROXIMITY, "CPU 0 proximity"),
    (ENCLOSURE_BASE_0, "enclosure base 0"),
    (ENCLOSURE_BASE_1, "enclosure base 1"),
    (ENCLOSURE_BASE_2, "enclosure base 2"),
    (ENCLOSURE_BASE_3, "enclosure base 3"),
    (GPU_0_DIODE, "GPU 0 diode"),
    (GPU_0_HEATSINK, "GPU 0 heatsink"),
    (GPU_0_PROXIMITY, "GPU 0 proximity"),
    (MEM_SLOT_0, "memory slot 0"),
    (MEM_SLOTS_PROXIMITY, "memory slots proximity"),
    (NORTHBRIDGE_DIODE, "northbridge diode"),
    (NORTHBRIDGE_HEATSINK, "northbridge heatsink"),
    (NORTHBRIDGE_PROXIMITY, "northbridge proximity"),
    (THUNDERBOLT_0, "thunderbolt 0"),
    (THUNDERBOLT_1, "thunderbolt 1"),
    (WIRELESS_MODULE, "wireless module"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::SmcKey;

    #[test]
    fn all_known_keys_encode() {
        for (key, _) in ALL {
            assert!(SmcKey::new(key).is_ok(), "key {key:?} failed to encode");
        }
    }
}
