//! Static device/sensor dataset catalog.
//!
//! The catalog stands in for an external telemetry source: a fixed,
//! pre-populated lookup table keyed first by device identifier, then by
//! sensor identifier. Resolution is an exact two-level key match; any
//! miss (unknown device, unknown sensor, or an empty selection) falls
//! back to the default manufacturing-defect sample set so callers always
//! have something to analyze.
//!
//! The table is immutable after first use and every resolution returns a
//! freshly cloned dataset, so repeated lookups never observe shared
//! mutable state.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use dt_common::Observation;

type SensorTable = BTreeMap<&'static str, Vec<Observation>>;
type DeviceTable = BTreeMap<&'static str, SensorTable>;

static CATALOG: OnceLock<DeviceTable> = OnceLock::new();

fn obs(category: &str, count: u64) -> Observation {
    Observation::new(category, count)
}

/// The fallback dataset: manufacturing quality defects.
///
/// Non-empty by construction; resolution can therefore never produce an
/// empty dataset unless a caller supplies one inline.
pub fn default_dataset() -> Vec<Observation> {
    vec![
        obs("Surface Scratches", 342),
        obs("Dimensional Variance", 287),
        obs("Material Defects", 234),
        obs("Assembly Misalignment", 189),
        obs("Paint/Coating Issues", 156),
        obs("Weld Defects", 123),
        obs("Electrical Faults", 98),
        obs("Missing Components", 76),
        obs("Packaging Damage", 54),
        obs("Calibration Errors", 43),
        obs("Tool Wear", 32),
        obs("Environmental Issues", 21),
        obs("Documentation Errors", 15),
        obs("Other", 12),
    ]
}

fn catalog() -> &'static DeviceTable {
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> DeviceTable {
    let mut devices: DeviceTable = BTreeMap::new();

    devices.insert(
        "device-001",
        BTreeMap::from([
            (
                "temperature",
                vec![
                    obs("Overheating Events", 285),
                    obs("Temperature Spikes", 162),
                    obs("Cooling System Failures", 145),
                    obs("Sensor Drift", 98),
                    obs("Calibration Issues", 67),
                    obs("Environmental Factors", 45),
                    obs("Hardware Malfunction", 23),
                ],
            ),
            (
                "pressure",
                vec![
                    obs("Pressure Drops", 178),
                    obs("System Leaks", 156),
                    obs("Valve Failures", 143),
                    obs("Pump Issues", 98),
                    obs("Blockages", 67),
                    obs("Sensor Errors", 34),
                    obs("Maintenance Issues", 19),
                ],
            ),
            (
                "vibration",
                vec![
                    obs("Bearing Wear", 192),
                    obs("Misalignment", 167),
                    obs("Imbalance", 134),
                    obs("Looseness", 98),
                    obs("Belt Issues", 65),
                    obs("Motor Problems", 43),
                    obs("Foundation Issues", 21),
                ],
            ),
            (
                "humidity",
                vec![
                    obs("Moisture Buildup", 164),
                    obs("Condensation Issues", 148),
                    obs("Ventilation Problems", 125),
                    obs("Seal Failures", 89),
                    obs("Weather Impact", 56),
                    obs("HVAC Malfunction", 34),
                    obs("Insulation Degradation", 18),
                ],
            ),
        ]),
    );

    devices.insert(
        "device-002",
        BTreeMap::from([
            (
                "temperature",
                vec![
                    obs("Thermal Overload", 173),
                    obs("Heat Exchanger Issues", 158),
                    obs("Insulation Problems", 141),
                    obs("Ambient Temperature", 89),
                    obs("Control System Errors", 67),
                    obs("Maintenance Delays", 34),
                    obs("Design Limitations", 16),
                ],
            ),
            (
                "flow-rate",
                vec![
                    obs("Flow Restrictions", 289),
                    obs("Pump Degradation", 164),
                    obs("Pipe Corrosion", 147),
                    obs("Control Valve Issues", 125),
                    obs("Filter Clogging", 89),
                    obs("Measurement Errors", 43),
                    obs("System Design", 28),
                ],
            ),
            (
                "power-consumption",
                vec![
                    obs("Motor Inefficiency", 195),
                    obs("Load Variations", 171),
                    obs("Power Quality Issues", 152),
                    obs("Equipment Aging", 138),
                    obs("Control System Faults", 94),
                    obs("Environmental Conditions", 56),
                    obs("Maintenance Neglect", 29),
                ],
            ),
        ]),
    );

    devices.insert(
        "device-003",
        BTreeMap::from([
            (
                "vibration",
                vec![
                    obs("Quality Control Failures", 356),
                    obs("Calibration Drift", 234),
                    obs("Measurement Inconsistency", 198),
                    obs("Operator Errors", 176),
                    obs("Equipment Wear", 154),
                    obs("Environmental Interference", 132),
                    obs("Software Glitches", 98),
                ],
            ),
            (
                "pressure",
                vec![
                    obs("Inspection Failures", 242),
                    obs("Tolerance Violations", 218),
                    obs("Material Defects", 187),
                    obs("Process Variations", 165),
                    obs("Tool Wear", 143),
                    obs("Setup Errors", 98),
                    obs("Documentation Issues", 65),
                ],
            ),
        ]),
    );

    devices.insert(
        "device-004",
        BTreeMap::from([
            (
                "power-consumption",
                vec![
                    obs("Packaging Line Jams", 403),
                    obs("Label Misalignment", 267),
                    obs("Seal Quality Issues", 234),
                    obs("Material Feed Problems", 198),
                    obs("Speed Variations", 176),
                    obs("Conveyor Issues", 145),
                    obs("Sensor Malfunctions", 123),
                ],
            ),
            (
                "temperature",
                vec![
                    obs("Heat Sealing Problems", 287),
                    obs("Cooling System Issues", 245),
                    obs("Material Overheating", 212),
                    obs("Temperature Control", 189),
                    obs("Thermal Expansion", 167),
                    obs("Ambient Conditions", 134),
                    obs("Equipment Aging", 121),
                ],
            ),
        ]),
    );

    devices.insert(
        "device-005",
        BTreeMap::from([
            (
                "vibration",
                vec![
                    obs("Assembly Line Stoppages", 324),
                    obs("Component Misalignment", 298),
                    obs("Fastening Issues", 276),
                    obs("Tool Wear", 154),
                    obs("Quality Rejections", 142),
                    obs("Material Shortages", 128),
                    obs("Operator Training", 115),
                ],
            ),
            (
                "pressure",
                vec![
                    obs("Pneumatic System Failures", 256),
                    obs("Air Pressure Drops", 223),
                    obs("Actuator Problems", 189),
                    obs("Valve Malfunctions", 167),
                    obs("Leak Detection", 145),
                    obs("Compressor Issues", 123),
                    obs("Filter Blockages", 112),
                ],
            ),
        ]),
    );

    devices.insert(
        "cluster-west",
        BTreeMap::from([
            (
                "cpu-usage",
                vec![
                    obs("Resource Intensive Tasks", 456),
                    obs("Memory Leaks", 398),
                    obs("Background Processes", 367),
                    obs("Network Bottlenecks", 334),
                    obs("Database Queries", 298),
                    obs("System Updates", 267),
                    obs("Hardware Limitations", 234),
                ],
            ),
            (
                "memory-usage",
                vec![
                    obs("Memory Leaks", 434),
                    obs("Large Dataset Processing", 389),
                    obs("Cache Overflow", 345),
                    obs("Application Bloat", 312),
                    obs("Inefficient Algorithms", 278),
                    obs("System Fragmentation", 245),
                    obs("Hardware Constraints", 223),
                ],
            ),
            (
                "network-latency",
                vec![
                    obs("Network Congestion", 498),
                    obs("Bandwidth Limitations", 434),
                    obs("Routing Issues", 378),
                    obs("Hardware Failures", 334),
                    obs("Configuration Errors", 289),
                    obs("External Dependencies", 256),
                    obs("Security Scanning", 228),
                ],
            ),
        ]),
    );

    devices.insert(
        "cluster-east",
        BTreeMap::from([
            (
                "cpu-usage",
                vec![
                    obs("High Load Applications", 387),
                    obs("Concurrent Processing", 345),
                    obs("Resource Contention", 312),
                    obs("Inefficient Code", 289),
                    obs("System Overhead", 267),
                    obs("Background Tasks", 234),
                    obs("Hardware Aging", 218),
                ],
            ),
            (
                "disk-io",
                vec![
                    obs("Disk I/O Bottlenecks", 423),
                    obs("Storage Fragmentation", 378),
                    obs("File System Issues", 334),
                    obs("Database Operations", 298),
                    obs("Backup Processes", 267),
                    obs("Log File Growth", 245),
                    obs("Hardware Failures", 223),
                ],
            ),
        ]),
    );

    devices.insert(
        "compute-node-1",
        BTreeMap::from([
            (
                "performance-metrics",
                vec![
                    obs("High Latency Operations", 545),
                    obs("Resource Contention", 467),
                    obs("I/O Bottlenecks", 398),
                    obs("Network Congestion", 356),
                    obs("Memory Allocation", 323),
                    obs("CPU Throttling", 289),
                    obs("Storage Issues", 245),
                ],
            ),
            (
                "error-logs",
                vec![
                    obs("Connection Timeouts", 487),
                    obs("Authentication Failures", 434),
                    obs("Resource Not Found", 389),
                    obs("Permission Denied", 345),
                    obs("Service Unavailable", 312),
                    obs("Data Validation Errors", 278),
                    obs("System Exceptions", 234),
                ],
            ),
            (
                "memory-usage",
                vec![
                    obs("Memory Exhaustion", 398),
                    obs("Garbage Collection", 356),
                    obs("Memory Fragmentation", 323),
                    obs("Buffer Overflows", 289),
                    obs("Heap Allocation", 267),
                    obs("Stack Overflow", 234),
                    obs("Memory Leaks", 223),
                ],
            ),
        ]),
    );

    devices.insert(
        "compute-node-2",
        BTreeMap::from([
            (
                "cpu-usage",
                vec![
                    obs("Compute Intensive Tasks", 434),
                    obs("Parallel Processing", 389),
                    obs("Algorithm Complexity", 345),
                    obs("Resource Scheduling", 312),
                    obs("Context Switching", 278),
                    obs("Interrupt Handling", 245),
                    obs("System Calls", 223),
                ],
            ),
            (
                "network-latency",
                vec![
                    obs("Inter-node Communication", 467),
                    obs("Data Transfer Delays", 398),
                    obs("Protocol Overhead", 356),
                    obs("Network Topology", 323),
                    obs("Bandwidth Saturation", 289),
                    obs("Packet Loss", 256),
                    obs("Routing Inefficiency", 228),
                ],
            ),
        ]),
    );

    devices.insert(
        "edge-gateway-01",
        BTreeMap::from([
            (
                "network-latency",
                vec![
                    obs("Edge Connectivity Issues", 278),
                    obs("Cellular Signal Strength", 234),
                    obs("Data Transmission Errors", 198),
                    obs("Protocol Handshakes", 176),
                    obs("Security Overhead", 154),
                    obs("Device Synchronization", 132),
                    obs("Firmware Updates", 118),
                ],
            ),
            (
                "error-logs",
                vec![
                    obs("Connection Drops", 256),
                    obs("Authentication Timeouts", 223),
                    obs("Data Corruption", 189),
                    obs("Protocol Violations", 167),
                    obs("Buffer Overruns", 145),
                    obs("Sync Failures", 128),
                    obs("Hardware Resets", 115),
                ],
            ),
        ]),
    );

    devices
}

/// Resolve the observation list for a device/sensor pair.
///
/// Exact key match only; anything else (unknown device, unknown sensor,
/// empty selection) returns the default dataset. Never fails.
pub fn resolve_dataset(device: &str, sensor: &str) -> Vec<Observation> {
    match catalog().get(device).and_then(|s| s.get(sensor)) {
        Some(dataset) => dataset.clone(),
        None => {
            tracing::debug!(device, sensor, "no catalog entry, using default dataset");
            default_dataset()
        }
    }
}

/// Known device identifiers, sorted.
pub fn devices() -> Vec<&'static str> {
    catalog().keys().copied().collect()
}

/// Known sensor identifiers for a device, sorted. Empty when the device
/// is unknown.
pub fn sensors(device: &str) -> Vec<&'static str> {
    catalog()
        .get(device)
        .map(|s| s.keys().copied().collect())
        .unwrap_or_default()
}
