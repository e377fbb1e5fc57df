//! No-mock dataset catalog resolution tests.

use dt_common::Observation;
use dt_core::catalog::{default_dataset, devices, resolve_dataset, sensors};

#[test]
fn known_pairs_resolve_their_own_datasets() {
    let temperature = resolve_dataset("device-001", "temperature");
    assert_eq!(temperature[0], Observation::new("Overheating Events", 285));

    let flow = resolve_dataset("device-002", "flow-rate");
    assert_eq!(flow[0], Observation::new("Flow Restrictions", 289));

    let errors = resolve_dataset("edge-gateway-01", "error-logs");
    assert_eq!(errors[0], Observation::new("Connection Drops", 256));
}

#[test]
fn every_catalog_dataset_is_non_empty() {
    for device in devices() {
        for sensor in sensors(device) {
            let dataset = resolve_dataset(device, sensor);
            assert!(!dataset.is_empty(), "empty dataset for {device}/{sensor}");
        }
    }
}

#[test]
fn lookup_misses_never_fail_and_never_return_empty() {
    for (device, sensor) in [
        ("", ""),
        ("device-001", ""),
        ("", "temperature"),
        ("device-042", "temperature"),
        ("device-001", "barometric"),
    ] {
        let dataset = resolve_dataset(device, sensor);
        assert_eq!(dataset, default_dataset());
        assert!(!dataset.is_empty());
    }
}

#[test]
fn sensor_is_scoped_to_its_device() {
    // device-002 has flow-rate, device-001 does not: the pair must match
    // exactly, no cross-device fallback to another device's sensor.
    assert_eq!(resolve_dataset("device-001", "flow-rate"), default_dataset());
}

#[test]
fn device_listing_is_stable_across_calls() {
    assert_eq!(devices(), devices());
    assert_eq!(sensors("cluster-west"), sensors("cluster-west"));
}

#[test]
fn cluster_devices_expose_infrastructure_sensors() {
    assert_eq!(
        sensors("cluster-west"),
        vec!["cpu-usage", "memory-usage", "network-latency"]
    );
    assert_eq!(sensors("cluster-east"), vec!["cpu-usage", "disk-io"]);
}
