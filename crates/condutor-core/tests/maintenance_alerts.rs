//! Tests for the maintenance alert engine

use condutor_core::maintenance::{
    AlertEngine, AlertStatus, MaintenanceCatalog, MaintenanceHistory, MaintenanceItemDefinition,
    AIR_FILTER, ENGINE_OIL, SPARK_PLUGS, TIMING_BELT,
};
use pretty_assertions::assert_eq;

fn statuses(
    engine: &AlertEngine,
    current_km: u64,
    history: Option<&MaintenanceHistory>,
) -> Vec<AlertStatus> {
    engine
        .compute_alerts("v1", current_km, history)
        .into_iter()
        .map(|a| a.status)
        .collect()
}

#[test]
fn test_end_to_end_scenario() {
    let engine = AlertEngine::default();
    let history: MaintenanceHistory = [(SPARK_PLUGS, 5000u64)].into_iter().collect();

    let alerts = engine.compute_alerts("gol-2015", 42_000, Some(&history));

    let summary: Vec<(&str, u64, u64, i64, AlertStatus)> = alerts
        .iter()
        .map(|a| {
            (
                a.part_name.as_str(),
                a.last_done_km,
                a.next_due_km(),
                a.remaining_km(42_000),
                a.status,
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (ENGINE_OIL, 0, 10_000, -32_000, AlertStatus::Critical),
            (AIR_FILTER, 0, 15_000, -27_000, AlertStatus::Critical),
            (SPARK_PLUGS, 5_000, 45_000, 3_000, AlertStatus::Ok),
            (TIMING_BELT, 0, 60_000, 18_000, AlertStatus::Ok),
        ]
    );
    assert!(alerts.iter().all(|a| a.vehicle_id == "gol-2015"));
}

#[test]
fn test_oil_threshold_boundaries() {
    let engine = AlertEngine::default();
    let oil = |km| engine.compute_alerts("v1", km, None)[0].status;

    assert_eq!(oil(8_500), AlertStatus::Ok);
    assert_eq!(oil(8_501), AlertStatus::Warning);
    assert_eq!(oil(10_000), AlertStatus::Critical);
    assert_eq!(oil(10_001), AlertStatus::Critical);
}

#[test]
fn test_never_serviced_defaults_to_zero() {
    let engine = AlertEngine::default();
    let empty = MaintenanceHistory::new();

    for history in [None, Some(&empty)] {
        let alerts = engine.compute_alerts("v1", 3_000, history);
        assert_eq!(alerts.len(), 4);
        assert!(alerts.iter().all(|a| a.last_done_km == 0));
    }
}

#[test]
fn test_deterministic() {
    let engine = AlertEngine::default();
    let history: MaintenanceHistory =
        [(ENGINE_OIL, 20_000u64), (TIMING_BELT, 1_000)].into_iter().collect();

    let first = engine.compute_alerts("v1", 29_000, Some(&history));
    for _ in 0..10 {
        assert_eq!(engine.compute_alerts("v1", 29_000, Some(&history)), first);
    }
}

#[test]
fn test_history_order_does_not_affect_output() {
    let engine = AlertEngine::default();
    let forward: MaintenanceHistory = [
        (ENGINE_OIL, 10_000u64),
        (AIR_FILTER, 12_000),
        (SPARK_PLUGS, 30_000),
        (TIMING_BELT, 40_000),
    ]
    .into_iter()
    .collect();
    let backward: MaintenanceHistory = [
        (TIMING_BELT, 40_000u64),
        (SPARK_PLUGS, 30_000),
        (AIR_FILTER, 12_000),
        (ENGINE_OIL, 10_000),
    ]
    .into_iter()
    .collect();

    let a = engine.compute_alerts("v1", 26_000, Some(&forward));
    let b = engine.compute_alerts("v1", 26_000, Some(&backward));
    assert_eq!(a, b);

    let names: Vec<&str> = a.iter().map(|x| x.part_name.as_str()).collect();
    assert_eq!(names, vec![ENGINE_OIL, AIR_FILTER, SPARK_PLUGS, TIMING_BELT]);
}

#[test]
fn test_status_never_improves_as_km_grows() {
    let engine = AlertEngine::default();
    let history: MaintenanceHistory =
        [(ENGINE_OIL, 7_000u64), (SPARK_PLUGS, 2_500)].into_iter().collect();

    let mut previous = statuses(&engine, 0, Some(&history));
    for km in (250..=80_000).step_by(250) {
        let current = statuses(&engine, km, Some(&history));
        for (before, after) in previous.iter().zip(&current) {
            assert!(after >= before, "status improved at {km} km: {before:?} -> {after:?}");
        }
        previous = current;
    }
    assert!(previous.iter().all(|s| *s == AlertStatus::Critical));
}

#[test]
fn test_history_keys_outside_catalog_are_ignored() {
    let engine = AlertEngine::default();
    let history: MaintenanceHistory = [("Pneus", 99_000u64)].into_iter().collect();
    let alerts = engine.compute_alerts("v1", 0, Some(&history));
    assert_eq!(alerts.len(), 4);
    assert!(alerts.iter().all(|a| a.last_done_km == 0));
}

#[test]
fn test_custom_catalog() {
    let catalog = MaintenanceCatalog::new(vec![
        MaintenanceItemDefinition::new("brk", "Fluido de Freio", 20_000),
        MaintenanceItemDefinition::new("oil", ENGINE_OIL, 5_000),
    ])
    .unwrap();
    let engine = AlertEngine::new(catalog);

    let alerts = engine.compute_alerts("moto", 4_000, None);
    assert_eq!(alerts[0].id, "brk");
    assert_eq!(alerts[0].status, AlertStatus::Ok);
    assert_eq!(alerts[1].id, "oil");
    assert_eq!(alerts[1].status, AlertStatus::Warning);
}

#[test]
fn test_alert_json_layout() {
    let alerts = AlertEngine::default().compute_alerts("v1", 9_000, None);
    let json = serde_json::to_value(&alerts[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "1",
            "vehicleId": "v1",
            "partName": "Óleo do Motor",
            "intervalKm": 10000,
            "lastDoneKm": 0,
            "status": "warning"
        })
    );
}
