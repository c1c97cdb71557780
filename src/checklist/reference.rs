//! Reference tables read off the EFI 5/6 scan tool.

use super::{ReferenceRow, ReferenceTable};

const fn row(
    parameter: &'static str,
    expected_or_target: &'static str,
    notes: &'static str,
) -> ReferenceRow {
    ReferenceRow {
        parameter,
        expected_or_target,
        notes,
    }
}

/// Key-on, engine-off parameters.
pub const PRE_START_PARAMETERS: ReferenceTable = ReferenceTable {
    title: "Pre-Start Parameters",
    value_heading: "Expected Value",
    key_prefix: "param_",
    rows: &[
        row(
            "Battery Voltage",
            "12.2–12.8V",
            "If <12.2V, charge or replace battery.",
        ),
        row(
            "Manifold Absolute Pressure (MAP)",
            "~90–100 kPa (at sea level)",
            "Varies with altitude; should be steady.",
        ),
        row(
            "Throttle Position Sensor (TPS)",
            "0–1% at idle",
            "Ensure throttle is closed; erratic values indicate a faulty TPS.",
        ),
        row(
            "Engine Coolant Temperature (ECT)",
            "Ambient temp (~20–30°C)",
            "Should match air temp after sitting.",
        ),
        row(
            "Intake Air Temperature (IAT)",
            "Ambient temp (~20–30°C)",
            "Should match air temp.",
        ),
        row("Ignition Status", "OFF", "Confirm no unexpected activity."),
    ],
    notes: "If any parameter is out of range, investigate before starting (e.g., faulty \
            sensor, wiring issue). Verify scan tool is displaying real-time data with no \
            communication errors.",
};

/// Live data targets with the engine idling in neutral.
pub const IDLE_PARAMETERS: ReferenceTable = ReferenceTable {
    title: "Idle Parameters",
    value_heading: "Target Value",
    key_prefix: "idle_param_",
    rows: &[
        row(
            "Engine RPM",
            "600–800 RPM",
            "Should be steady; surging indicates fuel or air issues.",
        ),
        row(
            "Battery Voltage",
            "13.5–14.5V",
            "Indicates alternator is charging.",
        ),
        row(
            "Engine Coolant Temperature (ECT)",
            "70–85°C (after warmup)",
            "Should rise steadily; overheating (>95°C) requires immediate shutdown.",
        ),
        row(
            "Intake Air Temperature (IAT)",
            "Ambient + 5–10°C",
            "Higher values may indicate heat soak.",
        ),
        row(
            "Manifold Absolute Pressure (MAP)",
            "30–50 kPa",
            "Should stabilize; erratic values suggest vacuum leaks.",
        ),
        row(
            "Throttle Position Sensor (TPS)",
            "0–1%",
            "Should remain steady at idle.",
        ),
        row(
            "Fuel Injector Pulse Width",
            "2–4 ms",
            "Varies with load; erratic values indicate fuel delivery issues.",
        ),
        row(
            "Ignition Timing",
            "8–12° BTDC",
            "Should be stable; check for misfires.",
        ),
        row(
            "Oxygen Sensor (O2)",
            "0.1–0.9V (oscillating)",
            "If equipped; steady values indicate a lean/rich condition.",
        ),
    ],
    notes: "Allow engine to reach operating temperature (70–85°C) before proceeding. If \
            engine fails to start, check for fault codes immediately and troubleshoot (e.g., \
            fuel pump, ignition, or ECM issues). Watch for warning lights or alarms on the \
            dash and correlate with scan tool data.",
};
