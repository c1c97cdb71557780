//! The first-startup checklist for a 2008 Supra 22SSV (350 Indmar V8, MEFI-5).

use super::{Checklist, ChecklistItem, Entry, Section, Subsection};
use super::{IDLE_PARAMETERS, PRE_START_PARAMETERS};

const fn check(key: &'static str, label: &'static str) -> Entry {
    Entry::Item(ChecklistItem::check(key, label))
}

const fn text(key: &'static str, label: &'static str) -> Entry {
    Entry::Item(ChecklistItem::text(key, label))
}

const fn sub(title: &'static str, entries: &'static [Entry]) -> Subsection {
    Subsection {
        title: Some(title),
        entries,
    }
}

const PRE_START_CHECKS: Section = Section {
    number: 1,
    title: "Pre-Start Checks",
    description: "Ensure the boat is in a safe, well-ventilated area, either in the water or on \
                  a trailer with a flush kit. Complete these checks before connecting the scan \
                  tool or attempting to start the engine.",
    subsections: &[
        sub(
            "1.1 Battery",
            &[
                check(
                    "battery_terminals",
                    "Inspect battery terminals: Check for corrosion or loose connections. \
                     Clean and tighten as needed.",
                ),
                check(
                    "battery_voltage",
                    "Measure battery voltage: Use a multimeter to confirm voltage is ≥12.6V \
                     (fully charged). Charge or replace if below 12.2V.",
                ),
                check(
                    "battery_age",
                    "Check battery age: If over 4 years old or showing signs of weakness, \
                     consider replacement.",
                ),
                check(
                    "battery_secure",
                    "Ensure battery is secure: Verify straps or mounts are tight to prevent \
                     movement.",
                ),
            ],
        ),
        sub(
            "1.2 Engine Oil",
            &[
                check(
                    "oil_level",
                    "Check oil level: Pull dipstick, wipe, reinsert, and confirm level is \
                     within the safe range. Top off with manufacturer-recommended oil (e.g., \
                     15W-40 marine-grade) if low.",
                ),
                check(
                    "oil_condition",
                    "Inspect oil condition: Look for milky or contaminated oil, indicating \
                     water intrusion. If present, change oil and filter before proceeding.",
                ),
                check(
                    "oil_leaks",
                    "Check for leaks: Inspect around oil pan, filter, and lines for signs of \
                     leaks.",
                ),
            ],
        ),
        sub(
            "1.3 Cooling System",
            &[
                check(
                    "coolant_level",
                    "Verify coolant level: For closed-loop systems, check reservoir level and \
                     top off with 50/50 antifreeze mix if needed.",
                ),
                check(
                    "raw_water",
                    "Inspect raw water system: Check impeller (replace if over 2 years old or \
                     brittle), strainer, and hoses for cracks or blockages.",
                ),
                check(
                    "water_supply",
                    "Confirm water supply: If on a trailer, connect a flush kit with adequate \
                     water flow. If in water, ensure seacock is open.",
                ),
            ],
        ),
        sub(
            "1.4 Fuel System",
            &[
                check(
                    "fuel_condition",
                    "Check fuel condition: After 2 years, fuel may be stale. If possible, \
                     drain tank and replace with fresh marine-grade fuel (non-ethanol \
                     preferred).",
                ),
                check(
                    "fuel_lines",
                    "Inspect fuel lines: Look for cracks, leaks, or degradation. Replace any \
                     suspect lines.",
                ),
                check(
                    "fuel_filter",
                    "Check fuel filter: Replace if not changed in the last year or if \
                     contaminated.",
                ),
                check(
                    "fuel_prime",
                    "Prime fuel system: Cycle ignition key (without starting) 2–3 times to \
                     prime fuel pump and check for leaks.",
                ),
            ],
        ),
        sub(
            "1.5 General Engine Inspection",
            &[
                check(
                    "belts_pulleys",
                    "Inspect belts and pulleys: Check for wear, cracking, or improper \
                     tension. Adjust or replace as needed.",
                ),
                check(
                    "spark_plugs",
                    "Check spark plugs: Remove and inspect for fouling or corrosion. Replace \
                     if worn (use marine-grade plugs).",
                ),
                check(
                    "throttle_linkage",
                    "Verify throttle linkage: Ensure smooth operation with no binding.",
                ),
                check(
                    "exhaust_system",
                    "Check exhaust system: Inspect manifolds and risers for corrosion or \
                     leaks.",
                ),
            ],
        ),
        sub(
            "1.6 Diagnostic Setup",
            &[
                check(
                    "connect_scan_tool",
                    "Connect EFI 5/6 Scan Tool: Locate the 6-pin marine diagnostic port \
                     (typically near the ECM). Securely connect the scan tool using the \
                     provided adapter (#94027 for MEFI-5).",
                ),
                check(
                    "power_scan_tool",
                    "Power on scan tool: Connect to a laptop with the EFI 5/6 software \
                     installed (e.g., ScannerPro or MEFI Scan & Tune). Verify communication \
                     with the ECM.",
                ),
                check(
                    "clear_codes",
                    "Clear existing codes: If the scan tool shows stored codes, note them for \
                     reference and clear them to start fresh.",
                ),
                check(
                    "start_logging",
                    "Start data logging: Begin a new log file in the scan tool software to \
                     record all parameters during the session.",
                ),
            ],
        ),
    ],
    notes: &[],
};

const PRE_START_MONITORING: Section = Section {
    number: 2,
    title: "Pre-Start Parameter Monitoring",
    description: "With the ignition in the “ON” position (engine not running), use the EFI 5/6 \
                  Scan Tool to verify the following parameters. Record values for reference.",
    subsections: &[Subsection {
        title: None,
        entries: &[Entry::Table(&PRE_START_PARAMETERS)],
    }],
    notes: &[],
};

const START_AND_IDLE: Section = Section {
    number: 3,
    title: "Engine Start and Idle Monitoring",
    description: "Start the engine and let it idle in neutral. Monitor live data using the EFI \
                  5/6 Scan Tool for at least 5 minutes to ensure stable operation. Record \
                  values and compare to targets.",
    subsections: &[
        sub(
            "3.1 Starting Procedure",
            &[
                check(
                    "water_flow",
                    "Confirm water flow: Ensure flush kit or raw water system is supplying \
                     water.",
                ),
                check(
                    "ignition_start",
                    "Turn ignition to START: Crank engine for no more than 10 seconds at a \
                     time. Allow 30 seconds between attempts if it doesn’t start.",
                ),
                check(
                    "unusual_noises",
                    "Check for unusual noises: Listen for knocking, rattling, or grinding \
                     during startup.",
                ),
            ],
        ),
        sub(
            "3.2 Live Data Targets at Idle",
            &[Entry::Table(&IDLE_PARAMETERS)],
        ),
    ],
    notes: &[],
};

const POST_RUN_REVIEW: Section = Section {
    number: 4,
    title: "Post-Run Review",
    description: "After running the engine for 5–10 minutes, shut it down and perform the \
                  following checks to evaluate performance and prepare for future use.",
    subsections: &[
        sub(
            "4.1 Diagnostic Checks",
            &[
                check(
                    "fault_codes",
                    "Check for fault codes: Use the scan tool to read any new Diagnostic \
                     Trouble Codes (DTCs). Record codes and their descriptions (e.g., “P0107 \
                     – MAP Sensor Low Voltage”).",
                ),
                text("codes_found", "Codes Found"),
                text("actions_needed", "Actions Needed"),
                check(
                    "review_log",
                    "Review live data log: Analyze the recorded data for anomalies (e.g., \
                     erratic RPM, high temps, or sensor failures).",
                ),
                check(
                    "save_log",
                    "Save log file: Export the log to your laptop with a clear filename \
                     (e.g., “Supra22SSV_2025-04-19.log”) for future reference.",
                ),
            ],
        ),
        sub(
            "4.2 Physical Inspection",
            &[
                check(
                    "post_leaks",
                    "Check for leaks: Inspect engine compartment for oil, fuel, or coolant \
                     leaks.",
                ),
                check(
                    "post_exhaust",
                    "Inspect exhaust: Confirm exhaust is clear and no excessive smoke or \
                     unusual odors.",
                ),
                check(
                    "post_fluids",
                    "Recheck fluid levels: Verify oil and coolant levels after cooldown; top \
                     off if needed.",
                ),
            ],
        ),
        sub(
            "4.3 Maintenance Planning",
            &[
                check(
                    "address_codes",
                    "Address fault codes: Research and resolve any DTCs before next use \
                     (refer to Indmar MEFI-5 service manual or contact a technician).",
                ),
                check(
                    "schedule_maintenance",
                    "Schedule maintenance: Based on findings, plan for oil change, impeller \
                     replacement, or other overdue services.",
                ),
                check(
                    "document_findings",
                    "Document findings: Note any issues, repairs, or observations for future \
                     reference.",
                ),
                text("observations", "Observations"),
            ],
        ),
        sub(
            "4.4 Scan Tool Shutdown",
            &[
                check(
                    "disconnect_tool",
                    "Disconnect scan tool: Power off the tool and disconnect from the \
                     diagnostic port.",
                ),
                check(
                    "store_equipment",
                    "Store equipment: Keep the scan tool and cables in a dry, protected \
                     location.",
                ),
            ],
        ),
    ],
    notes: &[],
};

const ADDITIONAL_NOTES: Section = Section {
    number: 5,
    title: "Additional Notes",
    description: "",
    subsections: &[],
    notes: &[
        "Safety First: Always work in a well-ventilated area, keep a fire extinguisher nearby, \
         and avoid loose clothing near moving parts.",
        "Reference Manual: Consult the Indmar MEFI-5 Service and Diagnostic Manual for \
         detailed troubleshooting if codes or issues arise.",
        "Professional Help: If you encounter persistent issues (e.g., no-start, overheating, \
         or complex DTCs), contact a certified marine technician.",
        "Tool Support: For scan tool issues, refer to OBD Diagnostics’ support at \
         support@obd2allinone.com or 310-793-2410.",
    ],
};

const SECTIONS: [Section; 5] = [
    PRE_START_CHECKS,
    PRE_START_MONITORING,
    START_AND_IDLE,
    POST_RUN_REVIEW,
    ADDITIONAL_NOTES,
];

/// The complete startup checklist.
pub static CHECKLIST: Checklist = Checklist {
    title: "2008 Supra 22SSV First Startup Diagnostic Checklist",
    subtitle: "For 350 Indmar V8 with MEFI-5 ECM Using EFI 5/6 Scan Tool",
    metadata: &[
        ChecklistItem::text_with_hint("date", "Date", "YYYY-MM-DD"),
        ChecklistItem::text("technician", "Technician"),
        ChecklistItem::text("boat_hours", "Boat Hours (if known)"),
    ],
    sections: &SECTIONS,
    finalization: &[
        ChecklistItem::text("signature", "Signature"),
        ChecklistItem::text_with_hint("date_completed", "Date Completed", "YYYY-MM-DD"),
    ],
};
