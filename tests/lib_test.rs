//! Library integration tests.

use startcheck::StartcheckError;

#[test]
fn error_types_are_public() {
    let err = StartcheckError::UnknownField {
        key: "bilge_pump".into(),
    };
    assert!(err.to_string().contains("bilge_pump"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> startcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use startcheck::cli::{Cli, Commands};

    let cli = Cli::parse_from(["startcheck", "show", "--json"]);

    if let Some(Commands::Show(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn form_session_drives_store_and_report() {
    use startcheck::form::{FieldValue, FormSession};

    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("checklist_data.json");

    let mut session = FormSession::open(&path);
    assert_eq!(
        session.on_field_changed("coolant_level", "yes").unwrap(),
        FieldValue::Checkbox(true)
    );
    session.on_text_changed("codes_found", "P0300");
    session.on_save_clicked().unwrap();

    let reopened = FormSession::open(&path);
    let report = reopened.on_export_clicked();
    assert!(report.contains("Checklist", "coolant_level", "Checked"));
    assert!(report.contains("Post-Run", "Codes Found", "P0300"));
}

#[test]
fn mock_ui_drives_commands() {
    use startcheck::cli::commands::set::SetCommand;
    use startcheck::cli::{Command, SetArgs};
    use startcheck::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("checklist_data.json");
    let mut ui = MockUI::new();

    let cmd = SetCommand::new(
        &path,
        SetArgs {
            key: "technician".into(),
            value: "Sam".into(),
        },
    );
    assert!(cmd.execute(&mut ui).unwrap().success);
    assert!(ui.has_success("Technician: Sam"));
}
