use datagen::cli::Args;
use datagen::error::{Error, ErrorKind};
use std::fs;
use test_log::test;
mod utils;
use utils::{run_captured, run_ok, Workspace};

#[test]
fn test_dry_run_touches_nothing() {
    let workspace = Workspace::game();
    let args = Args { dry_run: true, ..workspace.group_args("all") };

    let (report, trace) = run_ok(args);

    assert!(!workspace.generated().exists());
    assert!(!workspace.record().exists());
    assert!(report.generated.is_empty());
    let previews =
        trace.lines().filter(|line| line.starts_with("[DRY RUN] Would generate file: ")).count();
    assert_eq!(previews, 14);
    assert!(trace.contains("(from template 'component_header')"));
}

#[test]
fn test_dry_run_keeps_stale_files() {
    let workspace = Workspace::game();
    run_ok(workspace.generator_args("enums"));
    fs::remove_file(workspace.path("descriptions/enums/Rarity.json")).unwrap();

    let (report, _) = run_ok(Args { dry_run: true, ..workspace.generator_args("enums") });

    assert!(report.removed.is_empty());
    assert!(workspace.generated().join("enums/Rarity.h").is_file());
    assert!(fs::read_to_string(workspace.record()).unwrap().contains("Rarity.h"));
}

#[test]
fn test_validate_all_writes_nothing() {
    let workspace = Workspace::game();
    let (report, trace) = run_ok(Args { validate_all: true, ..workspace.args() });

    assert_eq!(report.validated, vec!["components", "enums", "string_ids", "items"]);
    assert_eq!(
        trace.lines().collect::<Vec<_>>(),
        vec![
            "Validating generator: components",
            "Validating generator: enums",
            "Validating generator: string_ids",
            "Validating generator: items",
        ]
    );
    assert!(!workspace.generated().exists());
    assert!(!workspace.record().exists());
}

#[test]
fn test_validate_all_then_generate() {
    let workspace = Workspace::game();
    let (report, trace) = run_ok(Args { validate_all: true, ..workspace.generator_args("enums") });

    assert_eq!(report.validated.len(), 4);
    assert_eq!(report.generated.len(), 2);
    let validated = trace.find("Validating generator: items").unwrap();
    assert!(validated < trace.find("Running generator: enums").unwrap());
}

#[test]
fn test_validate_all_reports_broken_generator() {
    let workspace = Workspace::game();
    fs::remove_file(workspace.path("config/items/templates/item_header.template")).unwrap();

    let (result, _) = run_captured(Args { validate_all: true, ..workspace.args() });

    match result.unwrap_err() {
        Error::Generator { generator, source } => {
            assert_eq!(generator, "items");
            assert!(matches!(
                *source,
                Error::TemplateNotFound { ref name, .. } if name == "item_header"
            ));
        }
        other => panic!("Expected Generator error, got {other:?}"),
    }
}

#[test]
fn test_quiet_suppresses_trace() {
    let workspace = Workspace::game();
    let (report, trace) = run_ok(Args { quiet: true, ..workspace.group_args("all") });

    assert_eq!(trace, "");
    assert_eq!(report.generated.len(), 14);
}

#[test]
fn test_unknown_generator_lists_available() {
    let workspace = Workspace::game();
    let (result, _) = run_captured(workspace.generator_args("weapons"));

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(
        err.to_string(),
        "Unknown generator 'weapons'. Available: components, enums, string_ids, items."
    );
}

#[test]
fn test_unknown_group_fails() {
    let workspace = Workspace::game();
    let (result, _) = run_captured(workspace.group_args("everything"));

    assert!(matches!(result.unwrap_err(), Error::UnknownSelection { what: "group", .. }));
    assert!(!workspace.generated().exists());
}

#[test]
fn test_missing_registry() {
    let workspace = Workspace::game();
    fs::remove_file(workspace.path("generators.json")).unwrap();

    let (result, _) = run_captured(workspace.generator_args("enums"));

    assert!(matches!(result.unwrap_err(), Error::ConfigNotFound { .. }));
}

#[test]
fn test_yaml_registry() {
    let workspace = Workspace::game();
    fs::remove_file(workspace.path("generators.json")).unwrap();
    fs::write(
        workspace.path("generators.yaml"),
        r#"
generators:
  enums:
    kind: enums
    configs_dir: config/enums
    descriptions_dir: descriptions/enums
    output_dir_base: out
groups:
  only_enums: [enums]
"#,
    )
    .unwrap();

    let (report, _) = run_ok(workspace.group_args("only_enums"));

    assert_eq!(
        report.generated,
        vec![workspace.path("out/enums/Direction.h"), workspace.path("out/enums/Rarity.h")]
    );
    assert!(workspace.record().is_file());
}

#[test]
fn test_explicit_config_path() {
    let workspace = Workspace::game();
    let config = workspace.path("registry/custom.json");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::rename(workspace.path("generators.json"), &config).unwrap();

    let (report, _) = run_ok(Args { config: Some(config), ..workspace.generator_args("enums") });

    assert_eq!(report.generated.len(), 2);
    assert!(workspace.path("registry/caches/previously_generated_files.txt").is_file());
}

#[test]
fn test_relative_config_path_is_under_working_dir() {
    let workspace = Workspace::game();
    fs::create_dir_all(workspace.path("registry")).unwrap();
    fs::rename(workspace.path("generators.json"), workspace.path("registry/custom.json")).unwrap();

    let args =
        Args { config: Some("registry/custom.json".into()), ..workspace.generator_args("enums") };
    let (report, _) = run_ok(args);

    assert_eq!(report.generated.len(), 2);
    assert!(workspace.path("registry/caches/previously_generated_files.txt").is_file());
}

#[test]
fn test_invalid_description_aborts_before_writing() {
    let workspace = Workspace::game();
    fs::write(
        workspace.path("descriptions/components/BrokenComponent.json"),
        r#"{"flags": ["network"]}"#,
    )
    .unwrap();

    let (result, _) = run_captured(workspace.group_args("all"));

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("BrokenComponent"), "{err}");
    assert!(!workspace.generated().exists());
}

#[test]
fn test_missing_placeholder_aborts_before_writing() {
    let workspace = Workspace::game();
    fs::write(
        workspace.path("config/items/templates/weapon_entry.template"),
        "{item_id}: {item_price}{newline}\n",
    )
    .unwrap();

    let (result, _) = run_captured(workspace.group_args("all"));

    match result.unwrap_err() {
        Error::Generator { generator, source } => {
            assert_eq!(generator, "items");
            assert!(matches!(
                *source,
                Error::MissingPlaceholder { ref template, ref placeholder }
                    if template == "weapon_entry" && placeholder == "item_price"
            ));
        }
        other => panic!("Expected Generator error, got {other:?}"),
    }
    assert!(!workspace.generated().exists());
}

#[test]
fn test_missing_schema_field_is_reported() {
    let workspace = Workspace::game();
    fs::write(workspace.path("descriptions/items/BowItem.json"), r#"{"display_name": "Bow"}"#)
        .unwrap();

    let (result, _) = run_captured(workspace.generator_args("items"));

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "Error in generator 'items': Field 'lore' is required but missing in 'BowItem'."
    );
}

#[test]
fn test_sources_dir_must_exist() {
    let workspace = Workspace::game();
    fs::remove_dir_all(workspace.path("src")).unwrap();

    let (result, _) = run_captured(workspace.generator_args("string_ids"));

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Configuration);
}
