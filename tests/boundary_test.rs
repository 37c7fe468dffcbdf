use modbus_configure::boundary::BoundaryWarning;
use modbus_configure::extractor::{parse_definitions, DefinitionPattern};
use modbus_configure::ui;
use modbus_configure::Component;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_missing_component_display() {
    let warning = BoundaryWarning::MissingComponent {
        component: Component::Minor,
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("minor"),
        "Message should name the component, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("using 0"),
        "Message should mention the default, got: {}",
        display_msg
    );
}

#[test]
fn test_duplicate_definition_display() {
    let warning = BoundaryWarning::DuplicateDefinition {
        component: Component::Micro,
        line: 17,
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("micro") && display_msg.contains("17"),
        "Message should contain component and line, got: {}",
        display_msg
    );
}

#[test]
fn test_warning_is_displayable() {
    let warning = BoundaryWarning::UnknownComponent {
        name: "mystery".to_string(),
        line: 2,
    };
    // Visual verification - printed to stderr
    ui::display_boundary_warning(&warning);
}

// ============================================================================
// Warnings raised by extraction
// ============================================================================

#[test]
fn test_partial_definition_warns_per_missing_component() {
    let pattern = DefinitionPattern::new("libmodbus").unwrap();
    let extraction = parse_definitions("m4_define([libmodbus_version_minor], [4])\n", &pattern);

    assert_eq!(extraction.versions.full(), "0.4.0");
    assert_eq!(
        extraction.warnings,
        vec![
            BoundaryWarning::MissingComponent {
                component: Component::Major
            },
            BoundaryWarning::MissingComponent {
                component: Component::Micro
            },
        ]
    );
}

#[test]
fn test_release_status_line_is_not_a_component() {
    let pattern = DefinitionPattern::new("libmodbus").unwrap();
    let text = "\
m4_define([libmodbus_version_major], [3])
m4_define([libmodbus_version_minor], [1])
m4_define([libmodbus_version_micro], [7])
m4_define([libmodbus_release_status],
    [m4_if(m4_eval(libmodbus_version_micro % 2), [1], [snapshot], [release])])
";
    let extraction = parse_definitions(text, &pattern);
    assert_eq!(extraction.versions.full(), "3.1.7");
    assert!(extraction.warnings.is_empty());
}
