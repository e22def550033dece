// crates/phoebusgen/tests/definitions.rs

use phoebusgen::{
    Color, ColorTable, Config, Definitions, FontStyle, FontTable, Label, PhoebusError, Screen,
    Widget, read_outline,
};
use phoebusgen::{BackgroundColor, FontProperty, ForegroundColor};
use std::path::PathBuf;

fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Path of a file in the `tests/data/` directory.
fn test_file(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

#[test]
fn test_load_site_definitions() {
    init_logger();
    let config = Config::default()
        .with_color_def(test_file("site_colors.def"))
        .with_font_def(test_file("site_fonts.def"));
    let defs = Definitions::load(&config).expect("Failed to load site definitions");

    assert_eq!(defs.colors().len(), 5);
    assert_eq!(defs.color("Running").unwrap().color, Color::rgb(0, 200, 0));
    assert_eq!(
        defs.color("Glass").unwrap().color,
        Color::rgba(200, 220, 255, 80)
    );

    let heading = defs.font("Heading").unwrap();
    assert_eq!(heading.font.family, "DejaVu Sans");
    assert_eq!(heading.font.style, FontStyle::Bold);
    assert_eq!(heading.font.size, 24.0);
    assert_eq!(defs.font("Small").unwrap().font.size, 10.5);

    // Nothing from the bundled tables leaks in.
    assert!(matches!(
        defs.color("OK"),
        Err(PhoebusError::UnknownColor(name)) if name == "OK"
    ));
    assert!(matches!(defs.font("Default"), Err(PhoebusError::UnknownFont(_))));
}

#[test]
fn test_named_values_in_generated_xml() {
    init_logger();
    let colors = ColorTable::load(test_file("site_colors.def")).unwrap();
    let fonts = FontTable::load(test_file("site_fonts.def")).unwrap();
    let defs = Definitions::new(colors, fonts);

    let mut label = Label::new("Status", "Beam", 0, 0, 120, 30);
    label
        .foreground_color(defs.color("Running").unwrap())
        .background_color(defs.color("Glass").unwrap())
        .font(defs.font("Console").unwrap());

    let mut screen = Screen::new("Beam");
    screen.add_widget(label);
    let xml = screen.to_xml_string().unwrap();

    assert!(xml.contains(
        r#"<color name="Running" red="0" green="200" blue="0" alpha="255"/>"#
    ));
    assert!(xml.contains(
        r#"<color name="Glass" red="200" green="220" blue="255" alpha="80"/>"#
    ));
    assert!(xml.contains(
        r#"<font name="Console" family="DejaVu Sans Mono" style="ITALIC" size="12.0"/>"#
    ));

    let outline = read_outline(&xml).unwrap();
    assert_eq!(outline.find("Status").unwrap().text.as_deref(), Some("Beam"));
}

#[test]
fn test_editing_named_font_drops_name() {
    let defs = Definitions::builtin().unwrap();
    let mut label = Label::new("Note", "x", 0, 0, 10, 10);
    label.font(defs.font("Header 1").unwrap());
    label.font_size(30).unwrap();

    let font = label.element().find("font").unwrap().find("font").unwrap();
    assert_eq!(font.attribute("name"), None);
    assert_eq!(font.attribute("family"), Some("Liberation Sans"));
    assert_eq!(font.attribute("style"), Some("BOLD"));
    assert_eq!(font.attribute("size"), Some("30"));
}

#[test]
fn test_builtin_aliases() {
    let defs = Definitions::builtin().unwrap();
    assert_eq!(
        defs.color("Alarm").unwrap().color,
        defs.color("MAJOR").unwrap().color
    );
    assert_eq!(defs.color("Transparent").unwrap().color.alpha, 0);
    assert_eq!(defs.font("Body").unwrap().font, defs.font("Default").unwrap().font);
}

#[test]
fn test_forward_alias_is_rejected() {
    init_logger();
    let config = Config::default().with_color_def(test_file("forward_alias.def"));
    match Definitions::load(&config) {
        Err(PhoebusError::UndefinedAlias { line, name, target }) => {
            assert_eq!(line, 2);
            assert_eq!(name, "Alarm");
            assert_eq!(target, "MAJOR");
        }
        other => panic!("expected UndefinedAlias, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_component_is_rejected() {
    let err = ColorTable::load(test_file("bad_component.def")).unwrap_err();
    assert!(matches!(
        err,
        PhoebusError::InvalidColorComponent {
            component: "green",
            ref value,
            line: Some(2),
        } if value == "300"
    ));
}

#[test]
fn test_missing_definition_file() {
    let config = Config::default().with_font_def(test_file("does_not_exist.def"));
    let err = Definitions::load(&config).unwrap_err();
    match err {
        PhoebusError::DefinitionFile { path, .. } => {
            assert!(path.ends_with("does_not_exist.def"));
        }
        other => panic!("expected DefinitionFile, got {:?}", other),
    }
}
