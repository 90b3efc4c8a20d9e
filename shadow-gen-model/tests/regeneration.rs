//! The checked-in shadow modules must match what a fresh generation pass
//! produces from the schema documents. A drift here means someone edited a
//! generated file by hand or changed the schema without regenerating.

use std::fs;
use std::path::Path;

use shadow_gen::{DriverProvider, MemorySink, NullabilityOverrides, SchemaDoc, SchemaRegistry};

const SCHEMA_FILES: &[&str] = &[
    "schema/flex_component.json",
    "schema/flex_container.json",
    "schema/flex_unit.json",
];

const CHECKED_IN: &[(&str, &str, &str)] = &[
    ("flex::component", "VideoShadow", "src/flex/component/video_shadow.rs"),
    ("flex::component", "TextShadow", "src/flex/component/text_shadow.rs"),
    ("flex::component", "FlexBoxShadow", "src/flex/component/flex_box_shadow.rs"),
    ("flex::container", "BubbleShadow", "src/flex/container/bubble_shadow.rs"),
    ("flex::container", "CarouselShadow", "src/flex/container/carousel_shadow.rs"),
];

fn manifest_path(relative: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn registry() -> SchemaRegistry {
    let docs = SCHEMA_FILES.iter().map(|file| {
        let raw = fs::read_to_string(manifest_path(file))
            .unwrap_or_else(|err| panic!("cannot read {file}: {err}"));
        serde_json::from_str::<SchemaDoc>(&raw)
            .unwrap_or_else(|err| panic!("cannot parse {file}: {err}"))
    });
    SchemaRegistry::from_docs(docs)
}

#[test]
fn checked_in_shadows_match_a_fresh_pass() {
    let provider = DriverProvider::new(NullabilityOverrides::builtin());
    let mut sink = MemorySink::new();
    let report = provider.create(&mut sink).run(
        &registry(),
        &[
            "flex::component".to_string(),
            "flex::container".to_string(),
            "flex::unit".to_string(),
        ],
    );

    assert!(report.is_clean(), "pass failed: {:?}", report.errors);
    assert_eq!(report.generated.len(), CHECKED_IN.len());

    for (namespace, name, file) in CHECKED_IN {
        let generated = sink
            .get(namespace, name)
            .unwrap_or_else(|| panic!("no artifact for {namespace}::{name}"));
        let checked_in = fs::read_to_string(manifest_path(file))
            .unwrap_or_else(|err| panic!("cannot read {file}: {err}"));
        assert_eq!(
            generated.trim_end(),
            checked_in.trim_end(),
            "{file} has drifted from the generator output; regenerate it"
        );
    }
}

#[test]
fn layout_unit_gets_no_shadow() {
    let provider = DriverProvider::new(NullabilityOverrides::builtin());
    let mut sink = MemorySink::new();
    let report = provider
        .create(&mut sink)
        .run(&registry(), &["flex::unit".to_string()]);

    assert!(report.is_clean());
    assert!(report.generated.is_empty());
    assert!(sink.is_empty());
}
