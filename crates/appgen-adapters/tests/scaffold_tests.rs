//! End-to-end tests: core scaffolder wired to the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use appgen_adapters::{LocalFilesystem, MemoryFilesystem, SimpleRenderer, lvgl_app};
use appgen_core::prelude::*;

fn local() -> Scaffolder {
    Scaffolder::new(
        lvgl_app(),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn in_memory(fs: &MemoryFilesystem) -> Scaffolder {
    Scaffolder::new(
        lvgl_app(),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    )
}

#[test]
fn blink_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join(DEFAULT_OUTPUT_DIR);

    let report = local().generate(&AppName::new("blink"), &out).unwrap();

    let folder = out.join("blink");
    assert!(folder.is_dir());
    assert!(folder.join("assets").is_dir());
    assert_eq!(
        report.written,
        vec![folder.join("blink.h"), folder.join("blink.c")]
    );

    let h = fs::read_to_string(folder.join("blink.h")).unwrap();
    assert!(h.contains("_BLINK_APP_H"));
    assert!(h.contains("ENABLE_APP_BLINK"));
    assert!(h.contains("blink_screen_init"));

    let c = fs::read_to_string(folder.join("blink.c")).unwrap();
    assert!(c.contains(r#"REGISTER_APP("Blink App", NULL, blink_screen_main, blink_screen_init)"#));
}

#[test]
fn output_is_exact_substitution_of_templates() {
    let tmp = tempfile::tempdir().unwrap();
    local().generate(&AppName::new("clock"), tmp.path()).unwrap();

    let h = fs::read_to_string(tmp.path().join("clock/clock.h")).unwrap();
    let expected = appgen_adapters::builtin_templates::LVGL_APP_HEADER
        .replace("sample", "clock")
        .replace("SAMPLE", "CLOCK")
        .replace("Sample", "Clock");
    assert_eq!(h, expected);
}

#[test]
fn exactly_two_files_named_after_lowercase_name() {
    let tmp = tempfile::tempdir().unwrap();
    local().generate(&AppName::new("MyApp"), tmp.path()).unwrap();

    let folder = tmp.path().join("MyApp");
    let mut files: Vec<PathBuf> = fs::read_dir(&folder)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    assert_eq!(files, vec![folder.join("myapp.c"), folder.join("myapp.h")]);

    let c = fs::read_to_string(folder.join("myapp.c")).unwrap();
    assert!(c.contains(r#"REGISTER_APP("MyApp App", NULL, myapp_screen_main, myapp_screen_init)"#));
    let h = fs::read_to_string(folder.join("myapp.h")).unwrap();
    assert!(h.contains("ENABLE_APP_MYAPP"));
}

#[test]
fn running_twice_gives_identical_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let scaffolder = local();
    let name = AppName::new("steps");

    scaffolder.generate(&name, tmp.path()).unwrap();
    let first_h = fs::read(tmp.path().join("steps/steps.h")).unwrap();
    let first_c = fs::read(tmp.path().join("steps/steps.c")).unwrap();

    let second = scaffolder.generate(&name, tmp.path()).unwrap();
    assert_eq!(second.overwritten.len(), 2);
    assert_eq!(fs::read(tmp.path().join("steps/steps.h")).unwrap(), first_h);
    assert_eq!(fs::read(tmp.path().join("steps/steps.c")).unwrap(), first_c);
}

#[test]
fn overwrites_stale_content() {
    let tmp = tempfile::tempdir().unwrap();
    let folder = tmp.path().join("blink");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("blink.h"), "stale").unwrap();

    local().generate(&AppName::new("blink"), tmp.path()).unwrap();
    let h = fs::read_to_string(folder.join("blink.h")).unwrap();
    assert!(!h.contains("stale"));
}

#[test]
fn creates_deep_missing_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("a/b/c/d");

    local().generate(&AppName::new("x"), &out).unwrap();
    let assets = out.join("x/assets");
    assert!(assets.is_dir());
    assert_eq!(fs::read_dir(&assets).unwrap().count(), 0);
}

#[test]
fn no_placeholders_remain_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    local().generate(&AppName::new("weather"), tmp.path()).unwrap();

    for file in ["weather.h", "weather.c"] {
        let text = fs::read_to_string(tmp.path().join("weather").join(file)).unwrap();
        for token in ["sample", "SAMPLE", "Sample"] {
            assert!(!text.contains(token), "{file} still contains {token}");
        }
    }
}

#[test]
fn failure_on_source_leaves_header() {
    let mem = MemoryFilesystem::new();
    mem.deny_writes("out/blink/blink.c");

    let err = in_memory(&mem)
        .generate(&AppName::new("blink"), "out")
        .unwrap_err();

    assert_eq!(err.path(), Some(Path::new("out/blink/blink.c")));
    assert!(mem.read_file(Path::new("out/blink/blink.h")).is_some());
    assert!(mem.read_file(Path::new("out/blink/blink.c")).is_none());
}

#[test]
fn empty_name_is_accepted() {
    let mem = MemoryFilesystem::new();
    let report = in_memory(&mem).generate(&AppName::new(""), "out").unwrap();

    assert_eq!(
        report.written,
        vec![PathBuf::from("out/.h"), PathBuf::from("out/.c")]
    );
    assert!(mem.is_dir(Path::new("out/assets")));
}

#[test]
fn plan_then_apply_matches_generate() {
    let a = MemoryFilesystem::new();
    let b = MemoryFilesystem::new();
    let name = AppName::new("Compass");

    in_memory(&a).generate(&name, "apps").unwrap();
    let s = in_memory(&b);
    let plan = s.plan(&name, "apps").unwrap();
    assert!(b.list_files().is_empty());
    s.apply(&plan).unwrap();

    assert_eq!(a.list_files(), b.list_files());
    for path in a.list_files() {
        assert_eq!(a.read_file(&path), b.read_file(&path));
    }
}
