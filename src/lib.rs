#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod latch;
pub mod motion;
pub mod viewport;
pub mod visibility;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. after hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::debug!("hydrating portfolio");
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    fn read_sources(dir: &Path, out: &mut String) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                read_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push_str(&fs::read_to_string(&path).unwrap());
            }
        }
    }

    #[test]
    fn every_declared_dependency_is_used() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let manifest = fs::read_to_string(root.join("Cargo.toml")).unwrap();
        let deps = manifest
            .split("[dependencies]")
            .nth(1)
            .and_then(|rest| rest.split("\n[").next())
            .unwrap();
        let mut sources = String::new();
        read_sources(&root.join("src"), &mut sources);

        let names = deps
            .lines()
            .filter_map(|line| line.split_once(" = "))
            .map(|(name, _)| name.trim())
            .filter(|name| !name.is_empty() && !name.starts_with('"'))
            .collect::<Vec<_>>();
        assert!(names.contains(&"leptos"));
        for name in names {
            let path = format!("{}::", name.replace('-', "_"));
            assert!(sources.contains(&path), "{name} is declared but never used");
        }
    }
}
