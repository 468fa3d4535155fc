//! Infrastructure adapters for Stamp.
//!
//! This crate implements the ports defined in `stamp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::GoTemplateRenderer;
pub use store::{DirectoryStore, EmbeddedStore, InMemoryStore};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use stamp_core::application::{GenerateService, GenerationRequest};
    use stamp_core::domain::{FailureStage, InjectionValue, OutputTarget};

    use super::*;

    fn service(store: &InMemoryStore, fs: &MemoryFilesystem) -> GenerateService {
        GenerateService::new(
            Box::new(store.clone()),
            Box::new(GoTemplateRenderer::new()),
            Box::new(fs.clone()),
        )
    }

    fn request(dir: &str, prefix: &str, value: &str) -> GenerationRequest {
        GenerationRequest::new(
            OutputTarget::new(dir, prefix),
            InjectionValue::new(value).unwrap(),
        )
    }

    #[test]
    fn renders_logo_with_prefix() {
        let store = InMemoryStore::with_templates([("logo.tmpl", "<svg>{{.}}</svg>")]);
        let fs = MemoryFilesystem::new();

        let report = service(&store, &fs)
            .run(&request("out", "app_", "hello"))
            .unwrap();

        assert_eq!(report.generated_count(), 1);
        assert!(fs.has_directory(Path::new("out")));
        assert_eq!(
            fs.read_file(Path::new("out/app_logo")).as_deref(),
            Some("<svg>hello</svg>")
        );
    }

    #[test]
    fn broken_template_does_not_stop_siblings() {
        let store = InMemoryStore::with_templates([
            ("a.tmpl", "{{.}}"),
            ("b.tmpl", "<svg>{{ ."),
            ("c.tmpl", "[{{.}}]"),
        ]);
        let fs = MemoryFilesystem::new();

        let report = service(&store, &fs).run(&request("out", "", "v")).unwrap();

        assert_eq!(report.generated_count(), 2);
        let failed: Vec<_> = report.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].template, "b.tmpl");
        assert_eq!(failed[0].failure().unwrap().stage, FailureStage::Parse);
        assert_eq!(
            fs.list_files(),
            vec![PathBuf::from("out/a"), PathBuf::from("out/c")]
        );
    }

    #[test]
    fn field_lookup_on_the_value_is_a_render_failure() {
        let store = InMemoryStore::with_templates([("u.tmpl", "x {{ .Nope }}")]);
        let fs = MemoryFilesystem::new();

        let report = service(&store, &fs).run(&request("out", "", "v")).unwrap();

        let outcome = &report.outcomes[0];
        assert_eq!(outcome.failure().unwrap().stage, FailureStage::Render);
        // The file was created before rendering started.
        assert_eq!(outcome.output.as_deref(), Some(Path::new("out/u")));
        assert!(fs.read_file(Path::new("out/u")).is_some());
    }

    #[test]
    fn denied_directory_is_fatal_and_writes_nothing() {
        let store = InMemoryStore::with_templates([("a.tmpl", "{{.}}")]);
        let fs = MemoryFilesystem::new();
        fs.deny("locked");

        let err = service(&store, &fs)
            .run(&request("locked", "", "v"))
            .unwrap_err();

        assert!(err.to_string().contains("Could not create target directory"));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn embedded_bundle_dry_run_plans_every_template() {
        let fs = MemoryFilesystem::new();
        let service = GenerateService::new(
            Box::new(EmbeddedStore::new()),
            Box::new(GoTemplateRenderer::new()),
            Box::new(fs.clone()),
        );

        let report = service
            .run(&request("out", "", "Acme").dry_run(true))
            .unwrap();

        assert_eq!(report.planned_count(), 3);
        assert_eq!(report.generated_count(), 0);
        assert!(fs.list_files().is_empty());
        assert!(!fs.has_directory(Path::new("out")));
    }
}
