//! Command handlers.
//!
//! Each handler translates CLI arguments into core requests, calls the
//! service and displays the result. No business logic lives here.

use std::path::Path;

use tracing::debug;

use stamp_adapters::{DirectoryStore, EmbeddedStore, GoTemplateRenderer, LocalFilesystem};
use stamp_core::application::{GenerateService, TemplateStore};

pub mod completions;
pub mod generate;
pub mod list;

/// Pick the template source: a directory when `--templates` is given,
/// the built-in bundle otherwise.
fn template_store(templates: Option<&Path>) -> Box<dyn TemplateStore> {
    match templates {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            Box::new(DirectoryStore::new(dir))
        }
        None => Box::new(EmbeddedStore::new()),
    }
}

/// Wire the production adapters into a [`GenerateService`].
pub(crate) fn build_service(templates: Option<&Path>) -> GenerateService {
    GenerateService::new(
        template_store(templates),
        Box::new(GoTemplateRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_built_in_bundle() {
        assert_eq!(template_store(None).describe(), "built-in templates");
    }

    #[test]
    fn directory_store_names_its_root() {
        let store = template_store(Some(Path::new("my-templates")));
        assert!(store.describe().contains("my-templates"));
    }
}
