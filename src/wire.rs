//! Injection of installed front-end dependencies into markup and stylesheets

use crate::error::Result;
use crate::plan::BowerManifest;
use std::path::PathBuf;

/// Updates the include lists of generated files to match a manifest.
pub trait ReferenceWirer {
    fn wire(&self, manifest: &BowerManifest, targets: &[PathBuf]) -> Result<()>;
}

/// Leaves the `bower:` placeholder blocks in place for the build tool's
/// `wiredep` task to fill.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredWirer;

impl ReferenceWirer for DeferredWirer {
    fn wire(&self, manifest: &BowerManifest, targets: &[PathBuf]) -> Result<()> {
        let packages: Vec<_> = manifest.dependencies.keys().map(String::as_str).collect();
        for target in targets {
            log::debug!(
                "Deferring wiring of [{}] into {} to `grunt wiredep`",
                packages.join(", "),
                target.display()
            );
        }
        Ok(())
    }
}
