//! HTML templates for the fortunes view

use std::path::Path;
use tera::Tera;

/// Template name for the all-fortunes page
pub const FORTUNES_PAGE: &str = "fortunes.html";

/// Compile the fortunes template from `template_dir`
///
/// Called once at startup; a missing or malformed template refuses
/// startup rather than failing on live traffic.
pub fn load(template_dir: &Path) -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_template_file(template_dir.join(FORTUNES_PAGE), Some(FORTUNES_PAGE))?;
    Ok(tera)
}
