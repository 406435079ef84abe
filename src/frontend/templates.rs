use tera::Tera;

use crate::error::AppError;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Initialize the Tera template engine with the embedded page.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(
        INDEX_TEMPLATE,
        include_str!("../../templates/index.html"),
    )?;
    tera.autoescape_on(vec![".html"]);
    Ok(tera)
}
