mod csv;
mod display;
mod format;
mod json;

pub(crate) use csv::export_csv;
pub(crate) use display::render_launches;
pub(crate) use json::export_json;
