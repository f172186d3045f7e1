mod dashboard;
mod failed;
mod loading;

pub(crate) use dashboard::render_dashboard;
pub(crate) use failed::render_failed;
pub(crate) use loading::{render_empty, render_loading};
