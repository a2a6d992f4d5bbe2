use std::sync::Arc;

use axum::extract::FromRef;
use axum_template::engine::Engine;
use derive_new::new;
use tera::Tera;

use crate::view::View;

pub type AppEngine = Engine<Tera>;

pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";

#[derive(Clone, FromRef, new)]
pub struct App {
    pub engine: AppEngine,
    pub view: Arc<View>,
}

/// Templates are compiled into the binary so the server runs from any
/// working directory.
pub fn create_engine() -> Result<AppEngine, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(
        DASHBOARD_TEMPLATE,
        include_str!("../../templates/dashboard.html"),
    )?;

    Ok(Engine::new(tera))
}
