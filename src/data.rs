// src/data.rs

use crate::model::Question;

/// Base path the per-question illustrations are resolved against.
/// Overridable at build time: `PHYSICS_QUIZ_ASSET_BASE=/fizika/ cargo build`.
pub fn image_base_path() -> &'static str {
    option_env!("PHYSICS_QUIZ_ASSET_BASE").unwrap_or("assets/")
}

/// Resolution rule: references that already carry the base path are used
/// as-is, everything else gets the base path prepended.
pub fn resolve_image_url(base: &str, url: &str) -> String {
    if url.starts_with(base) {
        url.to_owned()
    } else {
        format!("{base}{url}")
    }
}

/// Loads the question bank from the embedded YAML.
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("embedded question bank is not valid YAML")
}
