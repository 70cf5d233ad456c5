//! Bundled configuration documents
//!
//! A config argument that does not name an existing file is looked up here,
//! so `icarus_siren` works from any directory.

/// ICARUS Siren surrogate training configuration
const ICARUS_SIREN: &str = include_str!("../../configs/icarus_siren.yaml");

const PRESETS: &[(&str, &str)] = &[("icarus_siren", ICARUS_SIREN)];

/// Names of all bundled presets
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// YAML text of a bundled preset.
///
/// A trailing `.yaml` or `.yml` on `name` is ignored.
pub fn get(name: &str) -> Option<&'static str> {
    let stem = name
        .strip_suffix(".yaml")
        .or_else(|| name.strip_suffix(".yml"))
        .unwrap_or(name);
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == stem)
        .map(|(_, text)| *text)
}
