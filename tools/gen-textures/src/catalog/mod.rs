//! Every texture the tool knows how to generate
//!
//! Names are unique and double as output file stems, so `generate rock`
//! writes `rock.png`.

mod fuze_creek;
mod gui;

use anyhow::{bail, Result};
use tex_gen::TextureSpec;

/// The full catalog, FuzeCreek set first
pub fn all() -> Vec<TextureSpec> {
    let mut specs = fuze_creek::textures();
    specs.extend(gui::textures());
    specs
}

/// Pick textures by name, in the order requested
///
/// Fails listing every unknown name; duplicates are generated once.
pub fn select(names: &[String]) -> Result<Vec<TextureSpec>> {
    let mut catalog: Vec<Option<TextureSpec>> = all().into_iter().map(Some).collect();
    let mut selected = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();

    for name in names {
        match catalog
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| &s.name == name))
        {
            Some(index) => selected.extend(catalog[index].take()),
            None if selected.iter().any(|s: &TextureSpec| &s.name == name) => {}
            None => unknown.push(name.as_str()),
        }
    }

    if !unknown.is_empty() {
        bail!(
            "Unknown texture name(s): {} (run `gen-textures list` to see all)",
            unknown.join(", ")
        );
    }
    Ok(selected)
}
