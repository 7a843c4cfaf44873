// src/application/ports/util.rs

/// Text normalization behind slug derivation: lowercase, ASCII-hyphenated,
/// runs of non-alphanumerics collapsed to single hyphens.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
