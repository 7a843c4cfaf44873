// src/domain/slug.rs
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};

/// Prefix-lookup capability over the existing slugs of one namespace.
///
/// `field` selects which slug-bearing field of the namespace to search when
/// a record type carries more than one; implementations reject field names
/// they do not know. The returned set reflects committed state at call time,
/// with whatever read consistency the store provides.
#[async_trait]
pub trait SlugPrefixLookup: Send + Sync {
    async fn slugs_with_prefix(&self, field: &str, prefix: &str) -> DomainResult<HashSet<String>>;
}

/// Wraps a lookup so one known value stops counting as a collision.
/// [`UniqueSlugService::recompute`] masks a record's current slug with it so
/// the record never trips over its own entry in the candidate set.
pub struct ExcludingSlugLookup<'a> {
    inner: &'a dyn SlugPrefixLookup,
    excluded: Option<&'a str>,
}

impl<'a> ExcludingSlugLookup<'a> {
    pub fn new(inner: &'a dyn SlugPrefixLookup, excluded: Option<&'a str>) -> Self {
        Self { inner, excluded }
    }
}

#[async_trait]
impl SlugPrefixLookup for ExcludingSlugLookup<'_> {
    async fn slugs_with_prefix(
        &self,
        field: &str,
        prefix: &str,
    ) -> DomainResult<HashSet<String>> {
        let mut slugs = self.inner.slugs_with_prefix(field, prefix).await?;
        if let Some(excluded) = self.excluded {
            slugs.remove(excluded);
        }
        Ok(slugs)
    }
}

/// Domain service deriving collision-free slugs from free text.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Derive a slug for `text` that is absent from the slugs `lookup`
    /// currently knows under `field`.
    ///
    /// One prefix query fetches the candidate set. A non-empty set sends the
    /// search into the suffix loop, starting at the set's size; the loop
    /// re-checks membership on every candidate, so a sparse suffix
    /// population still yields a collision-free result. Nothing is reserved
    /// here: a concurrent caller can compute the same slug, and the store's
    /// uniqueness constraint arbitrates the insert.
    pub async fn make_unique(
        &self,
        lookup: &dyn SlugPrefixLookup,
        text: &str,
        field: &str,
    ) -> DomainResult<String> {
        let base = self.generator.slugify(text);
        if base.is_empty() {
            return Err(DomainError::Validation(
                "cannot derive a slug from empty text".into(),
            ));
        }

        let candidates = lookup.slugs_with_prefix(field, &base).await?;
        if candidates.is_empty() {
            return Ok(base);
        }

        let mut suffix = candidates.len() as u64;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !candidates.contains(&candidate) {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }

    /// Recompute the slug of a record that already holds `current`.
    ///
    /// The current slug is kept whenever it is the base derived from `text`
    /// or that base with a numeric suffix, so an unchanged source text keeps
    /// the slug the record already holds even when siblings occupy
    /// neighbouring suffixes. Otherwise the usual derivation runs with
    /// `current` masked from the candidate set.
    pub async fn recompute(
        &self,
        lookup: &dyn SlugPrefixLookup,
        text: &str,
        field: &str,
        current: Option<&str>,
    ) -> DomainResult<String> {
        let base = self.generator.slugify(text);
        if let Some(current) = current {
            if !base.is_empty() && derives_from(current, &base) {
                return Ok(current.to_owned());
            }
        }

        let lookup = ExcludingSlugLookup::new(lookup, current);
        self.make_unique(&lookup, text, field).await
    }
}

fn derives_from(slug: &str, base: &str) -> bool {
    if slug == base {
        return true;
    }
    slug.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}
