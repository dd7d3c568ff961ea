// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Multi-field forward index with tag sets

use std::collections::{BTreeSet, HashMap};

use super::tokenizer::{forward_prefixes, tokenize};
use super::SearchField;
use crate::catalog::{Catalog, TagKey, WorkEntry};

/// Prefix postings for one text field
#[derive(Debug, Clone, Default)]
struct FieldIndex {
    postings: HashMap<String, BTreeSet<usize>>,
}

impl FieldIndex {
    fn add(&mut self, id: usize, text: &str) {
        for token in tokenize(text) {
            for prefix in forward_prefixes(&token) {
                self.postings
                    .entry(prefix.to_string())
                    .or_default()
                    .insert(id);
            }
        }
    }

    /// Ids whose text has, for every query token, a word starting with it
    fn matching(&self, tokens: &[String]) -> BTreeSet<usize> {
        let mut sets = tokens.iter().map(|token| self.postings.get(token));

        let mut matched = match sets.next() {
            Some(Some(first)) => first.clone(),
            _ => return BTreeSet::new(),
        };
        for set in sets {
            match set {
                Some(set) => matched.retain(|id| set.contains(id)),
                None => return BTreeSet::new(),
            }
            if matched.is_empty() {
                break;
            }
        }
        matched
    }
}

/// Searchable view of one catalog snapshot.
///
/// Built with [`SearchIndex::new`] and never mutated afterwards; to index a
/// new snapshot, build a new value and replace the old one.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    works: Vec<WorkEntry>,
    fields: [FieldIndex; 3],
    tags: Vec<BTreeSet<TagKey>>,
    default_fields: Vec<SearchField>,
}

impl SearchIndex {
    /// Index every work of `catalog` over all fields
    pub fn new(catalog: &Catalog) -> Self {
        let mut fields: [FieldIndex; 3] = Default::default();
        let mut tags = Vec::with_capacity(catalog.len());

        for work in catalog {
            fields[SearchField::Title.slot()].add(work.id, &work.title);
            fields[SearchField::Description.slot()].add(work.id, &work.description);
            fields[SearchField::Year.slot()].add(work.id, &work.year);
            tags.push(work.tags.iter().filter_map(|tag| TagKey::new(tag)).collect());
        }

        tracing::info!(
            works = catalog.len(),
            title_prefixes = fields[0].postings.len(),
            description_prefixes = fields[1].postings.len(),
            year_prefixes = fields[2].postings.len(),
            "search index built"
        );

        Self {
            works: catalog.works().to_vec(),
            fields,
            tags,
            default_fields: SearchField::ALL.to_vec(),
        }
    }

    /// Replace the fields used by [`search_default`](Self::search_default)
    /// and [`search_within_subset`](Self::search_within_subset)
    pub fn with_default_fields(mut self, fields: &[SearchField]) -> Self {
        self.default_fields = dedup_fields(fields);
        self
    }

    pub fn default_fields(&self) -> &[SearchField] {
        &self.default_fields
    }

    pub fn works(&self) -> &[WorkEntry] {
        &self.works
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Works matching `term` in any of `fields`, in catalog order.
    ///
    /// A blank term returns the whole catalog. Within one field every query
    /// word must prefix some word of that field; fields are ORed together.
    pub fn search(&self, term: &str, fields: &[SearchField]) -> Vec<&WorkEntry> {
        if term.trim().is_empty() {
            return self.works.iter().collect();
        }

        let ids = self.matching_ids(term, fields);
        tracing::debug!(term, ?fields, matches = ids.len(), "search");
        ids.into_iter().map(|id| &self.works[id]).collect()
    }

    /// [`search`](Self::search) over the default fields
    pub fn search_default(&self, term: &str) -> Vec<&WorkEntry> {
        self.search(term, &self.default_fields)
    }

    /// Works carrying at least one of `tags`, in catalog order.
    ///
    /// Tags are compared by [`TagKey`]; if no requested tag survives
    /// normalization the whole catalog is returned.
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&WorkEntry> {
        let wanted: BTreeSet<TagKey> = tags
            .iter()
            .filter_map(|tag| TagKey::new(tag.as_ref()))
            .collect();

        if wanted.is_empty() {
            return self.works.iter().collect();
        }

        let matched: Vec<&WorkEntry> = self
            .works
            .iter()
            .zip(&self.tags)
            .filter(|(_, keys)| !keys.is_disjoint(&wanted))
            .map(|(work, _)| work)
            .collect();

        tracing::debug!(?wanted, matches = matched.len(), "tag filter");
        matched
    }

    /// Members of `subset` matching `term` over the default fields, in
    /// `subset` order. A blank term returns `subset` unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `subset` holds a work that is not part of this index, which
    /// means the caller queried with entries from another catalog snapshot.
    pub fn search_within_subset<'s>(
        &self,
        term: &str,
        subset: &[&'s WorkEntry],
    ) -> Vec<&'s WorkEntry> {
        if term.trim().is_empty() {
            return subset.to_vec();
        }

        let ids = self.matching_ids(term, &self.default_fields);
        subset
            .iter()
            .copied()
            .filter(|work| {
                assert!(
                    self.works.get(work.id) == Some(*work),
                    "work {} ('{}') is not part of this search index",
                    work.id,
                    work.title
                );
                ids.contains(&work.id)
            })
            .collect()
    }

    fn matching_ids(&self, term: &str, fields: &[SearchField]) -> BTreeSet<usize> {
        let tokens = tokenize(term);
        if tokens.is_empty() {
            return BTreeSet::new();
        }

        dedup_fields(fields)
            .into_iter()
            .flat_map(|field| self.fields[field.slot()].matching(&tokens))
            .collect()
    }
}

fn dedup_fields(fields: &[SearchField]) -> Vec<SearchField> {
    let mut unique = fields.to_vec();
    unique.sort();
    unique.dedup();
    unique
}
