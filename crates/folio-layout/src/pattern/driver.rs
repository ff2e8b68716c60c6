//! Runs the registry over a whole item list.

use std::collections::HashMap;

use log::debug;

use super::{PatternKind, PatternRegistry, PatternResult, WindowItem};
use crate::{
    options::LayoutOptions,
    resolve::NormalizedItem,
    row::{SizedItem, size_row, size_stacked},
};

/// A sized row produced by one pattern result.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow<'a> {
    kind: PatternKind,
    items: Vec<SizedItem<'a>>,
}

impl<'a> PatternRow<'a> {
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Items in display order; offsets are relative to the row.
    pub fn items(&self) -> &[SizedItem<'a>] {
        &self.items
    }

    /// Height of the row: the lowest edge of any of its items.
    pub fn height(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.bounds().max_y())
            .fold(0.0, f64::max)
    }
}

/// Splits `items` into pattern results with the built-in matchers.
pub fn match_all(items: &[NormalizedItem<'_>], options: &LayoutOptions) -> Vec<PatternResult> {
    match_all_with(&PatternRegistry::new(options), items, options)
}

/// Splits `items` into pattern results with the given registry.
///
/// Each step looks at the first `window_size` items not yet consumed, takes
/// the registry's result and removes the consumed items. Every item ends up
/// in exactly one result.
pub fn match_all_with(
    registry: &PatternRegistry,
    items: &[NormalizedItem<'_>],
    options: &LayoutOptions,
) -> Vec<PatternResult> {
    let chunk_size = options.effective_pattern_chunk_size();
    let mut pending: Vec<WindowItem<'_>> = items
        .iter()
        .map(|item| WindowItem::new(*item, chunk_size))
        .collect();

    let mut results = Vec::new();
    let mut emitted = 0;

    while !pending.is_empty() {
        let window_len = options.window_size().min(pending.len());
        let Some(result) = registry.run(&pending[..window_len], emitted) else {
            break;
        };

        emitted += result.len();
        pending.retain(|item| !result.indices().contains(&item.source_index()));
        results.push(result);
    }

    debug!(items = items.len(), rows = results.len(); "Matched patterns");
    results
}

/// Matches patterns and sizes every resulting row to `container_width`.
///
/// Composites put the main item on the left and stack the secondaries on
/// the right; every other result is sized as a plain row.
pub fn process_patterns_for_display<'a>(
    items: &[NormalizedItem<'a>],
    container_width: f64,
    options: &LayoutOptions,
) -> Vec<PatternRow<'a>> {
    let by_index: HashMap<usize, NormalizedItem<'a>> = items
        .iter()
        .map(|item| (item.source_index(), *item))
        .collect();

    match_all(items, options)
        .into_iter()
        .map(|result| {
            let row: Vec<NormalizedItem<'a>> = result
                .indices()
                .iter()
                .filter_map(|index| by_index.get(index).copied())
                .collect();

            let sized = match (result.kind().is_composite(), row.split_first()) {
                (true, Some((main, stacked))) => size_stacked(*main, stacked, container_width),
                _ => size_row(&row, container_width),
            };

            PatternRow {
                kind: result.kind(),
                items: sized,
            }
        })
        .collect()
}
