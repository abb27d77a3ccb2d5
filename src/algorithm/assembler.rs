//! The assembler: owns all per-run state and performs one bounded unit of
//! work per `iterate` call
//!
//! Each call places exactly one tile, performs one backtrack batch, or
//! reports that no further progress is possible. The caller drives the loop
//! and imposes any iteration ceiling; the engine itself never raises an
//! error in steady state.

use crate::algorithm::backtrack::BacktrackPolicy;
use crate::algorithm::bitset::FormBitset;
use crate::algorithm::cache::{CacheStats, OptionsCache};
use crate::algorithm::locus::{BoundaryEdge, DeadLoci, LocusAnalysis, LocusSignature};
use crate::algorithm::selection::{Selector, frontier_score};
use crate::io::configuration::{DEAD_LOCUS_PRUNE_THRESHOLD, LOCUS_RECORD_CUTOFF};
use crate::spatial::points::PointSet;
use crate::spatial::topology::{Coord, DIAGONAL_OFFSETS, Topology};
use crate::tiles::alphabet::Alphabet;
use crate::tiles::table::{BaseForm, FormTable};
use std::collections::{HashMap, HashSet, VecDeque};

const ORIGIN: Coord = [0, 0];

/// Incremental randomized constraint-satisfaction tiling engine
///
/// All mutable state lives here and is owned exclusively by one instance;
/// independent runs use independent assemblers. Inputs are trusted
/// preconditions: forms must match the topology edge count and the alphabet
/// must be a valid involution, both enforced by the construction layer.
pub struct Assembler {
    topology: Topology,
    alphabet: Alphabet,
    forms: FormTable,
    point_set: PointSet,
    /// Placed tiles; mutated only through `put`
    tiles: HashMap<Coord, usize>,
    /// Candidate sites for the next placement, lazily filtered
    dirty: HashSet<Coord>,
    options_cache: OptionsCache,
    dead_loci: DeadLoci,
    /// Placement order, for backtracking
    history: Vec<Coord>,
    /// Net changes since last drained, for incremental observers
    changes: HashMap<Coord, Option<usize>>,
    selector: Selector,
    policy: BacktrackPolicy,
}

impl Assembler {
    /// Create an engine over the given tile set and region
    ///
    /// Base forms are expanded into their rotation table immediately. The
    /// seed fixes every stochastic choice the run will make.
    pub fn new(
        topology: Topology,
        alphabet: Alphabet,
        base_forms: &[BaseForm],
        point_set: PointSet,
        seed: u64,
    ) -> Self {
        let forms = FormTable::expand(base_forms, topology.edge_count());
        Self {
            topology,
            alphabet,
            forms,
            point_set,
            tiles: HashMap::new(),
            dirty: HashSet::new(),
            options_cache: OptionsCache::new(),
            dead_loci: DeadLoci::new(),
            history: Vec::new(),
            changes: HashMap::new(),
            selector: Selector::new(seed),
            policy: BacktrackPolicy::default(),
        }
    }

    /// Replace the backtracking depth distribution
    pub fn set_backtrack_policy(&mut self, policy: BacktrackPolicy) {
        self.policy = policy;
    }

    /// Read-only view of the placed tiles (coordinate to form index)
    pub const fn tiles(&self) -> &HashMap<Coord, usize> {
        &self.tiles
    }

    /// The expanded rotation table, including provenance lookups
    pub const fn form_table(&self) -> &FormTable {
        &self.forms
    }

    /// The current eligible region
    pub const fn point_set(&self) -> &PointSet {
        &self.point_set
    }

    /// Drain accumulated changes since the last call
    ///
    /// Maps each changed coordinate to its prior form (`None` for empty).
    /// A change that restored the original value has already canceled out.
    pub fn take_changes(&mut self) -> HashMap<Coord, Option<usize>> {
        std::mem::take(&mut self.changes)
    }

    /// Number of locus signatures currently recorded as dead
    pub fn dead_locus_count(&self) -> usize {
        self.dead_loci.len()
    }

    /// Options-cache hit/miss counters
    pub const fn cache_stats(&self) -> CacheStats {
        self.options_cache.stats
    }

    /// Place or remove a tile, recording the net change
    ///
    /// Removal marks the coordinate itself dirty; both directions mark every
    /// empty in-region neighbor dirty. No compatibility validation happens
    /// here — correctness is enforced upstream by candidate filtering.
    pub fn put(&mut self, coord: Coord, value: Option<usize>) {
        use std::collections::hash_map::Entry;

        let prior = self.tiles.get(&coord).copied();
        match self.changes.entry(coord) {
            Entry::Occupied(entry) => {
                // Restoring the pre-change value cancels the log entry
                if *entry.get() == value {
                    entry.remove();
                }
            }
            Entry::Vacant(entry) => {
                // A write that changes nothing is not a change
                if prior != value {
                    entry.insert(prior);
                }
            }
        }

        match value {
            None => {
                if self.tiles.remove(&coord).is_none() {
                    return;
                }
                self.dirty.insert(coord);
            }
            Some(form) => {
                self.tiles.insert(coord, form);
            }
        }

        for link in self.topology.links() {
            let neighbor = link.neighbor(coord);
            if !self.tiles.contains_key(&neighbor) && self.point_set.contains(neighbor) {
                self.dirty.insert(neighbor);
            }
        }
    }

    /// Derive the boundary pattern a tile at `coord` would have to match
    ///
    /// For each edge slot: if the neighbor there is filled, the required
    /// symbol is the complement of the neighbor's facing edge; otherwise the
    /// slot is the wildcard. Depends only on the 1-neighborhood of `coord`.
    pub fn pattern_at(&self, coord: Coord) -> Vec<u8> {
        let blank = self.alphabet.blank();
        let mut pattern = Vec::with_capacity(self.topology.edge_count());
        for link in self.topology.links() {
            let symbol = self.tiles.get(&link.neighbor(coord)).map(|&form| {
                self.alphabet
                    .complement(self.forms.symbol(form, link.reverse).unwrap_or(blank))
            });
            pattern.push(symbol.unwrap_or(self.alphabet.wildcard()));
        }
        pattern
    }

    /// Enumerate candidate forms for `coord`, memoized by boundary pattern
    ///
    /// A form is a candidate iff every non-wildcard pattern slot equals the
    /// form's symbol at that slot exactly (the complement step already
    /// happened during pattern derivation).
    pub fn options(&mut self, coord: Coord) -> Vec<usize> {
        let pattern = self.pattern_at(coord);
        let forms = &self.forms;
        let wildcard = self.alphabet.wildcard();
        self.options_cache
            .get_or_compute(pattern.clone(), || {
                let mut candidates = FormBitset::new(forms.len());
                for index in 0..forms.len() {
                    let admitted = forms
                        .form(index)
                        .is_some_and(|form| pattern_admits(&pattern, form, wildcard));
                    if admitted {
                        candidates.insert(index);
                    }
                }
                candidates
            })
            .to_vec()
    }

    /// Flood-fill region analysis from an empty coordinate
    ///
    /// Walks breadth-first through empty, in-region cells, collecting every
    /// placed neighbor bordering the fill as a boundary edge. Offsets are
    /// assigned by stepping through the connection table rotated by
    /// `rotation`, so each rotation yields an alternate canonicalization of
    /// the same region for checking against the dead-locus store. The fill
    /// expands from a cell only while it borders at least one placed tile;
    /// on square grids a diagonal placed tile counts, which prevents false
    /// detection of isolated pockets.
    pub fn locus(&self, start: Coord, rotation: usize) -> LocusAnalysis {
        let mut visited: HashSet<Coord> = HashSet::new();
        let mut border: HashSet<Coord> = HashSet::new();
        let mut edges: Vec<BoundaryEdge> = Vec::new();
        let mut todo: VecDeque<(Coord, Coord)> = VecDeque::new();
        todo.push_back((start, ORIGIN));

        while let Some((current, offset)) = todo.pop_front() {
            if !visited.insert(current) {
                continue;
            }

            let mut bordered = false;
            let mut pending: Vec<(Coord, Coord)> = Vec::new();
            for (index, link) in self.topology.links().iter().enumerate() {
                let neighbor = link.neighbor(current);
                if !self.point_set.contains(neighbor) {
                    continue;
                }
                if let Some(&form) = self.tiles.get(&neighbor) {
                    bordered = true;
                    border.insert(neighbor);
                    edges.push(BoundaryEdge {
                        dy: offset[0],
                        dx: offset[1],
                        slot: link.reverse,
                        symbol: self
                            .forms
                            .symbol(form, link.reverse)
                            .unwrap_or(self.alphabet.blank()),
                    });
                } else {
                    let step = self.topology.link_wrapped(index + rotation);
                    pending.push((neighbor, [offset[0] + step.dy, offset[1] + step.dx]));
                }
            }

            if !bordered && self.topology.is_square() {
                bordered = DIAGONAL_OFFSETS.iter().any(|diagonal| {
                    self.tiles
                        .contains_key(&[current[0] + diagonal[0], current[1] + diagonal[1]])
                });
            }

            if bordered {
                todo.extend(pending);
            }
        }

        LocusAnalysis {
            signature: LocusSignature::from_edges(edges),
            visited,
            border,
        }
    }

    /// Reject candidates whose placement would create a known dead locus
    ///
    /// Each candidate is placed hypothetically; every unfilled in-region
    /// neighbor not already covered by a visited set from this call has its
    /// locus computed and checked against the dead-locus store. The
    /// hypothetical placement is always undone before returning.
    pub fn filter_options(&mut self, coord: Coord, candidates: &[usize]) -> Vec<usize> {
        let mut survivors = Vec::new();
        for &candidate in candidates {
            self.tiles.insert(coord, candidate);
            let mut rejected = false;
            let mut visited_sets: Vec<HashSet<Coord>> = Vec::new();

            for link in self.topology.links() {
                let neighbor = link.neighbor(coord);
                if self.tiles.contains_key(&neighbor) || !self.point_set.contains(neighbor) {
                    continue;
                }
                if visited_sets.iter().any(|set| set.contains(&neighbor)) {
                    continue;
                }
                let analysis = self.locus(neighbor, 0);
                let dead = self.dead_loci.contains(&analysis.signature);
                visited_sets.push(analysis.visited);
                if dead {
                    rejected = true;
                    break;
                }
            }

            self.tiles.remove(&coord);
            if !rejected {
                survivors.push(candidate);
            }
        }
        survivors
    }

    /// Advance the assembly by one bounded unit of work
    ///
    /// Performs exactly one placement or one backtrack batch. Returns `false`
    /// once no further progress is possible; that state is terminal for this
    /// run and only an external restart recovers from it.
    pub fn iterate(&mut self) -> bool {
        if self.tiles.is_empty() {
            if self.forms.is_empty() {
                return false;
            }
            self.put(ORIGIN, Some(0));
            self.history.push(ORIGIN);
            return true;
        }

        let frontier = self.refresh_frontier();
        if frontier.is_empty() {
            return false;
        }

        // Scan in score order; an option count below 2 commits immediately,
        // otherwise keep the most constrained coordinate seen
        let mut chosen: Option<(Coord, Vec<usize>)> = None;
        let mut fallback_count = usize::MAX;
        for coord in frontier {
            let options = self.options(coord);
            let count = options.len();
            if count < 2 {
                chosen = Some((coord, options));
                break;
            }
            if count < fallback_count {
                fallback_count = count;
                chosen = Some((coord, options));
            }
        }
        let Some((target, candidates)) = chosen else {
            return false;
        };

        let survivors = self.filter_options(target, &candidates);
        if !survivors.is_empty() {
            let weights: Vec<f64> = survivors
                .iter()
                .map(|&form| self.forms.weight(form))
                .collect();
            if let Some(pick) = self.selector.weighted_choice(&weights) {
                if let Some(&form) = survivors.get(pick) {
                    self.put(target, Some(form));
                    self.history.push(target);
                    return true;
                }
            }
            // All surviving candidates carry zero weight: treat as dead end
        }

        self.backtrack(target)
    }

    /// Replace the eligible region, evicting any tile left outside it
    ///
    /// Evictions go through `put`, so they are change-logged and re-mark the
    /// surrounding (now possibly newly eligible) coordinates dirty. Dead-locus
    /// signatures recorded under the prior geometry are not invalidated.
    pub fn update_point_set(&mut self, point_set: PointSet) {
        let evicted: Vec<Coord> = self
            .tiles
            .keys()
            .filter(|coord| !point_set.contains(**coord))
            .copied()
            .collect();
        self.point_set = point_set;
        for coord in evicted {
            self.put(coord, None);
        }
    }

    /// Whether any placed neighbor presents a non-blank edge toward `coord`
    fn receives_edge(&self, coord: Coord) -> bool {
        let blank = self.alphabet.blank();
        self.topology.links().iter().any(|link| {
            self.tiles
                .get(&link.neighbor(coord))
                .is_some_and(|&form| self.forms.symbol(form, link.reverse).unwrap_or(blank) != blank)
        })
    }

    /// Drop stale dirty entries and return the frontier sorted by roundness
    fn refresh_frontier(&mut self) -> Vec<Coord> {
        let stale: Vec<Coord> = self
            .dirty
            .iter()
            .copied()
            .filter(|&coord| {
                self.tiles.contains_key(&coord)
                    || !self.point_set.contains(coord)
                    || !self.receives_edge(coord)
            })
            .collect();
        for coord in stale {
            self.dirty.remove(&coord);
        }
        if self.dirty.is_empty() {
            return Vec::new();
        }

        let count = self.dirty.len() as f64;
        let mut centroid = [0.0, 0.0];
        for coord in &self.dirty {
            centroid[0] += coord[0] as f64;
            centroid[1] += coord[1] as f64;
        }
        centroid[0] /= count;
        centroid[1] /= count;

        let mut scored: Vec<(f64, Coord)> = self
            .dirty
            .iter()
            .map(|&coord| (frontier_score(coord, centroid), coord))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, coord)| coord).collect()
    }

    /// Record the failed region as dead and unwind a random depth
    fn backtrack(&mut self, failed: Coord) -> bool {
        // Each rotation canonicalizes the region differently; record them
        // all, stopping once a large signature has been stored
        for rotation in 0..self.topology.edge_count() {
            let analysis = self.locus(failed, rotation);
            let large = analysis.signature.len() > LOCUS_RECORD_CUTOFF;
            self.dead_loci.insert(analysis.signature);
            if large {
                break;
            }
        }

        if self.dead_loci.len() > DEAD_LOCUS_PRUNE_THRESHOLD {
            self.dead_loci.prune(&mut self.selector);
        }

        let mut depth = self.policy.draw_depth(self.tiles.len(), &mut self.selector) as i64;
        while !self.history.is_empty() {
            // Keep popping past the drawn depth while the failed coordinate
            // still sits inside a recorded dead locus
            if depth <= 0 && !self.dead_loci.contains(&self.locus(failed, 0).signature) {
                break;
            }
            if let Some(coord) = self.history.pop() {
                self.put(coord, None);
            }
            depth -= 1;
        }

        !self.tiles.is_empty()
    }
}

/// Whether a form satisfies every non-wildcard slot of a pattern
fn pattern_admits(pattern: &[u8], form: &[u8], wildcard: u8) -> bool {
    pattern
        .iter()
        .zip(form.iter())
        .all(|(&required, &actual)| required == wildcard || required == actual)
}
