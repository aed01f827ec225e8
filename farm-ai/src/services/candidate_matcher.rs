//! Candidate matching
//!
//! Picks the botanical search hit that best corresponds to the identified
//! species name. Tiers are tried in order and the first tier with any match
//! wins; within a tier the earliest hit in list order wins.

use crate::models::BotanicalSearchHit;

/// Which rule selected a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Case-insensitive equality on common or scientific name
    Exact,
    /// Substring either way on scientific name
    ScientificSubstring,
    /// Substring either way on common name
    CommonSubstring,
    /// First token of the target against the scientific-name prefix or genus
    Genus,
    /// First hit in the list
    FirstHit,
}

/// Best-matching hit, or `None` for an empty hit list
pub fn find_best_match<'a>(
    hits: &'a [BotanicalSearchHit],
    target: &str,
) -> Option<&'a BotanicalSearchHit> {
    match_with_tier(hits, target).map(|(hit, _)| hit)
}

/// Best-matching hit together with the tier that selected it
pub fn match_with_tier<'a>(
    hits: &'a [BotanicalSearchHit],
    target: &str,
) -> Option<(&'a BotanicalSearchHit, MatchTier)> {
    let target = target.trim().to_lowercase();

    let tiers: [(MatchTier, &dyn Fn(&BotanicalSearchHit) -> bool); 4] = [
        (MatchTier::Exact, &|hit| {
            name_of(&hit.common_name).is_some_and(|name| name == target)
                || name_of(&hit.scientific_name).is_some_and(|name| name == target)
        }),
        (MatchTier::ScientificSubstring, &|hit| {
            name_of(&hit.scientific_name).is_some_and(|name| overlaps(&name, &target))
        }),
        (MatchTier::CommonSubstring, &|hit| {
            name_of(&hit.common_name).is_some_and(|name| overlaps(&name, &target))
        }),
        (MatchTier::Genus, &|hit| genus_matches(hit, &target)),
    ];

    for (tier, matches) in tiers {
        if let Some(hit) = hits.iter().find(|hit| matches(hit)) {
            return Some((hit, tier));
        }
    }

    hits.first().map(|hit| (hit, MatchTier::FirstHit))
}

/// Lower-cased, trimmed name; blank names never match
fn name_of(name: &Option<String>) -> Option<String> {
    name.as_deref()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
}

fn overlaps(name: &str, target: &str) -> bool {
    !target.is_empty() && (name.contains(target) || target.contains(name))
}

fn genus_matches(hit: &BotanicalSearchHit, target: &str) -> bool {
    let Some(genus) = target.split_whitespace().next() else {
        return false;
    };

    name_of(&hit.scientific_name).is_some_and(|name| name.starts_with(genus))
        || hit
            .genus_name()
            .is_some_and(|name| name.trim().to_lowercase() == genus)
}
