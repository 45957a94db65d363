/// Candidate scoring.
///
/// `score = rank_base + geo_bonus + history_bonus`, a non-negative integer
/// that is deterministic for fixed inputs. The ordering exported here is
/// the assigner's single source of determinism.
use crate::domain::{Candidate, Partner, Rank, ScoredCandidate};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Awarded when the partner's office equals the candidate market.
pub const GEO_BONUS: i64 = 30;

/// Upper bound of the publication-history bonus.
pub const HISTORY_BONUS_MAX: i64 = 20;

fn rank_base(rank: Rank) -> i64 {
    match rank {
        Rank::APlus => 80,
        Rank::A => 50,
        Rank::B => 20,
        Rank::C => 15,
        Rank::Pending | Rank::Unranked => 0,
    }
}

// Linear in the observed rate, bounded to [0, HISTORY_BONUS_MAX]. An
// unknown rate or a thin (unsupported) grain contributes nothing - it is
// not treated as a zero rate.
fn history_bonus(candidate: &Candidate) -> i64 {
    if !candidate.supported {
        return 0;
    }
    match candidate.publication_rate {
        Some(rate) => ((rate * HISTORY_BONUS_MAX as f64).round() as i64)
            .clamp(0, HISTORY_BONUS_MAX),
        None => 0,
    }
}

/// Score every candidate and return them in assignment order.
pub fn compute_candidate_scores(
    candidates: Vec<Candidate>,
    partners: &[Partner],
) -> Vec<ScoredCandidate> {
    let office_by_partner: HashMap<i64, &str> = partners
        .iter()
        .map(|p| (p.person_id, p.office.as_str()))
        .collect();

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let geo = match office_by_partner.get(&candidate.person_id) {
                Some(office) if *office == candidate.market => GEO_BONUS,
                _ => 0,
            };
            let score = (rank_base(candidate.rank) + geo + history_bonus(&candidate)).max(0);
            ScoredCandidate { candidate, score }
        })
        .collect();

    scored.sort_by(compare_scored);
    scored
}

/// Total deterministic order: score desc, available_days desc, person_id
/// asc, vin asc.
pub fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(b.candidate.available_days.cmp(&a.candidate.available_days))
        .then(a.candidate.person_id.cmp(&b.candidate.person_id))
        .then(a.candidate.vin.cmp(&b.candidate.vin))
}
