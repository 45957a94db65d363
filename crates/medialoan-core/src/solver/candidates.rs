/// Candidate join: intersects availability, eligibility, cooldown and
/// publication into the weekly candidate set.
use crate::domain::{
    AvailabilityDay, Candidate, CooldownFlag, Eligibility, Partner, PublicationStat, Rank,
};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Two-level cooldown lookup: `(person, make, model)` first, then the
/// make-grain rows recorded when history had no model. Absent grains are
/// in the clear.
struct CooldownIndex<'a> {
    by_model: HashMap<(i64, &'a str, &'a str), &'a CooldownFlag>,
    by_make: HashMap<(i64, &'a str), &'a CooldownFlag>,
}

impl<'a> CooldownIndex<'a> {
    fn build(flags: &'a [CooldownFlag]) -> Self {
        let mut by_model = HashMap::new();
        let mut by_make = HashMap::new();
        for flag in flags {
            match flag.model.as_deref() {
                Some(model) => {
                    by_model.insert((flag.person_id, flag.make.as_str(), model), flag);
                }
                None => {
                    by_make.insert((flag.person_id, flag.make.as_str()), flag);
                }
            }
        }
        Self { by_model, by_make }
    }

    fn is_ok(&self, person_id: i64, make: &str, model: &str) -> bool {
        if let Some(flag) = self.by_model.get(&(person_id, make, model)) {
            return flag.cooldown_ok;
        }
        if let Some(flag) = self.by_make.get(&(person_id, make)) {
            return flag.cooldown_ok;
        }
        true
    }
}

#[derive(Debug)]
struct VinSummary<'a> {
    market: &'a str,
    make: &'a str,
    model: &'a str,
    available_days: u32,
}

/// Build the weekly candidate set.
///
/// When `eligibility` is `None` the approval list is unknown and every
/// partner joins each make at default rank C. When it is present,
/// unlisted `(partner, make)` pairs join at rank C only if
/// `admit_unlisted` is set.
#[allow(clippy::too_many_arguments)]
pub fn build_weekly_candidates(
    availability: &[AvailabilityDay],
    cooldown: &[CooldownFlag],
    publication: &[PublicationStat],
    partners: &[Partner],
    eligibility: Option<&[Eligibility]>,
    week_start: NaiveDate,
    min_available_days: u32,
    admit_unlisted: bool,
) -> Vec<Candidate> {
    // Step 1: reduce the grid to one summary per VIN.
    let mut vins: Vec<(&str, VinSummary)> = Vec::new();
    let mut index_by_vin: HashMap<&str, usize> = HashMap::new();
    for row in availability {
        let idx = *index_by_vin.entry(row.vin.as_str()).or_insert_with(|| {
            vins.push((
                row.vin.as_str(),
                VinSummary {
                    market: row.market.as_str(),
                    make: row.make.as_str(),
                    model: row.model.as_str(),
                    available_days: 0,
                },
            ));
            vins.len() - 1
        });
        if row.available {
            vins[idx].1.available_days += 1;
        }
    }

    let cooldown_index = CooldownIndex::build(cooldown);

    let publication_index: HashMap<(i64, &str), &PublicationStat> = publication
        .iter()
        .map(|stat| ((stat.person_id, stat.make.as_str()), stat))
        .collect();

    let mut approved_by_make: HashMap<&str, Vec<(i64, Rank)>> = HashMap::new();
    if let Some(rows) = eligibility {
        for row in rows {
            approved_by_make
                .entry(row.make.as_str())
                .or_default()
                .push((row.person_id, row.rank));
        }
    }

    let mut candidates = Vec::new();
    for (vin, summary) in &vins {
        if summary.available_days < min_available_days {
            continue;
        }

        let pairings: Vec<(i64, Rank)> = match eligibility {
            // No approval list at all: everyone joins at default C.
            None => partners.iter().map(|p| (p.person_id, Rank::C)).collect(),
            Some(_) => {
                let mut approved = approved_by_make
                    .get(summary.make)
                    .cloned()
                    .unwrap_or_default();
                if admit_unlisted {
                    let listed: HashSet<i64> = approved.iter().map(|(id, _)| *id).collect();
                    approved.extend(
                        partners
                            .iter()
                            .filter(|p| !listed.contains(&p.person_id))
                            .map(|p| (p.person_id, Rank::C)),
                    );
                }
                approved
            }
        };

        for (person_id, rank) in pairings {
            if !cooldown_index.is_ok(person_id, summary.make, summary.model) {
                continue;
            }

            let stat = publication_index.get(&(person_id, summary.make));
            candidates.push(Candidate {
                vin: (*vin).to_string(),
                person_id,
                market: summary.market.to_string(),
                make: summary.make.to_string(),
                model: summary.model.to_string(),
                week_start,
                available_days: summary.available_days,
                cooldown_ok: true,
                publication_rate: stat.and_then(|s| s.publication_rate),
                supported: stat.map(|s| s.supported).unwrap_or(false),
                coverage: stat.map(|s| s.coverage).unwrap_or(0.0),
                rank,
            });
        }
    }

    candidates.sort_by(|a, b| (&a.vin, a.person_id).cmp(&(&b.vin, b.person_id)));
    candidates
}
