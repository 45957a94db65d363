/// Scheduler Service - orchestrates one weekly run.
///
/// The only component that depends on both repositories. It fans out the
/// ingest reads concurrently, then drives the three synchronous pipeline
/// stages: candidate generation, scoring, greedy assignment. The service
/// itself holds no state; cancellation between stages simply drops the
/// materialized tables.
use crate::config::SchedulerConfig;
use crate::domain::{
    Assignment, AvailabilityDay, Candidate, CooldownFlag, CurrentActivity, Eligibility,
    LoanRecord, OpsCapacity, Partner, PublicationStat, Rule, Vehicle,
};
use crate::etl::{
    build_availability_grid, compute_cooldown_flags, compute_publication_rate_24m,
    DEFAULT_MIN_OBSERVED, DEFAULT_WINDOW_MONTHS,
};
use crate::ports::{FleetRepository, PartnerRepository};
use crate::solver::{build_weekly_candidates, compute_candidate_scores, generate_week_schedule};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct SchedulerService {
    fleet_repo: Arc<dyn FleetRepository>,
    partner_repo: Arc<dyn PartnerRepository>,
}

struct FleetInputs {
    vehicles: Vec<Vehicle>,
    current_activity: Vec<CurrentActivity>,
    ops_capacity: Vec<OpsCapacity>,
}

struct PartnerInputs {
    partners: Vec<Partner>,
    eligibility: Vec<Eligibility>,
    rules: Vec<Rule>,
    loan_history: Vec<LoanRecord>,
}

impl SchedulerService {
    pub fn new(
        fleet_repo: Arc<dyn FleetRepository>,
        partner_repo: Arc<dyn PartnerRepository>,
    ) -> Self {
        Self {
            fleet_repo,
            partner_repo,
        }
    }

    /// Run the full pipeline for one office and week and return the
    /// assignment list for the caller to persist. An empty schedule is a
    /// valid outcome, distinguished from failure by the absence of an Err.
    pub async fn generate_week_schedule(
        &self,
        office: &str,
        week_start: NaiveDate,
        config: &SchedulerConfig,
    ) -> anyhow::Result<Vec<Assignment>> {
        let (fleet, partner) =
            tokio::try_join!(self.fetch_fleet_inputs(office), self.fetch_partner_inputs())?;

        let availability =
            build_availability_grid(&fleet.vehicles, &fleet.current_activity, week_start, office);

        let cooldown = if config.enable_cooldown {
            compute_cooldown_flags(
                &partner.loan_history,
                &partner.rules,
                week_start,
                config.default_cooldown_days,
            )
        } else {
            Vec::new()
        };

        let publication = compute_publication_rate_24m(
            &partner.loan_history,
            week_start,
            DEFAULT_WINDOW_MONTHS,
            DEFAULT_MIN_OBSERVED,
        );

        let candidates = build_weekly_candidates(
            &availability,
            &cooldown,
            &publication,
            &partner.partners,
            (!partner.eligibility.is_empty()).then_some(partner.eligibility.as_slice()),
            week_start,
            config.min_available_days,
            config.admit_without_eligibility,
        );
        tracing::info!(
            office,
            %week_start,
            vehicles = fleet.vehicles.len(),
            candidates = candidates.len(),
            "candidate generation complete"
        );

        let scored = compute_candidate_scores(candidates, &partner.partners);
        tracing::debug!(scored = scored.len(), "scoring complete");

        let schedule = generate_week_schedule(
            &scored,
            &availability,
            &partner.loan_history,
            &fleet.ops_capacity,
            &partner.rules,
            office,
            week_start,
            config,
        );
        tracing::info!(assignments = schedule.len(), "schedule generated");

        Ok(schedule)
    }

    /// The availability grid alone; used by diagnostics.
    pub async fn availability_grid(
        &self,
        office: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<AvailabilityDay>> {
        let fleet = self.fetch_fleet_inputs(office).await?;
        Ok(build_availability_grid(
            &fleet.vehicles,
            &fleet.current_activity,
            week_start,
            office,
        ))
    }

    /// Cooldown flags alone; used by diagnostics.
    pub async fn cooldown_flags(
        &self,
        week_start: NaiveDate,
        config: &SchedulerConfig,
    ) -> anyhow::Result<Vec<CooldownFlag>> {
        let (loan_history, rules) = tokio::try_join!(
            self.partner_repo.get_loan_history(),
            self.partner_repo.get_rules()
        )?;
        Ok(compute_cooldown_flags(
            &loan_history,
            &rules,
            week_start,
            config.default_cooldown_days,
        ))
    }

    /// Publication stats alone; used by diagnostics.
    pub async fn publication_stats(
        &self,
        as_of: NaiveDate,
    ) -> anyhow::Result<Vec<PublicationStat>> {
        let loan_history = self.partner_repo.get_loan_history().await?;
        Ok(compute_publication_rate_24m(
            &loan_history,
            as_of,
            DEFAULT_WINDOW_MONTHS,
            DEFAULT_MIN_OBSERVED,
        ))
    }

    /// Stage-1 candidates without scoring; used by diagnostics.
    pub async fn weekly_candidates(
        &self,
        office: &str,
        week_start: NaiveDate,
        config: &SchedulerConfig,
    ) -> anyhow::Result<Vec<Candidate>> {
        let (fleet, partner) =
            tokio::try_join!(self.fetch_fleet_inputs(office), self.fetch_partner_inputs())?;
        let availability =
            build_availability_grid(&fleet.vehicles, &fleet.current_activity, week_start, office);
        let cooldown = if config.enable_cooldown {
            compute_cooldown_flags(
                &partner.loan_history,
                &partner.rules,
                week_start,
                config.default_cooldown_days,
            )
        } else {
            Vec::new()
        };
        let publication = compute_publication_rate_24m(
            &partner.loan_history,
            week_start,
            DEFAULT_WINDOW_MONTHS,
            DEFAULT_MIN_OBSERVED,
        );
        Ok(build_weekly_candidates(
            &availability,
            &cooldown,
            &publication,
            &partner.partners,
            (!partner.eligibility.is_empty()).then_some(partner.eligibility.as_slice()),
            week_start,
            config.min_available_days,
            config.admit_without_eligibility,
        ))
    }

    async fn fetch_fleet_inputs(&self, office: &str) -> anyhow::Result<FleetInputs> {
        let (vehicles, current_activity, ops_capacity) = tokio::try_join!(
            self.fleet_repo.get_vehicles(office),
            self.fleet_repo.get_current_activity(),
            self.fleet_repo.get_ops_capacity(office)
        )?;
        Ok(FleetInputs {
            vehicles,
            current_activity,
            ops_capacity,
        })
    }

    async fn fetch_partner_inputs(&self) -> anyhow::Result<PartnerInputs> {
        let (partners, eligibility, rules, loan_history) = tokio::try_join!(
            self.partner_repo.get_partners(),
            self.partner_repo.get_eligibility(),
            self.partner_repo.get_rules(),
            self.partner_repo.get_loan_history()
        )?;
        Ok(PartnerInputs {
            partners,
            eligibility,
            rules,
            loan_history,
        })
    }
}
