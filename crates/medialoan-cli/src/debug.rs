use anyhow::Result;
use medialoan_core::domain::parse_date_required;
use medialoan_core::{SchedulerConfig, SchedulerService};
use medialoan_storage::{init_db, SqliteFleetRepository, SqlitePartnerRepository};
use std::sync::Arc;

async fn open_service(database: &str) -> Result<SchedulerService> {
    let pool = init_db(database).await?;
    Ok(SchedulerService::new(
        Arc::new(SqliteFleetRepository::new(pool.clone())),
        Arc::new(SqlitePartnerRepository::new(pool)),
    ))
}

pub async fn availability(database: &str, office: &str, week_start: &str) -> Result<()> {
    let week_start = parse_date_required("week_start", week_start)?;
    let service = open_service(database).await?;

    let grid = service.availability_grid(office, week_start).await?;

    println!("Availability for {office}, week of {week_start}:");
    // The grid is seven consecutive rows per VIN.
    for week in grid.chunks(7) {
        let days: String = week
            .iter()
            .map(|row| if row.available { 'Y' } else { '.' })
            .collect();
        let first = &week[0];
        println!(
            "{:<20} {:<12} {:<14} [{days}]",
            first.vin, first.make, first.model
        );
    }
    println!("{} vehicle(s).", grid.len() / 7);
    Ok(())
}

pub async fn cooldown(database: &str, week_start: &str) -> Result<()> {
    let week_start = parse_date_required("week_start", week_start)?;
    let service = open_service(database).await?;

    let flags = service
        .cooldown_flags(week_start, &SchedulerConfig::default())
        .await?;

    println!("Cooldown grains as of {week_start}:");
    for flag in &flags {
        println!(
            "partner {:>9}  {:<12} {:<14} ok={:<5} until={}",
            flag.person_id,
            flag.make,
            flag.model.as_deref().unwrap_or("(make-level)"),
            flag.cooldown_ok,
            flag.cooldown_until
                .map(|d| d.to_string())
                .unwrap_or_default(),
        );
    }
    println!("{} grain(s).", flags.len());
    Ok(())
}

pub async fn publication(database: &str, as_of: &str) -> Result<()> {
    let as_of = parse_date_required("as_of", as_of)?;
    let service = open_service(database).await?;

    let stats = service.publication_stats(as_of).await?;

    println!("Publication stats (24m window ending {as_of}):");
    for stat in &stats {
        let rate = stat
            .publication_rate
            .map(|r| format!("{:.0}%", r * 100.0))
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "partner {:>9}  {:<12} loans={:<4} observed={:<4} rate={:<8} coverage={:.0}% supported={}",
            stat.person_id,
            stat.make,
            stat.loans_total_24m,
            stat.loans_observed_24m,
            rate,
            stat.coverage * 100.0,
            stat.supported,
        );
    }
    println!("{} grain(s).", stats.len());
    Ok(())
}

pub async fn candidates(database: &str, office: &str, week_start: &str) -> Result<()> {
    let week_start = parse_date_required("week_start", week_start)?;
    let service = open_service(database).await?;

    let candidates = service
        .weekly_candidates(office, week_start, &SchedulerConfig::default())
        .await?;

    println!("Candidates for {office}, week of {week_start}:");
    for c in &candidates {
        println!(
            "{:<20} partner {:>9}  {:<12} {:<14} days={} rank={}",
            c.vin, c.person_id, c.make, c.model, c.available_days, c.rank
        );
    }
    println!("{} candidate(s).", candidates.len());
    Ok(())
}
