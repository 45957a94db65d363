use anyhow::Result;
use medialoan_core::domain::parse_date_required;
use medialoan_core::{SchedulerConfig, SchedulerService};
use medialoan_storage::{init_db, SqliteFleetRepository, SqlitePartnerRepository};
use std::sync::Arc;

pub async fn run(
    database: &str,
    office: &str,
    week_start: &str,
    config: &SchedulerConfig,
    json: bool,
) -> Result<()> {
    let week_start = parse_date_required("week_start", week_start)?;

    let pool = init_db(database).await?;
    let service = SchedulerService::new(
        Arc::new(SqliteFleetRepository::new(pool.clone())),
        Arc::new(SqlitePartnerRepository::new(pool)),
    );

    let schedule = service
        .generate_week_schedule(office, week_start, config)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    if schedule.is_empty() {
        println!("No assignments for {office}, week of {week_start}.");
        return Ok(());
    }

    println!("Schedule for {office}, week of {week_start}:");
    println!(
        "{:<20} {:>9}  {:<12} {:<14} {:<10}  {:>5}",
        "VIN", "Partner", "Make", "Model", "Start", "Score"
    );
    for a in &schedule {
        println!(
            "{:<20} {:>9}  {:<12} {:<14} {:<10}  {:>5}",
            a.vin, a.person_id, a.make, a.model, a.start_day, a.score
        );
    }
    println!("{} assignment(s).", schedule.len());

    Ok(())
}
