use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use guardias_calendar::{
    config::CalendarConfig,
    report::{CalendarReport, Coverage, RevertCheck},
    revert::can_revert_to_draft,
    session::CalendarSession,
    source::FileShiftSource,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = CalendarConfig::from_env()?;

    // Logs go to stderr, the report owns stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = FileShiftSource::new(&config.shifts_file);
    info!("Loading shifts from {}", source.path().display());

    let mut session = CalendarSession::new();
    session.refresh(&source).await?;
    info!(
        "Loaded {} shifts across {} days",
        session.shifts().len(),
        session.day_groups().len()
    );

    let coverage = config.target_date.map(|date| Coverage {
        date,
        shifts: session.shifts_on(date),
    });

    let revert = match config.schedule_id {
        Some(schedule_id) => {
            let reference_date = config.reference_date_or_today();
            let decision = can_revert_to_draft(&source, schedule_id, reference_date).await;
            info!("Revert check for schedule {}: {:?}", schedule_id, decision);
            Some(RevertCheck {
                schedule_id,
                reference_date,
                decision,
            })
        }
        None => None,
    };

    let report = CalendarReport {
        day_groups: session.day_groups().clone(),
        coverage,
        revert,
    };

    let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
    println!("{json}");

    Ok(())
}
