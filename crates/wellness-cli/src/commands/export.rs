use std::path::Path;

use chrono::Local;
use wellness_core::export::{CopyShare, SystemShare};
use wellness_core::LogService;

use crate::error::CliError;

pub async fn run_export(
    output_path: Option<&Path>,
    open: bool,
    service: &LogService,
) -> Result<(), CliError> {
    if let Some(path) = output_path {
        let target = CopyShare::new(path, Local::now().date_naive());
        let destination = target.resolved_destination();
        service
            .share_log(target)
            .await
            .map_err(CliError::from_share)?;
        println!("{}", destination.display());
        return Ok(());
    }

    if open {
        let location = service
            .share_log(SystemShare)
            .await
            .map_err(CliError::from_share)?;
        println!("{location}");
        return Ok(());
    }

    let location = service.export_log().await?.ok_or(CliError::NothingSaved)?;
    println!("{location}");
    Ok(())
}
