use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json, write_xlsx};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let pool = DbPool::new(&cfg.database)?;
        let rows = store::get_all(&pool.conn)?;

        match format {
            ExportFormat::Csv => {
                write_csv(file, &rows)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(file, &rows)?;
                notify_export_success("JSON", path);
            }
            ExportFormat::Xlsx => {
                write_xlsx(path, &rows)?;
                notify_export_success("XLSX", path);
            }
        }
    }
    Ok(())
}
