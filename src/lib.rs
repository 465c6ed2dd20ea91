mod error;
pub mod layout;
pub mod model;
mod pdf;
pub mod sheet;

pub use error::Error;
pub use model::{LayoutConfig, Summary};

use std::path::Path;
use std::time::Instant;

/// Convert a spreadsheet of label rows into a paginated PDF of label cells.
///
/// Straight-line transform: parse and filter the sheet, paginate the render
/// list, render pages, write the file once at the end. No partial output is
/// left behind if any step fails.
pub fn convert_xlsx_to_labels(
    input: &Path,
    output: &Path,
    config: &LayoutConfig,
) -> Result<Summary, Error> {
    let t0 = Instant::now();

    let sheet = sheet::parse(input)?;
    log::info!("Parsed {}. Generating {} labels...", input.display(), sheet.records.len());
    let t_parse = t0.elapsed();

    let pages = layout::paginate(&sheet, config)?;
    let t_layout = t0.elapsed();

    let bytes = pdf::render(&pages, config);
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, layout={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_layout - t_parse).as_secs_f64() * 1000.0,
        (t_render - t_layout).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(Summary {
        labels: sheet.records.len(),
        pages: pages.len(),
    })
}
