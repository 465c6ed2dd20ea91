use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use excel_labels::{LayoutConfig, convert_xlsx_to_labels};

/// Converts an Excel table into a batch of labels, as a PDF file.
///
/// The header row of the first worksheet names the fields printed on each
/// label. Rows with an empty "print?" cell are skipped and a "comment"
/// column is never printed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input Excel file. Should follow the format of 'template.xlsx'.
    #[arg(default_value = "template.xlsx")]
    input: PathBuf,

    /// The output PDF file.
    #[arg(default_value = "output.pdf")]
    output: PathBuf,

    /// Width (mm) of each single label cell.
    #[arg(long = "width", default_value_t = 40.0)]
    cell_width_mm: f32,

    /// Height (mm) of each single label cell.
    #[arg(long = "height", default_value_t = 22.0)]
    cell_height_mm: f32,

    /// Margin (mm) between text and label cell frame.
    #[arg(long = "margin", default_value_t = 3.0)]
    cell_margin_mm: f32,

    /// No frame around label cells.
    #[arg(long)]
    no_frame: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = LayoutConfig {
        cell_width: args.cell_width_mm,
        cell_height: args.cell_height_mm,
        cell_margin: args.cell_margin_mm,
        draw_border: !args.no_frame,
        ..LayoutConfig::default()
    };

    match convert_xlsx_to_labels(&args.input, &args.output, &config) {
        Ok(summary) => {
            println!(
                "Done -- '{}' contains {} label(s) on {} page(s).",
                args.output.display(),
                summary.labels,
                summary.pages,
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
