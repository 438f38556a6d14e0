//! templetize's main application entry point.

use templetize::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    processor::Templetizer,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let template_dir =
        Templetizer::new(&engine).run(&args.source, &args.target, args.config.as_deref())?;

    println!("Template generated successfully in {}.", template_dir.display());
    Ok(())
}
