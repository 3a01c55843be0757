use blockview::capture::platform_capturer;
use blockview::cli::{usage_exit_code, Args, Job};
use blockview::config::Config;
use blockview::error::AppError;
use blockview::output::OutputWriter;
use blockview::render::FrameRenderer;
use blockview::session::{run_image, WindowSession};
use blockview::terminal::{setup_ctrlc_handler, CrosstermSize, CursorGuard, TermSize};
use clap::{CommandFactory, Parser};

fn main() {
    // Logs go to stderr so they never mix with frame bytes on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => exit_with_usage(e),
    };

    let job = match args.job() {
        Ok(Some(job)) => job,
        Ok(None) => {
            let _ = Args::command().print_help();
            return;
        }
        Err(e) => exit_with_usage(e),
    };

    if let Err(e) = run(&args, job) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print a clap error and exit: 0 for help/version, 1 for usage errors.
fn exit_with_usage(e: clap::Error) -> ! {
    let _ = e.print();
    std::process::exit(usage_exit_code(&e));
}

fn run(args: &Args, job: Job) -> Result<(), AppError> {
    let file = Config::load(args.config.as_deref())?;
    let config = args.render_config(&file, &job);
    let renderer = FrameRenderer::new(job.mode(), config);
    log::debug!("render config: {:?}", config);

    match job {
        Job::Image { path, .. } => {
            let mut out = OutputWriter::stdout(config.output_path);
            let stats = run_image(&path, &renderer, TermSize::current(), &mut out)?;
            log::info!(
                "rendered {}x{} in {:.2}ms",
                stats.source_width,
                stats.source_height,
                stats.last_render_ms()
            );
        }
        Job::Window { title, .. } => {
            let capturer = platform_capturer(args.window_target(&file, &title))?;
            setup_ctrlc_handler()?;
            let _guard = CursorGuard::enter()?;
            let out = OutputWriter::stdout(config.output_path);
            WindowSession::new(capturer, renderer, CrosstermSize, out).run()?;
        }
    }
    Ok(())
}
