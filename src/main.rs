use clap::Parser;
use notice_harvest::Harvester;
use notice_harvest::store;
use std::error::Error;

mod args;
use args::{Args, StageArg};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    if let Err(e) = run(args).await {
        ::log::error!("Run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut harvester = Harvester::new();
    if let Some(path) = &args.config {
        harvester = harvester.with_config_file(path)?;
    }
    if let Some(url) = &args.webdriver_url {
        harvester = harvester.with_webdriver_url(url);
    }
    if let Some(id) = &args.container {
        harvester = harvester.with_container_id(id);
    }

    let start_time = std::time::Instant::now();

    let written = match args.stage {
        StageArg::Links => {
            let seeds = store::read_seeds(&args.input)?;
            ::log::info!(
                "Loaded {} seed records from {}",
                seeds.len(),
                args.input.display()
            );

            let records = harvester.collect_page_links(&seeds).await?;
            store::write_records(&args.output, &records)?;
            records.len()
        }
        StageArg::Details => {
            let records = store::read_page_links(&args.input)?;
            ::log::info!(
                "Loaded {} page-link records from {}",
                records.len(),
                args.input.display()
            );

            let results = harvester.collect_details(&records).await?;
            store::write_records(&args.output, &results)?;
            results.len()
        }
    };

    ::log::info!(
        "Wrote {} records to {} in {:.2} seconds",
        written,
        args.output.display(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
