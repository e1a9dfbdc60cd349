use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notice-harvest")]
#[command(about = "Two-stage scraper that turns rendered listing pages into structured records")]
#[command(version)]
pub struct Args {
    /// Pipeline stage to run
    #[arg(value_enum)]
    pub stage: StageArg,

    /// Input JSON file (seed records for links, page-link records for details)
    pub input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "detailedScrapedData.json")]
    pub output: PathBuf,

    /// WebDriver server URL
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Id of the DOM region holding child links on listing pages
    #[arg(long)]
    pub container: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    /// Harvest child links from each seed's listing page
    Links,
    /// Extract detail fields from each harvested link
    Details,
}
