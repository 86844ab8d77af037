use handout_scraper::{HandoutRecord, HandoutScraper, ScrapingContext, spreadsheet};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

fn report_handouts(handouts: &[HandoutRecord]) {
    println!("**********************************");
    println!("*** Found {} handouts!", handouts.len());
    println!("**********************************");
    for handout in handouts {
        println!("{} - {}", handout.title, handout.url);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let context = ScrapingContext::new()?;
    let config = &context.scraping_config;

    let scraper = HandoutScraper::new(&context.request_client, config.listing_url());
    let handouts = scraper.scrape().await;
    report_handouts(&handouts);

    println!("*********************************");
    println!("*** Exporting to excel file.");
    println!("*********************************");
    let output_dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => spreadsheet::documents_dir()?,
    };
    let output_file = spreadsheet::export(&handouts, &output_dir)?;
    println!(
        "Handout web data has been exported to {} in {}.",
        spreadsheet::OUTPUT_FILE_NAME,
        output_dir.display()
    );

    if config.open_export {
        spreadsheet::open_export(&output_file);
    }
    Ok(())
}
