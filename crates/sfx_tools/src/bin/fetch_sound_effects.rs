//! Downloads every sound file referenced anywhere inside a remote json
//! manifest. Per url failures are skipped; a manifest failure aborts the run.

use clap::Parser as _;
use harvest::{download, fetch_manifest, harvest_strings};
use log::{info, warn};
use sfx_tools::args::FetchCli;

fn main() -> Result<(), anyhow::Error> {
    // Handle commandline arguments.
    let opt = FetchCli::parse();
    simple_logger::init_with_level(opt.log_opt.log_level).unwrap();

    let manifest = fetch_manifest(&opt.manifest_url)?;
    let links = harvest_strings(&manifest);
    info!(
        "Harvested {} candidate links from {}",
        links.len(),
        opt.manifest_url
    );

    let mut saved = 0usize;
    for url in &links {
        match download(url, &opt.out_dir) {
            Ok(_) => saved += 1,
            Err(err) => warn!("Skipping link: {err}"),
        }
    }
    info!("Saved {saved} of {} files to {}", links.len(), opt.out_dir.display());

    Ok(())
}
