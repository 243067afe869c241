use anyhow::Result;
use provisioner_converter::ReleaseCatalog;

pub fn run_list(catalog: &ReleaseCatalog, output: &str) -> Result<()> {
    let releases = catalog.releases();

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&releases)?),
        "table" => {
            println!("{:<15} {:<12}", "VERSION", "COMPONENTS");
            println!("{}", "-".repeat(28));

            for release in &releases {
                println!("{:<15} {:<12}", release.version, release.components.len());
            }

            println!();
            println!("{} release(s) found", releases.len());
        }
        other => anyhow::bail!("Unknown output format '{}' (expected table or json)", other),
    }

    Ok(())
}
