//! Smoke-check an org through the REST facade.
//!
//! Lists the supported API versions, the resource map and the object
//! types visible to the session, then describes one object type.
//!
//! ```sh
//! export SF_INSTANCE_URL='https://myorg.my.salesforce.com'
//! export SF_ACCESS_TOKEN='00D...'
//! cargo run --bin sfsdk-probe -- Account
//! ```

use sfsdk::{NetClient, SessionCredentials};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let object_type = std::env::args().nth(1).unwrap_or_else(|| "Account".to_string());

    let creds = SessionCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Export SF_INSTANCE_URL and SF_ACCESS_TOKEN (SF_API_VERSION is optional).");
        eprintln!("  With the sf CLI: sf org display --verbose");
        std::process::exit(1);
    });

    let client = NetClient::from_credentials(&creds).unwrap_or_else(|e| {
        eprintln!("Error: Failed to create client: {e}");
        std::process::exit(1);
    });

    println!("Probing {} with {}\n", creds.instance_url(), client.api_version());

    match client.versions().await {
        Ok(versions) => match versions.last() {
            Some(latest) => println!(
                "  {} versions, latest {} ({})",
                versions.len(),
                latest.version,
                latest.label
            ),
            None => println!("  No versions reported"),
        },
        Err(e) => fail("versions", e),
    }

    match client.resources().await {
        Ok(resources) => {
            let mut names: Vec<&String> = resources.keys().collect();
            names.sort();
            println!("  {} resources: {}", names.len(), join(&names));
        }
        Err(e) => fail("resources", e),
    }

    match client.describe_global().await {
        Ok(global) => println!("  {} object types", global.sobjects.len()),
        Err(e) => fail("describeGlobal", e),
    }

    match client.describe(&object_type).await {
        Ok(describe) => println!(
            "  {}: {} fields, custom = {}",
            describe.name,
            describe.fields.len(),
            describe.custom
        ),
        Err(e) => fail("describe", e),
    }

    println!("\nProbe complete.");
}

fn join(names: &[&String]) -> String {
    names
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn fail(operation: &str, error: sfsdk::net::Error) -> ! {
    eprintln!("Error: {operation} failed: {error}");
    std::process::exit(1);
}
