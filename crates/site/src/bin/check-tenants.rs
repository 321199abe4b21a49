//! Tenant table checker for Steeple
//!
//! Builds the tenant registry in strict mode and reports every tenant with
//! the hosts routed to it. Fails on duplicate hosts, slugs or church ids, so
//! it can run in CI before a tenant file is deployed.
//!
//! Usage:
//!   cargo run --bin check-tenants
//!   cargo run --bin check-tenants tenants.json

use std::env;
use std::path::PathBuf;

use steeple_shared::{
    builtin_tenants, load_tenants_file, normalize_host, DuplicateHostPolicy, TenantRegistry,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tenants = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            println!("Checking tenant file {}", path.display());
            load_tenants_file(&path)?
        }
        None => {
            println!("Checking built-in tenants");
            builtin_tenants()
        }
    };

    let registry = match TenantRegistry::build(tenants, DuplicateHostPolicy::Reject) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n===========================================");
    for tenant in registry.tenants() {
        println!("{} ({}) - {}", tenant.slug, tenant.church_id, tenant.name);
        for host in &tenant.hosts {
            println!("  {}", normalize_host(host));
        }
    }
    println!("===========================================");
    println!(
        "{} tenants, {} hosts",
        registry.len(),
        registry.host_count()
    );

    Ok(())
}
