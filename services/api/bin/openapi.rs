use eduassist_api::router::write_openapi;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("openapi.json"));
    write_openapi(&path)?;
    println!("Wrote OpenAPI document to {}", path.display());
    Ok(())
}
