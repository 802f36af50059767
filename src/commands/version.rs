use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sysmon version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
