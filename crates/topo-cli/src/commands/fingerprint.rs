//! Topology fingerprint command

use super::DescriptorArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Print the BLAKE3 digest of the synthesized topology
pub fn execute(args: &DescriptorArgs, config: &CliConfig) -> CliResult<()> {
    let topology = args.composer(config)?.synthesize()?;
    println!("{}", topology.fingerprint()?);
    Ok(())
}
