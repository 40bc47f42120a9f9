//! Types command implementation
//!
//! Lists the supported metadata types together with the configuration the
//! merge engine derives for each: root tag, mergeable sections and the
//! default dedup / merge-props flags.

use anyhow::Result;
use clap::Args;
use console::style;

use metamerge::metadata::{derive_default_flags, MetadataType};

/// Arguments for the types command
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Also list each type's mergeable sections
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the types command
pub fn execute(args: TypesArgs) -> Result<()> {
    for metadata_type in MetadataType::ALL {
        let config = metadata_type.config();
        let flags = derive_default_flags(metadata_type);

        println!("{}", style(config.name).bold());
        println!("  root tag: <{}>", config.root_tag);
        println!("  sections: {}", config.section_keys.len());
        println!(
            "  defaults: dedup={} merge-props={}",
            flags.dedup, flags.merge_props
        );
        if args.verbose {
            for section in config.section_keys {
                println!("    - {}", section);
            }
        }
    }
    Ok(())
}
