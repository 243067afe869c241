use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Provisioner - converts runtime provisioning requests into cluster models
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Convert a provisioning request into a cluster model
    Convert {
        /// Request file (JSON or YAML)
        input: PathBuf,

        /// Tenant owning the runtime
        #[arg(long)]
        tenant: String,

        /// Sub-account of the tenant
        #[arg(long)]
        sub_account: Option<String>,

        /// Runtime ID (generated when omitted)
        #[arg(long)]
        runtime_id: Option<String>,

        /// Output format (json or yaml)
        #[arg(short, long, default_value = "json")]
        output: String,
    },

    /// Check that a provisioning request converts cleanly
    Validate {
        /// Request file (JSON or YAML)
        input: PathBuf,
    },

    /// List the known Kyma releases
    Releases {
        /// Output format (table or json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}
