//! What a binary was built from, for attaching to timing results.

use crate::solver::KernelKind;
use clap::ValueEnum;

#[derive(Clone, Debug, PartialEq)]
pub struct BuildInfo {
    pub name: String,
    pub version: &'static str,
    pub git_describe: &'static str,
    pub git_hash: &'static str,
    pub profiling: bool,
    pub debug_assertions: bool,
}

impl BuildInfo {
    pub fn new(name: &str) -> Self {
        BuildInfo {
            name: name.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            git_describe: env!("GIT_DESCRIBE"),
            git_hash: env!("GIT_HASH"),
            profiling: cfg!(feature = "profile-with-puffin"),
            debug_assertions: cfg!(debug_assertions),
        }
    }

    /// One JSON object, kernel names as accepted by `--kernels`.
    pub fn to_json(&self) -> String {
        let kernels: Vec<String> = KernelKind::all()
            .iter()
            .filter_map(|k| k.to_possible_value())
            .map(|v| format!("\"{}\"", v.get_name()))
            .collect();
        format!(
            "{{\n  \"name\": \"{}\",\n  \"version\": \"{}\",\n  \
             \"git_describe\": \"{}\",\n  \"git_hash\": \"{}\",\n  \
             \"profiling\": {},\n  \"debug_assertions\": {},\n  \
             \"kernels\": [{}]\n}}",
            self.name,
            self.version,
            self.git_describe,
            self.git_hash,
            self.profiling,
            self.debug_assertions,
            kernels.join(", ")
        )
    }
}

pub fn print_report(name: &str) {
    println!("{}", BuildInfo::new(name).to_json());
}
