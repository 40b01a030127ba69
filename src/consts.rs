//! Global constants for the command line front end.

pub const RULES_PATH_VAR: &str = "FORMCHECK_RULES"; // Variable pointing to the YAML rule file.
pub const INPUT_PATH_VAR: &str = "FORMCHECK_INPUT"; // Variable pointing to the JSON input record.
pub const DEFAULT_RULES_PATH: &str = "./config/rules.yaml"; // Rule file used when nothing is configured.
pub const DEFAULT_INPUT_PATH: &str = "./data/input.json"; // Input record used when nothing is configured.
