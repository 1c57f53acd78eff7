//! CLI domain: parse, route, help, output, and presentation only.
//! Demonstration harness around the commit / prove / verify library surface.

mod help;
mod output;
mod parse;
mod presentation;
mod route;
mod sample;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_demo_intro, format_demo_result, format_proof, format_root_json, format_root_text,
    format_verification,
};
pub use route::{CommandOutput, RunContext};
pub use sample::SAMPLE_TEXT;
