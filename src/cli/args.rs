//! CLI argument parsing

use crate::WalkConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Walk(WalkArgs),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkArgs {
    pub root: String,
    pub extension: String,
    pub min_size: u64,
    pub list: bool,
    pub delete: bool,
    pub report: Option<String>,
    pub log_file: Option<String>,
    pub quiet: bool,
}

impl Default for WalkArgs {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            extension: String::new(),
            min_size: 0,
            list: false,
            delete: false,
            report: None,
            log_file: None,
            quiet: false,
        }
    }
}

impl WalkArgs {
    /// Build the walk configuration. Listing is implied unless a delete was
    /// requested without an explicit `--list`.
    #[must_use]
    pub fn to_config(&self) -> WalkConfig {
        WalkConfig {
            extension: self.extension.clone(),
            min_size: self.min_size,
            list: self.list || !self.delete,
            delete: self.delete,
        }
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, what: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{what} requires a value"))
}

/// Parse command line arguments (including the program name in `args[0]`)
///
/// `-h`/`--help` and `-v`/`--version` win wherever they appear.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut walk_args = WalkArgs::default();
    let mut root: Option<String> = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--root" => {
                let value = take_value(args, &mut i, "--root")?;
                if root.is_some() {
                    return Err(format!("Unexpected argument: {value}"));
                }
                root = Some(value.to_string());
            }
            "--ext" => {
                walk_args.extension = take_value(args, &mut i, "--ext")?.to_string();
            }
            "--size" => {
                walk_args.min_size = take_value(args, &mut i, "--size")?
                    .parse()
                    .map_err(|_| "--size must be a non-negative integer".to_string())?;
            }
            "--list" => {
                walk_args.list = true;
            }
            "--del" | "--delete" => {
                walk_args.delete = true;
            }
            "--report" => {
                walk_args.report = Some(take_value(args, &mut i, "--report")?.to_string());
            }
            "--log" => {
                walk_args.log_file = Some(take_value(args, &mut i, "--log")?.to_string());
            }
            "--quiet" => {
                walk_args.quiet = true;
            }
            arg if !arg.starts_with('-') => {
                if root.is_some() {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                root = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if let Some(root) = root {
        if root.is_empty() {
            return Err("Root path must not be empty".to_string());
        }
        walk_args.root = root;
    }

    Ok(Command::Walk(walk_args))
}
