/// Default number of runs returned by the list command.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Default regression tolerance for the gate command, as a fraction.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineConfig {
    pub database: String,
    pub command: String,
    pub file: Option<String>,
    pub commit: Option<String>,
    pub signature: String,
    pub id: Option<i64>,
    pub before_id: Option<i64>,
    pub after_id: Option<i64>,
    pub tolerance: f64,
    pub limit: usize,
    pub json: bool,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = Self {
            database: String::from("memory"),
            command: String::from("list"),
            file: None,
            commit: None,
            signature: String::new(),
            id: None,
            before_id: None,
            after_id: None,
            tolerance: DEFAULT_TOLERANCE,
            limit: DEFAULT_LIST_LIMIT,
            json: false,
        };
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--db" | "--database" => {
                    config.database = iter
                        .next()
                        .ok_or_else(|| "--db requires a value".to_string())?
                        .to_string();
                }
                "--command" => {
                    config.command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                }
                "--file" => {
                    config.file = Some(
                        iter.next()
                            .ok_or_else(|| "--file requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--commit" => {
                    config.commit = Some(
                        iter.next()
                            .ok_or_else(|| "--commit requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--signature" => {
                    config.signature = iter
                        .next()
                        .ok_or_else(|| "--signature requires a value".to_string())?
                        .to_string();
                }
                "--id" => {
                    config.id = Some(numeric_flag(iter.next(), "--id")?);
                }
                "--a" => {
                    config.before_id = Some(numeric_flag(iter.next(), "--a")?);
                }
                "--b" => {
                    config.after_id = Some(numeric_flag(iter.next(), "--b")?);
                }
                "--tolerance" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--tolerance requires a value".to_string())?;
                    config.tolerance = value
                        .parse::<f64>()
                        .map_err(|_| format!("--tolerance requires a number, got {value}"))?;
                }
                "--limit" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--limit requires a value".to_string())?;
                    config.limit = value
                        .parse::<usize>()
                        .map_err(|_| format!("--limit requires a number, got {value}"))?;
                }
                "--json" => {
                    config.json = true;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    config.command = arg.to_string();
                }
            }
        }
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: benchvault [--db memory|PATH] COMMAND [flags]\n\
         Commands:\n\
         \x20 upload   --file PATH --commit SHA [--signature SIG]\n\
         \x20 show     --id ID\n\
         \x20 list     [--limit N] [--json]\n\
         \x20 compare  --a ID --b ID [--json]\n\
         \x20 gate     --a ID --b ID [--tolerance FRACTION]\n"
    }
}

fn numeric_flag(value: Option<&&str>, flag: &str) -> Result<i64, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse::<i64>()
        .map_err(|_| format!("{flag} requires a numeric id, got {value}"))
}
