pub struct CliOptions {
    pub scene_file: Option<String>,
    pub constants: Vec<(String, String)>,
    pub screen: Option<(u32, u32)>,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            scene_file: None,
            constants: vec![],
            screen: None,
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --scene <file>
        --define NAME=VALUE     (repeatable)
        --screen <width>x<height>
        --help
        "#
    }
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: Vec<(String, Option<String>)> = vec![];
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with("--") {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            Some(value) if !value.starts_with("--") => {
                let value = args.pop();
                pairs.push((key, value));
            }
            _ => pairs.push((key, None)),
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match (k.as_str(), v) {
            ("--scene", Some(file)) => options.scene_file = Some(file),
            ("--define", Some(def)) => options.constants.push(parse_define(&def)?),
            ("--screen", Some(size)) => options.screen = Some(parse_screen(&size)?),
            ("--help", None) => options.show_help = true,
            ("--scene", None) | ("--define", None) | ("--screen", None) => {
                return Err(format!("Missing value for {}", k))
            }
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    Ok(options)
}

fn parse_define(def: &str) -> Result<(String, String), String> {
    match def.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("Expected NAME=VALUE, got {}", def)),
    }
}

fn parse_screen(size: &str) -> Result<(u32, u32), String> {
    let parsed = size
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)));
    match parsed {
        Some((w, h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(format!("Expected <width>x<height>, got {}", size)),
    }
}
