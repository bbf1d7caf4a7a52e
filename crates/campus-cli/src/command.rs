//! Single-letter harness commands and their parser

use thiserror::Error;

/// Which of the two session maps a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSlot {
    One,
    Two,
}

impl MapSlot {
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// "1..." selects map 1, anything else map 2
    fn parse(arg: &str) -> Self {
        if arg.starts_with('1') {
            Self::One
        } else {
            Self::Two
        }
    }
}

/// A parsed harness command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `m 1|2`
    SelectMap(MapSlot),
    /// `b CODE NAME...`
    AddBuilding { code: String, name: String },
    /// `w CODE`
    Wreck { code: String },
    /// `f CODE`
    Find { code: String },
    /// `n CODE`
    AddNode { code: String },
    /// `v CODE`
    RemoveNode { code: String },
    /// `e CODE1 CODE2 TYPE`
    AddEdge {
        from: String,
        to: String,
        connector: String,
    },
    /// `r CODE1 CODE2`
    RemoveEdge { from: String, to: String },
    /// `d`
    DeleteGraph,
    /// `c`
    Copy,
    /// `a [TARGET SOURCE]`
    Assign { target: MapSlot, source: MapSlot },
    /// `q`
    Compare,
    /// `p CODE1 CODE2 [t|f]`
    Paths { from: String, to: String, all: bool },
    /// `g`
    Print,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command.")]
    Unknown(String),

    #[error("Command '{command}' is missing its {what}")]
    MissingArgument {
        command: char,
        what: &'static str,
    },
}

/// Parse one input line
///
/// Only the first character of the command word is significant. Blank lines
/// and `#` comments parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let word = words.next().unwrap_or_default();
    let op = word.chars().next().unwrap_or_default();
    let mut arg = |what: &'static str| {
        words
            .next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument { command: op, what })
    };

    let command = match op {
        'm' => Command::SelectMap(MapSlot::parse(&arg("map number")?)),
        'b' => {
            let code = arg("building code")?;
            let name = rest_after(line, 2);
            if name.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: op,
                    what: "building name",
                });
            }
            Command::AddBuilding { code, name }
        }
        'w' => Command::Wreck {
            code: arg("building code")?,
        },
        'f' => Command::Find {
            code: arg("building code")?,
        },
        'n' => Command::AddNode {
            code: arg("building code")?,
        },
        'v' => Command::RemoveNode {
            code: arg("building code")?,
        },
        'e' => Command::AddEdge {
            from: arg("first building code")?,
            to: arg("second building code")?,
            connector: arg("connector type")?,
        },
        'r' => Command::RemoveEdge {
            from: arg("first building code")?,
            to: arg("second building code")?,
        },
        'd' => Command::DeleteGraph,
        'c' => Command::Copy,
        'a' => match arg("target map") {
            Ok(target) => {
                let target = MapSlot::parse(&target);
                let source = arg("source map")
                    .map(|s| MapSlot::parse(&s))
                    .unwrap_or(target.other());
                Command::Assign { target, source }
            }
            Err(_) => Command::Assign {
                target: MapSlot::One,
                source: MapSlot::Two,
            },
        },
        'q' => Command::Compare,
        'p' => {
            let from = arg("origin code")?;
            let to = arg("destination code")?;
            let all = arg("all flag").is_ok_and(|flag| flag.starts_with('t'));
            Command::Paths { from, to, all }
        }
        'g' => Command::Print,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

/// Text following the first `skip` whitespace-separated words, trimmed
fn rest_after(line: &str, skip: usize) -> String {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        rest = rest
            .find(char::is_whitespace)
            .map_or("", |idx| rest[idx..].trim_start());
    }
    rest.trim().to_string()
}
