//! Line parser for command scripts

use campusnet_core::bail_usage;
use campusnet_core::error::{CampusError, Result};
use campusnet_core::graph::NodeId;
use campusnet_core::registry::{ClassCode, Ufid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Double-quoted text, quotes stripped
    Quoted(String),
    Bare(String),
}

impl Token {
    fn bare(&self) -> Result<&str> {
        match self {
            Token::Bare(s) => Ok(s.as_str()),
            Token::Quoted(s) => Err(CampusError::UsageError(format!(
                "unexpected quoted argument \"{}\"",
                s
            ))),
        }
    }
}

/// Split on whitespace; a double-quoted run is one token and may hold spaces
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let mut text = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                text.push(c);
            }
            if !closed {
                bail_usage!("unterminated quote");
            }
            tokens.push(Token::Quoted(text));
        } else {
            let mut text = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c == '"' {
                    break;
                }
                text.push(c);
                chars.next();
            }
            tokens.push(Token::Bare(text));
        }
    }

    Ok(tokens)
}

/// One parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Insert {
        name: String,
        ufid: Ufid,
        residence: NodeId,
        classes: Vec<ClassCode>,
    },
    Remove {
        ufid: Ufid,
    },
    DropClass {
        ufid: Ufid,
        code: ClassCode,
    },
    ReplaceClass {
        ufid: Ufid,
        old: ClassCode,
        new: ClassCode,
    },
    RemoveClass {
        code: ClassCode,
    },
    ToggleEdgesClosure {
        pairs: Vec<(NodeId, NodeId)>,
    },
    CheckEdgeStatus {
        from: NodeId,
        to: NodeId,
    },
    IsConnected {
        from: NodeId,
        to: NodeId,
    },
    PrintShortestEdges {
        ufid: Ufid,
    },
    PrintStudentZone {
        ufid: Ufid,
    },
    VerifySchedule {
        ufid: Ufid,
    },
}

impl ScriptCommand {
    /// Keyword as written in scripts
    pub fn keyword(&self) -> &'static str {
        match self {
            ScriptCommand::Insert { .. } => "insert",
            ScriptCommand::Remove { .. } => "remove",
            ScriptCommand::DropClass { .. } => "dropClass",
            ScriptCommand::ReplaceClass { .. } => "replaceClass",
            ScriptCommand::RemoveClass { .. } => "removeClass",
            ScriptCommand::ToggleEdgesClosure { .. } => "toggleEdgesClosure",
            ScriptCommand::CheckEdgeStatus { .. } => "checkEdgeStatus",
            ScriptCommand::IsConnected { .. } => "isConnected",
            ScriptCommand::PrintShortestEdges { .. } => "printShortestEdges",
            ScriptCommand::PrintStudentZone { .. } => "printStudentZone",
            ScriptCommand::VerifySchedule { .. } => "verifySchedule",
        }
    }
}

/// Cursor over a line's arguments
struct Args<'a> {
    keyword: &'a str,
    tokens: std::slice::Iter<'a, Token>,
}

impl<'a> Args<'a> {
    fn next_bare(&mut self, what: &str) -> Result<&'a str> {
        match self.tokens.next() {
            Some(token) => token.bare(),
            None => Err(CampusError::UsageError(format!(
                "{}: missing {}",
                self.keyword, what
            ))),
        }
    }

    fn ufid(&mut self) -> Result<Ufid> {
        self.next_bare("UFID")?.parse()
    }

    fn code(&mut self) -> Result<ClassCode> {
        self.next_bare("class code")?.parse()
    }

    fn node(&mut self) -> Result<NodeId> {
        self.next_bare("location id")?.parse()
    }

    fn count(&mut self) -> Result<usize> {
        let raw = self.next_bare("count")?;
        raw.parse()
            .map_err(|_| CampusError::invalid_value("count", raw))
    }

    fn quoted(&mut self, what: &str) -> Result<String> {
        match self.tokens.next() {
            Some(Token::Quoted(text)) => Ok(text.clone()),
            _ => Err(CampusError::UsageError(format!(
                "{}: {} must be double-quoted",
                self.keyword, what
            ))),
        }
    }

    fn finish<T>(mut self, command: T) -> Result<T> {
        if self.tokens.next().is_some() {
            bail_usage!(format!("{}: too many arguments", self.keyword));
        }
        Ok(command)
    }
}

/// Parse one non-empty script line
pub fn parse_line(line: &str) -> Result<ScriptCommand> {
    let tokens = tokenize(line)?;
    let Some((first, rest)) = tokens.split_first() else {
        bail_usage!("empty command");
    };
    let keyword = first.bare()?;
    let mut args = Args {
        keyword,
        tokens: rest.iter(),
    };

    match keyword {
        "insert" => {
            let name = args.quoted("student name")?;
            let ufid = args.ufid()?;
            let residence = args.node()?;
            let n = args.count()?;
            let classes = (0..n).map(|_| args.code()).collect::<Result<Vec<_>>>()?;
            args.finish(ScriptCommand::Insert {
                name,
                ufid,
                residence,
                classes,
            })
        }
        "remove" => {
            let ufid = args.ufid()?;
            args.finish(ScriptCommand::Remove { ufid })
        }
        "dropClass" => {
            let ufid = args.ufid()?;
            let code = args.code()?;
            args.finish(ScriptCommand::DropClass { ufid, code })
        }
        "replaceClass" => {
            let ufid = args.ufid()?;
            let old = args.code()?;
            let new = args.code()?;
            args.finish(ScriptCommand::ReplaceClass { ufid, old, new })
        }
        "removeClass" => {
            let code = args.code()?;
            args.finish(ScriptCommand::RemoveClass { code })
        }
        "toggleEdgesClosure" => {
            let n = args.count()?;
            let pairs = (0..n)
                .map(|_| -> Result<(NodeId, NodeId)> { Ok((args.node()?, args.node()?)) })
                .collect::<Result<Vec<_>>>()?;
            args.finish(ScriptCommand::ToggleEdgesClosure { pairs })
        }
        "checkEdgeStatus" => {
            let from = args.node()?;
            let to = args.node()?;
            args.finish(ScriptCommand::CheckEdgeStatus { from, to })
        }
        "isConnected" => {
            let from = args.node()?;
            let to = args.node()?;
            args.finish(ScriptCommand::IsConnected { from, to })
        }
        "printShortestEdges" => {
            let ufid = args.ufid()?;
            args.finish(ScriptCommand::PrintShortestEdges { ufid })
        }
        "printStudentZone" => {
            let ufid = args.ufid()?;
            args.finish(ScriptCommand::PrintStudentZone { ufid })
        }
        "verifySchedule" => {
            let ufid = args.ufid()?;
            args.finish(ScriptCommand::VerifySchedule { ufid })
        }
        other => Err(CampusError::UsageError(format!("unknown command: {}", other))),
    }
}
