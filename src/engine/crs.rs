//! CRS resolution for `.prj` sidecars and target references.
//!
//! Accepts three shapes of projection text:
//! - an EPSG reference (`EPSG:27700` or `27700`), checked against `crs-definitions`;
//! - a PROJ string (`+proj=...`), validated with `proj4rs`;
//! - WKT1/WKT2 (`PROJCS[...]`, `GEOGCRS[...]`, ...). A top-level EPSG authority collapses it to
//!   `EPSG:n`; anything else comes back as compact WKT.

use crate::error::CrsParseError;

/// Turns projection text into a normalized CRS string.
pub trait CrsParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<String, CrsParseError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrsParser;

impl CrsParser for DefaultCrsParser {
    fn parse(&self, text: &str) -> Result<String, CrsParseError> {
        let text = text.trim_start_matches('\u{feff}').trim();
        if text.is_empty() {
            return Err(CrsParseError::Empty);
        }
        if let Some(code) = epsg_number(text) {
            return resolve_epsg(code);
        }
        if text.starts_with('+') {
            return parse_proj_string(text);
        }
        parse_wkt(text)
    }
}

/// EPSG code from `EPSG:n`, `epsg:n` or a bare `n`. Only the first whitespace-separated token is
/// read, so labels like `EPSG:27700 - OSGB 1936` work.
pub fn epsg_number(text: &str) -> Option<u32> {
    let token = text.split_whitespace().next()?;
    let digits = match token.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("epsg:") => &token[5..],
        _ => token,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// PROJ.4 definition for an EPSG code, if `crs-definitions` knows it.
pub fn proj_string_for(code: u32) -> Option<&'static str> {
    u16::try_from(code)
        .ok()
        .and_then(crs_definitions::from_code)
        .map(|def| def.proj4)
}

/// WKT for an EPSG code known to `crs-definitions`.
pub fn wkt_for(code: u32) -> Option<&'static str> {
    u16::try_from(code)
        .ok()
        .and_then(crs_definitions::from_code)
        .map(|def| def.wkt)
}

/// Name of the outermost WKT node (`PROJCS["OSGB 1936 / British National Grid",...` → the quoted part).
pub fn wkt_name(wkt: &str) -> Option<&str> {
    let start = wkt.find('"')? + 1;
    let len = wkt[start..].find('"')?;
    Some(&wkt[start..start + len])
}

fn resolve_epsg(code: u32) -> Result<String, CrsParseError> {
    proj_string_for(code)
        .map(|_| format!("EPSG:{code}"))
        .ok_or_else(|| CrsParseError::UnknownEpsg(code.to_string()))
}

fn parse_proj_string(text: &str) -> Result<String, CrsParseError> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    proj4rs::proj::Proj::from_proj_string(&normalized)
        .map_err(|e| CrsParseError::InvalidProj(format!("{e:?}")))?;
    Ok(normalized)
}

/// Root keywords accepted for a WKT CRS.
const WKT_ROOTS: &[&str] = &[
    "PROJCS",
    "GEOGCS",
    "GEOCCS",
    "COMPD_CS",
    "VERT_CS",
    "LOCAL_CS",
    "PROJCRS",
    "PROJECTEDCRS",
    "GEOGCRS",
    "GEOGRAPHICCRS",
    "GEODCRS",
    "GEODETICCRS",
    "VERTCRS",
    "VERTICALCRS",
    "COMPOUNDCRS",
    "BOUNDCRS",
    "ENGCRS",
    "ENGINEERINGCRS",
];

fn parse_wkt(text: &str) -> Result<String, CrsParseError> {
    let root = WktParser::new(text).parse_document()?;
    if !WKT_ROOTS.contains(&root.keyword.as_str()) {
        return Err(CrsParseError::MalformedWkt(format!(
            "unexpected root keyword {}",
            root.keyword
        )));
    }
    if let Some(code) = root.epsg_authority() {
        return Ok(format!("EPSG:{code}"));
    }
    Ok(root.to_compact())
}

#[derive(Clone, Debug, PartialEq)]
enum WktValue {
    Node(WktNode),
    Quoted(String),
    Bare(String),
}

#[derive(Clone, Debug, PartialEq)]
struct WktNode {
    keyword: String,
    args: Vec<WktValue>,
}

impl WktNode {
    /// `AUTHORITY["EPSG","n"]` (WKT1) or `ID["EPSG",n]` (WKT2) directly under this node.
    fn epsg_authority(&self) -> Option<u32> {
        self.args.iter().find_map(|arg| match arg {
            WktValue::Node(n) if n.keyword == "AUTHORITY" || n.keyword == "ID" => {
                match (n.args.first(), n.args.get(1)) {
                    (Some(WktValue::Quoted(auth)), Some(WktValue::Quoted(code) | WktValue::Bare(code)))
                        if auth.eq_ignore_ascii_case("EPSG") =>
                    {
                        code.trim().parse().ok()
                    }
                    _ => None,
                }
            }
            _ => None,
        })
    }

    fn to_compact(&self) -> String {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|a| match a {
                WktValue::Node(n) => n.to_compact(),
                WktValue::Quoted(s) => format!("\"{}\"", s.replace('"', "\"\"")),
                WktValue::Bare(s) => s.clone(),
            })
            .collect();
        format!("{}[{}]", self.keyword, args.join(","))
    }
}

struct WktParser {
    chars: Vec<char>,
    pos: usize,
}

impl WktParser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, what: &str) -> CrsParseError {
        CrsParseError::MalformedWkt(format!("{what} at offset {}", self.pos))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn parse_document(mut self) -> Result<WktNode, CrsParseError> {
        let node = self.parse_node()?;
        self.skip_ws();
        if self.peek().is_some() {
            return Err(self.error("trailing characters"));
        }
        Ok(node)
    }

    fn parse_node(&mut self) -> Result<WktNode, CrsParseError> {
        self.skip_ws();
        let keyword = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        if keyword.is_empty() {
            return Err(self.error("expected keyword"));
        }
        self.skip_ws();
        let close = match self.bump() {
            Some('[') => ']',
            Some('(') => ')',
            _ => return Err(self.error("expected '[' or '('")),
        };
        let mut args = Vec::new();
        loop {
            self.skip_ws();
            args.push(self.parse_value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(c) if c == close => break,
                Some(_) => return Err(self.error("unexpected character")),
                None => return Err(self.error("unterminated node")),
            }
        }
        Ok(WktNode {
            keyword: keyword.to_ascii_uppercase(),
            args,
        })
    }

    fn parse_value(&mut self) -> Result<WktValue, CrsParseError> {
        match self.peek() {
            Some('"') => self.parse_quoted().map(WktValue::Quoted),
            Some(c) if c.is_ascii_alphabetic() => {
                let start = self.pos;
                let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                self.skip_ws();
                if matches!(self.peek(), Some('[') | Some('(')) {
                    self.pos = start;
                    self.parse_node().map(WktValue::Node)
                } else {
                    Ok(WktValue::Bare(word))
                }
            }
            Some(_) => {
                let token = self.take_while(|c| {
                    !c.is_whitespace() && !matches!(c, ',' | ']' | ')' | '[' | '(' | '"')
                });
                if token.is_empty() {
                    Err(self.error("expected value"))
                } else {
                    Ok(WktValue::Bare(token))
                }
            }
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Quoted string; `""` inside is an escaped quote.
    fn parse_quoted(&mut self) -> Result<String, CrsParseError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') if self.peek() == Some('"') => {
                    self.bump();
                    out.push('"');
                }
                Some('"') => return Ok(out),
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}
