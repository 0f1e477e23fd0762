//! Template parsing and rendering.

use std::fmt;
use std::str::FromStr;

use crate::callsite::CallSiteInfo;
use crate::error::FormatError;

/// Default line-info template. The message follows it with no separator.
pub const DEFAULT_FORMAT: &str = "{filename}:{lineno} {name}(): ";

/// Column-aligned layout, handy when many call sites are interleaved.
pub const ALIGNED_FORMAT: &str = "{filename}:{lineno:>5} {name:>25}(): ";

/// Widest padding a spec may ask for.
pub const MAX_WIDTH: usize = 1024;

/// A recognized placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Filename,
    Lineno,
    Name,
}

impl Field {
    fn default_align(self) -> Align {
        match self {
            Field::Lineno => Align::Right,
            Field::Filename | Field::Name => Align::Left,
        }
    }
}

impl FromStr for Field {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filename" => Ok(Field::Filename),
            "lineno" => Ok(Field::Lineno),
            "name" => Ok(Field::Name),
            other => Err(FormatError::UnknownPlaceholder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

/// Padding rules for one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub fill: char,
    pub align: Option<Align>,
    pub width: usize,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            width: 0,
        }
    }
}

impl Spec {
    fn parse(field: Field, field_name: &str, raw: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidSpec {
            field: field_name.to_string(),
            spec: raw.to_string(),
        };

        let chars: Vec<char> = raw.chars().collect();
        let mut spec = Spec::default();
        let mut rest = &chars[..];

        if chars.len() >= 2 && Align::from_char(chars[1]).is_some() {
            spec.fill = chars[0];
            spec.align = Align::from_char(chars[1]);
            rest = &chars[2..];
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            spec.align = Some(align);
            rest = &chars[1..];
        }

        // Optional presentation type: `d` for numbers, `s` for strings.
        if let Some((&last, head)) = rest.split_last() {
            let allowed = match field {
                Field::Lineno => last == 'd',
                Field::Filename | Field::Name => last == 's',
            };
            if allowed {
                rest = head;
            }
        }

        if rest.len() > 1 && rest[0] == '0' && spec.align.is_none() {
            spec.fill = '0';
            spec.align = Some(Align::Right);
            rest = &rest[1..];
        }

        if !rest.is_empty() {
            let digits: String = rest.iter().collect();
            spec.width = digits.parse().map_err(|_| invalid())?;
            if spec.width > MAX_WIDTH {
                return Err(invalid());
            }
        }
        Ok(spec)
    }

    fn pad(&self, value: &str, default_align: Align) -> String {
        let len = value.chars().count();
        if len >= self.width {
            return value.to_string();
        }
        let missing = self.width - len;
        let (left, right) = match self.align.unwrap_or(default_align) {
            Align::Left => (0, missing),
            Align::Right => (missing, 0),
            Align::Center => (missing / 2, missing - missing / 2),
        };
        let mut out = String::with_capacity(value.len() + missing);
        out.extend(std::iter::repeat(self.fill).take(left));
        out.push_str(value);
        out.extend(std::iter::repeat(self.fill).take(right));
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { field: Field, spec: Spec },
}

/// A validated line-info template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Parse and validate a template.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut inner = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) | None => return Err(FormatError::UnclosedBrace(pos)),
                            Some((_, ch)) => inner.push(ch),
                        }
                    }
                    let (name, raw_spec) = match inner.split_once(':') {
                        Some((name, spec)) => (name, spec),
                        None => (inner.as_str(), ""),
                    };
                    let field: Field = name.parse()?;
                    let spec = Spec::parse(field, name, raw_spec)?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder { field, spec });
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(FormatError::UnmatchedBrace(pos)),
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute the call-site fields into the template.
    pub fn render(&self, site: &CallSiteInfo) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { field, spec } => {
                    let line;
                    let value = match field {
                        Field::Filename => site.filename.as_str(),
                        Field::Name => site.function_name.as_str(),
                        Field::Lineno => {
                            line = site.line_number.to_string();
                            line.as_str()
                        }
                    };
                    out.push_str(&spec.pad(value, field.default_align()));
                }
            }
        }
        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_FORMAT.to_string(),
            segments: vec![
                Segment::Placeholder { field: Field::Filename, spec: Spec::default() },
                Segment::Literal(":".to_string()),
                Segment::Placeholder { field: Field::Lineno, spec: Spec::default() },
                Segment::Literal(" ".to_string()),
                Segment::Placeholder { field: Field::Name, spec: Spec::default() },
                Segment::Literal("(): ".to_string()),
            ],
        }
    }
}

impl FromStr for FormatTemplate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
