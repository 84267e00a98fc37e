//! Patterns - reusable starting configurations stamped onto a grid
//!
//! Built-in layouts use `#` for alive and `.` for dead, one string per row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const GLIDER: &[&str] = &[".#.", "..#", "###"];
const BLINKER: &[&str] = &["###"];
const TOAD: &[&str] = &[".###", "###."];
const BEACON: &[&str] = &["##..", "##..", "..##", "..##"];

/// A named boolean matrix. Rows may differ in length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    name: String,
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<bool>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn by_name(name: &str) -> Option<Pattern> {
        name.parse::<PatternKind>().ok().map(PatternKind::pattern)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn live_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|&&alive| alive).count()
    }

    fn from_layout(name: &str, layout: &[&str]) -> Self {
        let rows = layout
            .iter()
            .map(|line| line.bytes().map(|b| b == b'#').collect())
            .collect();
        Self::new(name, rows)
    }
}

impl FromStr for Pattern {
    type Err = String;

    /// Plaintext rows: `#`, `O`, `o` or `*` alive; `.` or space dead.
    /// Lines starting with `!` are comments. Empty or whitespace-only lines
    /// before the first and after the last row are dropped; rows of dead
    /// cells are kept.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with('!'))
            .collect();

        let start = lines
            .iter()
            .take_while(|(_, line)| line.trim().is_empty())
            .count();
        let trailing = lines[start..]
            .iter()
            .rev()
            .take_while(|(_, line)| line.trim().is_empty())
            .count();
        let end = lines.len() - trailing;

        let mut rows: Vec<Vec<bool>> = Vec::with_capacity(end - start);
        for &(line_no, line) in &lines[start..end] {
            let mut row = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                match c {
                    '#' | 'O' | 'o' | '*' => row.push(true),
                    '.' | ' ' => row.push(false),
                    '\r' => (),
                    _ => {
                        return Err(format!(
                            "unexpected character {:?} at line {}, column {}",
                            c,
                            line_no + 1,
                            col + 1
                        ))
                    }
                }
            }
            rows.push(row);
        }

        if !rows.iter().flatten().any(|&alive| alive) {
            return Err("pattern has no live cells".to_string());
        }
        Ok(Pattern::new("custom", rows))
    }
}

/// The built-in patterns offered by the front-end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Glider,
    Blinker,
    Toad,
    Beacon,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Glider,
        PatternKind::Blinker,
        PatternKind::Toad,
        PatternKind::Beacon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Glider => "glider",
            PatternKind::Blinker => "blinker",
            PatternKind::Toad => "toad",
            PatternKind::Beacon => "beacon",
        }
    }

    fn layout(self) -> &'static [&'static str] {
        match self {
            PatternKind::Glider => GLIDER,
            PatternKind::Blinker => BLINKER,
            PatternKind::Toad => TOAD,
            PatternKind::Beacon => BEACON,
        }
    }

    pub fn pattern(self) -> Pattern {
        Pattern::from_layout(self.name(), self.layout())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pattern: {}", s))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn pattern_names() -> Vec<&'static str> {
    PatternKind::ALL.iter().map(|kind| kind.name()).collect()
}
