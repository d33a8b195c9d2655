use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;

/// The two declaration families found in interface-definition (`.if`) files.
///
/// The variant name doubles as the XML tag emitted for the declaration, so
/// an `interface(...)` header becomes an `<interface>` element and a
/// `template(...)` header a `<template>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Interface,
    Template,
}

/// The two statement families found in variable-declaration (`.te`) files.
///
/// `Bool` corresponds to the `gen_bool` keyword and is emitted as a
/// `<bool>` element, not `<boolean>`; the tag always matches the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunableKind {
    Tunable,
    Bool,
}

/// The default value carried by a tunable or boolean statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    True,
    False,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Interface => write!(f, "interface"),
            DeclKind::Template => write!(f, "template"),
        }
    }
}

impl fmt::Display for TunableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TunableKind::Tunable => write!(f, "tunable"),
            TunableKind::Bool => write!(f, "bool"),
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::True => write!(f, "true"),
            DefaultValue::False => write!(f, "false"),
        }
    }
}

/// The pre-compiled regular expressions that classify a single source line.
///
/// One `LineMatchers` value is built per run and shared by every extractor
/// pass; matching itself is a pure function of the line with no side
/// effects.
pub struct LineMatchers {
    /// Matches an annotation comment: two `#` characters at the start of
    /// the line, at least one whitespace character, then the payload. A
    /// line like `##comment` (no whitespace after the marker) is an
    /// ordinary comment, not documentation, and does not match.
    comment: Regex,
    /// Matches an `interface(` or `template(` header at line start
    /// (leading whitespace permitted), capturing the keyword and the
    /// quoted identifier. Purely lexical; the rest of the declaration is
    /// not validated.
    interface: Regex,
    /// Matches a `gen_tunable(` or `gen_bool(` statement, capturing the
    /// keyword suffix, the identifier and the `true`/`false` default.
    /// Whitespace around the comma is arbitrary.
    tunable: Regex,
}

impl LineMatchers {
    /// Compiles the three line patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            comment: Regex::new(r"^##\s+(.*?)\s*$").context("Invalid comment pattern")?,
            interface: Regex::new(r"^\s*(interface|template)\(`(\w*)'")
                .context("Invalid interface pattern")?,
            tunable: Regex::new(r"^\s*gen_(tunable|bool)\(\s*(\w*)\s*,\s*(true|false)\s*\)")
                .context("Invalid tunable pattern")?,
        })
    }

    /// Extracts the documentation payload from an annotation comment line.
    ///
    /// Returns the text following the `##` marker and its mandatory
    /// whitespace, with a single trailing run of whitespace removed.
    /// Returns `None` for every other line.
    pub fn match_comment(&self, line: &str) -> Option<String> {
        self.comment
            .captures(line)
            .map(|captures| captures[1].to_string())
    }

    /// Recognizes an interface or template declaration header.
    ///
    /// Returns the declaration kind and name, e.g.
    /// ``interface(`kernel_read_system_state',` `` gives
    /// `(DeclKind::Interface, "kernel_read_system_state")`.
    pub fn match_interface(&self, line: &str) -> Option<(DeclKind, String)> {
        self.interface.captures(line).map(|captures| {
            let kind = match &captures[1] {
                "interface" => DeclKind::Interface,
                _ => DeclKind::Template,
            };
            (kind, captures[2].to_string())
        })
    }

    /// Recognizes a tunable or boolean generator statement.
    ///
    /// Returns kind, name and default value, e.g.
    /// `gen_bool(secure_mode, false)` gives
    /// `(TunableKind::Bool, "secure_mode", DefaultValue::False)`.
    pub fn match_tunable(&self, line: &str) -> Option<(TunableKind, String, DefaultValue)> {
        self.tunable.captures(line).map(|captures| {
            let kind = match &captures[1] {
                "tunable" => TunableKind::Tunable,
                _ => TunableKind::Bool,
            };
            let default_value = match &captures[3] {
                "true" => DefaultValue::True,
                _ => DefaultValue::False,
            };
            (kind, captures[2].to_string(), default_value)
        })
    }
}
