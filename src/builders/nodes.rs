use crate::builders::matchers::{DeclKind, DefaultValue, TunableKind};

/// The documentation attached to an interface or template declaration.
///
/// A declaration is never emitted silently undocumented: either the comment
/// block found above it is carried verbatim, or the fixed placeholder body
/// is rendered in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBody {
    /// The payload lines of the comment block preceding the declaration,
    /// in original order.
    Lines(Vec<String>),
    /// No comment block preceded the declaration; rendering substitutes
    /// the fixed "missing" summary and parameter stubs.
    Missing,
}

/// One documented `interface(...)` or `template(...)` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub kind: DeclKind,
    pub name: String,
    /// 1-based line of the declaration header within the scanned file,
    /// counted after the leading blank-line run has been stripped.
    pub lineno: usize,
    pub body: DocBody,
}

/// One documented `gen_tunable(...)` or `gen_bool(...)` statement.
///
/// Unlike interfaces, tunables and booleans may legitimately carry an empty
/// body; no placeholder is substituted for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunableDecl {
    pub kind: TunableKind,
    pub name: String,
    pub default_value: DefaultValue,
    pub body: Vec<String>,
}

/// The documentation extracted from one module, i.e. one `.if` file plus
/// its paired `.te` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDoc {
    pub name: String,
    /// The interface-definition file the module was read from, as derived
    /// from the caller-supplied base path.
    pub filename: String,
    /// Module-level summary lines from the top of the file. May be empty;
    /// there is no placeholder for a missing module header.
    pub header: Vec<String>,
    pub interfaces: Vec<InterfaceDecl>,
    pub tunables: Vec<TunableDecl>,
}

/// One entry of an aggregate document, in caller-supplied order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Module(ModuleDoc),
    Tunables(Vec<TunableDecl>),
    /// Pre-rendered markup included as-is.
    Verbatim(String),
}

/// An aggregate of extraction results wrapped in a single `<policy>` root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub fragments: Vec<Fragment>,
}

impl InterfaceDecl {
    fn render_into(&self, out: &mut String) {
        out.push_str(&format!(
            "<{} name=\"{}\" lineno=\"{}\">\n",
            self.kind, self.name, self.lineno
        ));
        match &self.body {
            DocBody::Lines(lines) => {
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
            }
            DocBody::Missing => {
                out.push_str("<summary>\n");
                out.push_str("Summary is missing!\n");
                out.push_str("</summary>\n");
                out.push_str("<param name=\"?\">\n");
                out.push_str("<summary>\n");
                out.push_str("Parameter descriptions are missing!\n");
                out.push_str("</summary>\n");
                out.push_str("</param>\n");
            }
        }
        out.push_str(&format!("</{}>\n", self.kind));
    }
}

impl TunableDecl {
    fn render_into(&self, out: &mut String) {
        out.push_str(&format!(
            "<{} name=\"{}\" dftval=\"{}\">\n",
            self.kind, self.name, self.default_value
        ));
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("</{}>\n", self.kind));
    }
}

impl ModuleDoc {
    /// Renders the module element: the opening tag, the module summary
    /// lines, every interface/template in file order, then the tunables
    /// and booleans collected from the paired declaration file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<module name=\"{}\" filename=\"{}\">\n",
            self.name, self.filename
        ));
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        for decl in &self.interfaces {
            decl.render_into(&mut out);
        }
        for decl in &self.tunables {
            decl.render_into(&mut out);
        }
        out.push_str("</module>\n");
        out
    }
}

/// Renders a flat sequence of tunable/boolean elements with no wrapper.
/// This is both the stdout form for standalone tunable and boolean files
/// and the payload of the per-file XML cache.
pub fn render_tunables(decls: &[TunableDecl]) -> String {
    let mut out = String::new();
    for decl in decls {
        decl.render_into(&mut out);
    }
    out
}

impl Document {
    /// Renders every fragment in order inside the `<policy>` root element.
    pub fn render(&self) -> String {
        let mut out = String::from("<policy>\n");
        for fragment in &self.fragments {
            match fragment {
                Fragment::Module(module) => out.push_str(&module.render()),
                Fragment::Tunables(decls) => out.push_str(&render_tunables(decls)),
                Fragment::Verbatim(content) => out.push_str(content),
            }
        }
        out.push_str("</policy>\n");
        out
    }
}
